mod errors;
mod internal;

use async_trait::async_trait;

use crate::data::User;
use crate::username_string::UsernameString;

pub use errors::UserStoreError;
pub use internal::InMemoryUserStore;

/// User persistence keyed by the unique validated name.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(
        &self,
        name: &UsernameString,
    ) -> Result<Option<User>, UserStoreError>;

    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Upsert keyed by `user.name`.
    async fn save(
        &self,
        user: User,
    ) -> Result<User, UserStoreError>;

    async fn delete(
        &self,
        name: &UsernameString,
    ) -> Result<bool, UserStoreError>;
}
