mod internal;

use async_trait::async_trait;

use crate::data::{User, UserDraft, UserUpdate};
use crate::user_store::UserStoreError;
use crate::username_string::UsernameString;

pub use internal::{ProductionUserService, UserServiceImpl};

/// User record operations; passwords are hashed on every write and the
/// plaintext never reaches the store.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create(
        &self,
        draft: UserDraft,
    ) -> Result<User, UserStoreError>;

    async fn get_by_name(
        &self,
        name: &UsernameString,
    ) -> Result<Option<User>, UserStoreError>;

    async fn list_all(&self) -> Result<Vec<User>, UserStoreError>;

    /// Full replace keyed by `name`; a previously absent name is created.
    async fn update(
        &self,
        name: &UsernameString,
        update: UserUpdate,
    ) -> Result<User, UserStoreError>;

    /// Returns whether a record existed and was removed.
    async fn delete(
        &self,
        name: &UsernameString,
    ) -> Result<bool, UserStoreError>;
}
