mod internal;

use async_trait::async_trait;

use crate::data::User;
use crate::user_store::UserStoreError;
use crate::username_string::UsernameString;

pub use internal::{CredentialValidatorImpl, ProductionCredentialValidator};

/// The credential gate in front of privileged operations. An unknown
/// name and a hash mismatch are both simply invalid; only store
/// failures surface as errors.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    async fn validate(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<bool, UserStoreError>;

    async fn authenticate(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Option<User>, UserStoreError>;
}
