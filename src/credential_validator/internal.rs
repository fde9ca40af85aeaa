use async_trait::async_trait;
use log::{debug, trace};

use crate::credential_validator::CredentialValidator;
use crate::data::User;
use crate::hasher::{Hasher, ProductionHasher};
use crate::user_store::{InMemoryUserStore, UserStore, UserStoreError};
use crate::username_string::UsernameString;


pub struct CredentialValidatorImpl<H: Hasher, S: UserStore> {
    hasher: H,
    store: S,
}

pub type ProductionCredentialValidator =
    CredentialValidatorImpl<ProductionHasher, InMemoryUserStore>;

impl<H: Hasher, S: UserStore> CredentialValidatorImpl<H, S> {
    pub fn new(hasher: H, store: S) -> Self {
        CredentialValidatorImpl {
            hasher,
            store,
        }
    }

    async fn check(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Option<User>, UserStoreError> {
        trace!("checking credentials of \"{username}\"");
        let user = self.store.get(username).await?;
        match user {
            None => Ok(None),
            Some(user) => {
                if self.hasher
                    .check_hash(user.password_hash.password_hash(), password)
                {
                    Ok(Some(user))
                } else {
                    debug!("credential mismatch for \"{username}\"");
                    Ok(None)
                }
            }
        }
    }
}

#[async_trait]
impl<H: Hasher, S: UserStore> CredentialValidator
    for CredentialValidatorImpl<H, S>
{
    async fn validate(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<bool, UserStoreError> {
        Ok(self.check(username, password).await?.is_some())
    }

    async fn authenticate(
        &self,
        username: &UsernameString,
        password: &str,
    ) -> Result<Option<User>, UserStoreError> {
        self.check(username, password).await
    }
}
