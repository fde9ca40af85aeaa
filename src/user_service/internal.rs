use async_trait::async_trait;
use log::{debug, info, warn};

use crate::data::{User, UserDraft, UserUpdate};
use crate::hasher::{Hasher, ProductionHasher};
use crate::user_service::UserService;
use crate::user_store::{InMemoryUserStore, UserStore, UserStoreError};
use crate::username_string::UsernameString;


pub struct UserServiceImpl<H: Hasher, S: UserStore> {
    hasher: H,
    store: S,
}

pub type ProductionUserService = UserServiceImpl<ProductionHasher, InMemoryUserStore>;

impl<H: Hasher, S: UserStore> UserServiceImpl<H, S> {
    pub fn new(hasher: H, store: S) -> Self {
        UserServiceImpl {
            hasher,
            store,
        }
    }
}

#[async_trait]
impl<H: Hasher, S: UserStore> UserService for UserServiceImpl<H, S> {
    async fn create(
        &self,
        draft: UserDraft,
    ) -> Result<User, UserStoreError> {
        info!("creating user \"{}\"", draft.name);
        let user = User {
            name: draft.name,
            password_hash: self.hasher.generate_hash(&draft.password),
            role: draft.role,
            active: draft.active,
        };
        let saved = self.store.save(user).await?;
        info!("created user \"{}\"", saved.name);
        Ok(saved)
    }

    async fn get_by_name(
        &self,
        name: &UsernameString,
    ) -> Result<Option<User>, UserStoreError> {
        debug!("fetching user \"{name}\"");
        let user = self.store.get(name).await?;
        if user.is_none() {
            warn!("user \"{name}\" not found");
        }
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        debug!("fetching all users");
        let users = self.store.list().await?;
        debug!("retrieved {} users", users.len());
        Ok(users)
    }

    async fn update(
        &self,
        name: &UsernameString,
        update: UserUpdate,
    ) -> Result<User, UserStoreError> {
        info!("updating user \"{name}\"");
        let user = User {
            name: name.clone(),
            password_hash: self.hasher.generate_hash(&update.password),
            role: update.role,
            active: update.active,
        };
        self.store.save(user).await
    }

    async fn delete(
        &self,
        name: &UsernameString,
    ) -> Result<bool, UserStoreError> {
        info!("deleting user \"{name}\"");
        let removed = self.store.delete(name).await?;
        if !removed {
            warn!("user \"{name}\" not found for deletion");
        }
        Ok(removed)
    }
}
