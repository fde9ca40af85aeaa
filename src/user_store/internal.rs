use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, trace};
use tokio::fs;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::data::User;
use crate::user_store::internal::data::UsersData;
use crate::user_store::{UserStore, UserStoreError};
use crate::username_string::UsernameString;

mod data;

#[derive(Clone, Default, Debug)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        InMemoryUserStore::default()
    }

    /// Seeds the store from a TOML user db maintained by the operator.
    pub async fn from_seed_file(
        user_db_filename: impl AsRef<Path> + Send,
    ) -> Result<Self, UserStoreError> {
        let db_str = fs::read_to_string(user_db_filename).await?;
        Self::from_seed_str(&db_str)
    }

    pub fn from_seed_str(db_str: &str) -> Result<Self, UserStoreError> {
        let parsed = toml::from_str::<UsersData>(db_str)?;
        debug!("seeding user store with {} users", parsed.users.len());
        Ok(
            InMemoryUserStore {
                users: Arc::new(Mutex::new(HashMap::from_iter(
                    parsed.users
                        .into_iter()
                        .map(|u| (u.username.to_string(), u.into()))
                ))),
            }
        )
    }

    pub async fn from_app_config(
        app_config: &AppConfig,
    ) -> Result<Self, UserStoreError> {
        match &app_config.user_db {
            Some(path) => Self::from_seed_file(path).await,
            None => Ok(Self::new()),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(
        &self,
        name: &UsernameString,
    ) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.lock().await.get::<str>(name).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.lock().await.values().cloned().collect())
    }

    async fn save(
        &self,
        user: User,
    ) -> Result<User, UserStoreError> {
        trace!("saving user \"{}\"", user.name);
        self.users.lock().await
            .insert(user.name.to_string(), user.clone());
        Ok(user)
    }

    async fn delete(
        &self,
        name: &UsernameString,
    ) -> Result<bool, UserStoreError> {
        trace!("deleting user \"{name}\"");
        Ok(self.users.lock().await.remove::<str>(name).is_some())
    }
}
