use std::path::PathBuf;

use crate::config::app_config::data::AppConfigData;
use crate::config::hasher_config::ProductionHasherConfigData;

pub mod data;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub user_db: Option<PathBuf>,
    pub hasher_config: ProductionHasherConfigData,
}

impl From<AppConfigData> for AppConfig {
    fn from(value: AppConfigData) -> Self {
        AppConfig {
            user_db: value.user_db,
            hasher_config: value.hasher_config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfigData::default().into()
    }
}
