use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::hasher_config::ProductionHasherConfigData;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigData {
    #[serde(default)]
    pub user_db: Option<PathBuf>,

    #[serde(default)]
    pub hasher_config: ProductionHasherConfigData,
}
