pub mod app_config;
pub mod figment;
pub mod hasher_config;

use std::path::Path;

use crate::config::app_config::data::AppConfigData;
use crate::config::figment::FigmentExt;

pub use app_config::AppConfig;
pub use hasher_config::ProductionHasherConfigData;

pub fn load_app_config(
    config_file: impl AsRef<Path>,
) -> Result<AppConfig, ::figment::Error> {
    let data: AppConfigData = ::figment::Figment::new()
        .setup_app_config(config_file)
        .extract()?;
    Ok(data.into())
}
