use std::io::Error as IoError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid user db contents: {0}")]
    Parsing(#[from] toml::de::Error),
}
