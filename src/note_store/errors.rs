use thiserror::Error;

use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error(transparent)]
    Io(#[from] IoError),
}
