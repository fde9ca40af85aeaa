use thiserror::Error;

use crate::data::NoteId;
use crate::note_store::NoteStoreError;

#[derive(Debug, Error)]
pub enum NoteServiceError {
    #[error("note not found with id: {0}")]
    NotFound(NoteId),

    #[error(transparent)]
    Store(#[from] NoteStoreError),
}
