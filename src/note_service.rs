mod errors;
mod internal;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::data::{Note, NoteDraft, NoteId, NotePatch, NoteUpdate};

pub use errors::NoteServiceError;
pub use internal::{NoteServiceImpl, ProductionNoteService};

/// Note record operations.
///
/// Mutations follow lookup-then-save without isolation: concurrent
/// writers to the same id may lose an update. Callers needing stronger
/// guarantees must serialize per key themselves.
#[async_trait]
pub trait NoteService: Send + Sync {
    /// Lazy, finite, restartable; an empty store yields an empty stream.
    fn list_all(&self) -> BoxStream<'_, Result<Note, NoteServiceError>>;

    async fn get(
        &self,
        id: NoteId,
    ) -> Result<Note, NoteServiceError>;

    async fn create(
        &self,
        draft: NoteDraft,
    ) -> Result<Note, NoteServiceError>;

    /// Persists every draft and returns the records in input order; any
    /// individual failure fails the whole call.
    async fn create_bulk(
        &self,
        drafts: Vec<NoteDraft>,
    ) -> Result<Vec<Note>, NoteServiceError>;

    /// Replaces title, content and updated_at of an existing record;
    /// other fields are left untouched.
    async fn update(
        &self,
        id: NoteId,
        update: NoteUpdate,
    ) -> Result<Note, NoteServiceError>;

    /// Overwrites only the fields present in `patch`.
    async fn patch(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> Result<Note, NoteServiceError>;

    /// Idempotent; deleting an absent id is not an error.
    async fn delete(
        &self,
        id: NoteId,
    ) -> Result<(), NoteServiceError>;
}
