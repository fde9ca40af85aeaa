mod errors;
mod internal;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::data::{Note, NoteDraft, NoteId};

pub use errors::NoteStoreError;
pub use internal::InMemoryNoteStore;

/// Key-addressed note persistence. Keys are assigned by the store on
/// insert and never reused within a store instance.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn get(
        &self,
        id: NoteId,
    ) -> Result<Option<Note>, NoteStoreError>;

    /// Lazy scan over the whole store; every call returns a fresh stream.
    fn scan(&self) -> BoxStream<'_, Result<Note, NoteStoreError>>;

    async fn insert(
        &self,
        draft: NoteDraft,
    ) -> Result<Note, NoteStoreError>;

    /// Persists every draft; results are in input order even when the
    /// individual inserts complete out of order.
    async fn insert_all(
        &self,
        drafts: Vec<NoteDraft>,
    ) -> Result<Vec<Note>, NoteStoreError>;

    async fn save(
        &self,
        note: Note,
    ) -> Result<Note, NoteStoreError>;

    async fn delete(
        &self,
        id: NoteId,
    ) -> Result<bool, NoteStoreError>;
}
