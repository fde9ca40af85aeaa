use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::TryStreamExt;
use log::{debug, info, warn};

use crate::data::{Note, NoteDraft, NoteId, NotePatch, NoteUpdate};
use crate::note_service::{NoteService, NoteServiceError};
use crate::note_store::{InMemoryNoteStore, NoteStore};


pub struct NoteServiceImpl<S: NoteStore> {
    store: S,
}

pub type ProductionNoteService = NoteServiceImpl<InMemoryNoteStore>;

impl<S: NoteStore> NoteServiceImpl<S> {
    pub fn new(store: S) -> Self {
        NoteServiceImpl {
            store,
        }
    }

    async fn get_existing(
        &self,
        id: NoteId,
        operation: &str,
    ) -> Result<Note, NoteServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| {
                warn!("note {id} not found for {operation}");
                NoteServiceError::NotFound(id)
            })
    }
}

#[async_trait]
impl<S: NoteStore> NoteService for NoteServiceImpl<S> {
    fn list_all(&self) -> BoxStream<'_, Result<Note, NoteServiceError>> {
        debug!("fetching all notes");
        Box::pin(self.store.scan().map_err(NoteServiceError::from))
    }

    async fn get(
        &self,
        id: NoteId,
    ) -> Result<Note, NoteServiceError> {
        debug!("fetching note {id}");
        self.get_existing(id, "fetch").await
    }

    async fn create(
        &self,
        draft: NoteDraft,
    ) -> Result<Note, NoteServiceError> {
        debug!("creating note \"{}\"", draft.title);
        let note = self.store.insert(draft).await?;
        info!("created note {}", note.id);
        Ok(note)
    }

    async fn create_bulk(
        &self,
        drafts: Vec<NoteDraft>,
    ) -> Result<Vec<Note>, NoteServiceError> {
        debug!("creating {} notes in bulk", drafts.len());
        let notes = self.store.insert_all(drafts).await?;
        info!("bulk created {} notes", notes.len());
        Ok(notes)
    }

    async fn update(
        &self,
        id: NoteId,
        update: NoteUpdate,
    ) -> Result<Note, NoteServiceError> {
        debug!("updating note {id}");
        let mut existing = self.get_existing(id, "update").await?;
        existing.title = update.title;
        existing.content = update.content;
        existing.updated_at = update.updated_at;
        let updated = self.store.save(existing).await?;
        info!("updated note {id}");
        Ok(updated)
    }

    async fn patch(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> Result<Note, NoteServiceError> {
        debug!("patching note {id}");
        let mut existing = self.get_existing(id, "patch").await?;
        if let Some(title) = patch.title {
            existing.title = title;
        }
        if let Some(content) = patch.content {
            existing.content = Some(content);
        }
        if let Some(updated_at) = patch.updated_at {
            existing.updated_at = Some(updated_at);
        }
        if let Some(owner_name) = patch.owner_name {
            existing.owner_name = Some(owner_name);
        }
        if let Some(owner_email) = patch.owner_email {
            existing.owner_email = Some(owner_email);
        }
        let patched = self.store.save(existing).await?;
        info!("patched note {id}");
        Ok(patched)
    }

    async fn delete(
        &self,
        id: NoteId,
    ) -> Result<(), NoteServiceError> {
        debug!("deleting note {id}");
        self.store.delete(id).await?;
        info!("deleted note {id}");
        Ok(())
    }
}
