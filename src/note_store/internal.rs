use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::stream::{self, StreamExt, TryStreamExt};
use log::trace;
use tokio::sync::Mutex;

use crate::data::{Note, NoteDraft, NoteId};
use crate::lib_constants::BULK_INSERT_CONCURRENCY;
use crate::note_store::{NoteStore, NoteStoreError};


/// The in-process store: a single mutex over the full map, scan order is
/// ascending id.
#[derive(Clone, Default)]
pub struct InMemoryNoteStore {
    state: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    last_id: NoteId,
    notes: BTreeMap<NoteId, Note>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        InMemoryNoteStore::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn get(
        &self,
        id: NoteId,
    ) -> Result<Option<Note>, NoteStoreError> {
        Ok(self.state.lock().await.notes.get(&id).cloned())
    }

    fn scan(&self) -> BoxStream<'_, Result<Note, NoteStoreError>> {
        Box::pin(async_stream::try_stream! {
            // snapshot taken on first poll, each call restarts from it
            let notes: Vec<Note> = self.state.lock().await
                .notes
                .values()
                .cloned()
                .collect();
            trace!("scanning {} notes", notes.len());
            for note in notes {
                yield note;
            }
        })
    }

    async fn insert(
        &self,
        draft: NoteDraft,
    ) -> Result<Note, NoteStoreError> {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let note = Note {
            id: state.last_id,
            title: draft.title,
            content: draft.content,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
            owner_name: draft.owner_name,
            owner_email: draft.owner_email,
        };
        trace!("inserting note {}", note.id);
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn insert_all(
        &self,
        drafts: Vec<NoteDraft>,
    ) -> Result<Vec<Note>, NoteStoreError> {
        stream::iter(drafts)
            .map(|draft| self.insert(draft))
            .buffered(BULK_INSERT_CONCURRENCY)
            .try_collect()
            .await
    }

    async fn save(
        &self,
        note: Note,
    ) -> Result<Note, NoteStoreError> {
        let mut state = self.state.lock().await;
        // keep id assignment ahead of externally chosen keys
        state.last_id = state.last_id.max(note.id);
        trace!("saving note {}", note.id);
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn delete(
        &self,
        id: NoteId,
    ) -> Result<bool, NoteStoreError> {
        trace!("deleting note {id}");
        Ok(self.state.lock().await.notes.remove(&id).is_some())
    }
}
