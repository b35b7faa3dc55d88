//! Record Store selection
//!
//! One logical CRUD contract, two backends. The backend is picked at
//! composition time: the hosted store when the bridge advertises it,
//! otherwise the browser's local storage. Views talk only to this enum.

use crate::bridge::{self, Subscription};
use crate::cloud::CloudStore;
use crate::error::StoreError;
use crate::models::{NewNote, NewTask, Note, NotePatch, Task, TaskPatch};
use crate::storage::LocalStore;

#[derive(Debug, Clone)]
pub enum RecordStore {
    Local(LocalStore),
    Cloud(CloudStore),
}

impl RecordStore {
    /// Pick the backend for the given owner
    pub fn select(user_id: Option<&str>) -> Self {
        match user_id {
            Some(uid) if bridge::store_enabled() => RecordStore::Cloud(CloudStore::new(uid.to_string())),
            _ => RecordStore::Local(LocalStore),
        }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        match self {
            RecordStore::Local(store) => store.list_tasks(),
            RecordStore::Cloud(store) => store.list_tasks().await,
        }
    }

    pub async fn create_task(&self, new: NewTask) -> Result<Task, StoreError> {
        match self {
            RecordStore::Local(store) => store.create_task(new),
            RecordStore::Cloud(store) => store.create_task(new).await,
        }
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        match self {
            RecordStore::Local(store) => store.update_task(id, patch),
            RecordStore::Cloud(store) => store.update_task(id, patch).await,
        }
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), StoreError> {
        match self {
            RecordStore::Local(store) => store.delete_task(id),
            RecordStore::Cloud(store) => store.delete_task(id).await,
        }
    }

    /// Push channel, remote backend only; the local backend has none and
    /// callers fall back to re-reading after each mutation
    pub fn subscribe_tasks<F>(&self, on_change: F) -> Option<Subscription>
    where
        F: FnMut(Vec<Task>) + 'static,
    {
        match self {
            RecordStore::Local(_) => None,
            RecordStore::Cloud(store) => match store.subscribe_tasks(on_change) {
                Ok(subscription) => Some(subscription),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[STORE] task subscription failed: {}", err).into(),
                    );
                    None
                }
            },
        }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        match self {
            RecordStore::Local(store) => store.list_notes(),
            RecordStore::Cloud(store) => store.list_notes().await,
        }
    }

    pub async fn create_note(&self, new: NewNote) -> Result<Note, StoreError> {
        match self {
            RecordStore::Local(store) => store.create_note(new),
            RecordStore::Cloud(store) => store.create_note(new).await,
        }
    }

    pub async fn update_note(&self, id: &str, patch: &NotePatch) -> Result<(), StoreError> {
        match self {
            RecordStore::Local(store) => store.update_note(id, patch),
            RecordStore::Cloud(store) => store.update_note(id, patch).await,
        }
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), StoreError> {
        match self {
            RecordStore::Local(store) => store.delete_note(id),
            RecordStore::Cloud(store) => store.delete_note(id).await,
        }
    }

    pub fn subscribe_notes<F>(&self, on_change: F) -> Option<Subscription>
    where
        F: FnMut(Vec<Note>) + 'static,
    {
        match self {
            RecordStore::Local(_) => None,
            RecordStore::Cloud(store) => match store.subscribe_notes(on_change) {
                Ok(subscription) => Some(subscription),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[STORE] note subscription failed: {}", err).into(),
                    );
                    None
                }
            },
        }
    }
}
