//! Cloud Record Store
//!
//! Hosted document-database backend: one collection per record type, every
//! document carrying the owner's `userId`, filtering and recency ordering
//! done server-side. Mutations await the bridge round-trip so a returned
//! call is a durable write; `subscribeTasks` / `subscribeNotes` push the
//! full ordered list on every change.

use serde::Serialize;

use crate::bridge::{self, Subscription};
use crate::error::StoreError;
use crate::models::{NewNote, NewTask, Note, NotePatch, Task, TaskPatch};

// ========================
// Command argument structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OwnerArgs<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskArgs<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    task: &'a NewTask,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskArgs<'a> {
    user_id: &'a str,
    id: &'a str,
    updates: &'a TaskPatch,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddNoteArgs<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    note: &'a NewNote,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateNoteArgs<'a> {
    user_id: &'a str,
    id: &'a str,
    updates: &'a NotePatch,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteArgs<'a> {
    user_id: &'a str,
    id: &'a str,
}

/// Remote backend of the record-store contract, scoped to one owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudStore {
    user_id: String,
}

impl CloudStore {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        bridge::invoke_json("listTasks", &OwnerArgs { user_id: &self.user_id })
            .await
            .map_err(StoreError::Backend)
    }

    pub async fn create_task(&self, new: NewTask) -> Result<Task, StoreError> {
        bridge::invoke_json(
            "addTask",
            &AddTaskArgs {
                user_id: &self.user_id,
                task: &new,
            },
        )
        .await
        .map_err(StoreError::Backend)
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        bridge::invoke_unit(
            "updateTask",
            &UpdateTaskArgs {
                user_id: &self.user_id,
                id,
                updates: patch,
            },
        )
        .await
        .map_err(StoreError::Backend)
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), StoreError> {
        bridge::invoke_unit(
            "deleteTask",
            &DeleteArgs {
                user_id: &self.user_id,
                id,
            },
        )
        .await
        .map_err(StoreError::Backend)
    }

    /// Push channel for the owner's tasks; the handle must be released when
    /// the subscribing view is torn down
    pub fn subscribe_tasks<F>(&self, on_change: F) -> Result<Subscription, StoreError>
    where
        F: FnMut(Vec<Task>) + 'static,
    {
        bridge::subscribe_json("tasks", &OwnerArgs { user_id: &self.user_id }, on_change)
            .map_err(StoreError::Backend)
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        bridge::invoke_json("listNotes", &OwnerArgs { user_id: &self.user_id })
            .await
            .map_err(StoreError::Backend)
    }

    pub async fn create_note(&self, new: NewNote) -> Result<Note, StoreError> {
        bridge::invoke_json(
            "addNote",
            &AddNoteArgs {
                user_id: &self.user_id,
                note: &new,
            },
        )
        .await
        .map_err(StoreError::Backend)
    }

    pub async fn update_note(&self, id: &str, patch: &NotePatch) -> Result<(), StoreError> {
        bridge::invoke_unit(
            "updateNote",
            &UpdateNoteArgs {
                user_id: &self.user_id,
                id,
                updates: patch,
            },
        )
        .await
        .map_err(StoreError::Backend)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), StoreError> {
        bridge::invoke_unit(
            "deleteNote",
            &DeleteArgs {
                user_id: &self.user_id,
                id,
            },
        )
        .await
        .map_err(StoreError::Backend)
    }

    pub fn subscribe_notes<F>(&self, on_change: F) -> Result<Subscription, StoreError>
    where
        F: FnMut(Vec<Note>) + 'static,
    {
        bridge::subscribe_json("notes", &OwnerArgs { user_id: &self.user_id }, on_change)
            .map_err(StoreError::Backend)
    }
}
