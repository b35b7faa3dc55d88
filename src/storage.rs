//! Local Record Store
//!
//! Durable persistence in two `localStorage` slots, each holding the
//! JSON-serialized full record array. Reads happen at view initialization,
//! writes on every mutation; there is no push channel, so views re-read
//! through the context reload trigger after mutating.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

use crate::error::StoreError;
use crate::models::{NewNote, NewTask, Note, NotePatch, Task, TaskPatch};

pub const TASKS_KEY: &str = "tasks";
pub const NOTES_KEY: &str = "notes";

/// Serialize a record array for a storage slot
pub fn encode_records<T: Serialize>(records: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(records).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decode a storage slot; an absent slot is an empty list
pub fn decode_records<T: DeserializeOwned>(raw: Option<&str>) -> Result<Vec<T>, StoreError> {
    match raw {
        Some(json) => serde_json::from_str(json).map_err(|e| StoreError::Decode(e.to_string())),
        None => Ok(Vec::new()),
    }
}

fn patch_task(tasks: &mut [Task], id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
    patch.apply(task);
    Ok(())
}

fn patch_note(notes: &mut [Note], id: &str, patch: &NotePatch) -> Result<(), StoreError> {
    let note = notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
    patch.apply(note);
    Ok(())
}

/// Local-storage backend of the record-store contract
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn slot(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::StorageUnavailable)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let raw = self
            .slot()?
            .get_item(key)
            .map_err(|_| StoreError::StorageUnavailable)?;
        decode_records(raw.as_deref())
    }

    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let json = encode_records(records)?;
        self.slot()?
            .set_item(key, &json)
            .map_err(|_| StoreError::StorageUnavailable)
    }

    /// Tasks, most recently created first
    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut tasks: Vec<Task> = self.load(TASKS_KEY)?;
        tasks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(tasks)
    }

    pub fn create_task(&self, new: NewTask) -> Result<Task, StoreError> {
        let task = new.into_task();
        let mut tasks: Vec<Task> = self.load(TASKS_KEY)?;
        tasks.push(task.clone());
        self.save(TASKS_KEY, &tasks)?;
        Ok(task)
    }

    pub fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        let mut tasks: Vec<Task> = self.load(TASKS_KEY)?;
        patch_task(&mut tasks, id, patch)?;
        self.save(TASKS_KEY, &tasks)
    }

    /// Idempotent; deleting an unknown id is not an error
    pub fn delete_task(&self, id: &str) -> Result<(), StoreError> {
        let mut tasks: Vec<Task> = self.load(TASKS_KEY)?;
        tasks.retain(|t| t.id != id);
        self.save(TASKS_KEY, &tasks)
    }

    /// Notes, most recently modified first
    pub fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes: Vec<Note> = self.load(NOTES_KEY)?;
        notes.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Ok(notes)
    }

    pub fn create_note(&self, new: NewNote) -> Result<Note, StoreError> {
        let note = new.into_note();
        let mut notes: Vec<Note> = self.load(NOTES_KEY)?;
        notes.push(note.clone());
        self.save(NOTES_KEY, &notes)?;
        Ok(note)
    }

    pub fn update_note(&self, id: &str, patch: &NotePatch) -> Result<(), StoreError> {
        let mut notes: Vec<Note> = self.load(NOTES_KEY)?;
        patch_note(&mut notes, id, patch)?;
        self.save(NOTES_KEY, &notes)
    }

    pub fn delete_note(&self, id: &str) -> Result<(), StoreError> {
        let mut notes: Vec<Note> = self.load(NOTES_KEY)?;
        notes.retain(|n| n.id != id);
        self.save(NOTES_KEY, &notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn make_task(id: &str, created: i64) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            completed: false,
            timestamp: created,
            category: Category::Personal,
            completed_at: None,
            user_id: None,
        }
    }

    #[test]
    fn slot_round_trip_preserves_ids_fields_and_order() {
        let tasks = vec![make_task("a", 3), make_task("b", 1), make_task("c", 2)];
        let json = encode_records(&tasks).unwrap();
        let back: Vec<Task> = decode_records(Some(&json)).unwrap();
        assert_eq!(back, tasks);
    }

    #[test]
    fn absent_slot_decodes_to_empty_list() {
        let tasks: Vec<Task> = decode_records(None).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn corrupt_slot_is_a_decode_error() {
        let result: Result<Vec<Task>, _> = decode_records(Some("not json"));
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn patching_unknown_id_fails() {
        let mut tasks = vec![make_task("a", 1)];
        let err = patch_task(&mut tasks, "missing", &TaskPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::UnknownId("missing".to_string()));
    }

    #[test]
    fn task_lifecycle_create_toggle_delete() {
        // The "Buy milk" scenario over the pure slot operations
        let mut tasks: Vec<Task> = Vec::new();
        let task = NewTask {
            title: "Buy milk".to_string(),
            category: Category::Personal,
            timestamp: 1_000,
        }
        .into_task();
        tasks.push(task.clone());
        assert!(!tasks[0].completed);

        let patch = tasks[0].toggle_patch(2_000);
        patch_task(&mut tasks, &task.id, &patch).unwrap();
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].completed_at, Some(2_000));

        tasks.retain(|t| t.id != task.id);
        assert!(tasks.is_empty());
        // Deleting again is a no-op, not an error
        tasks.retain(|t| t.id != task.id);
    }

    #[test]
    fn note_patch_bumps_only_named_fields() {
        let mut notes = vec![Note {
            id: "n1".to_string(),
            title: "Groceries".to_string(),
            content: "milk".to_string(),
            last_modified: 10,
            user_id: None,
        }];
        let patch = NotePatch {
            content: Some("milk, eggs".to_string()),
            last_modified: Some(20),
            ..NotePatch::default()
        };
        patch_note(&mut notes, "n1", &patch).unwrap();
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].content, "milk, eggs");
        assert_eq!(notes[0].last_modified, 20);
    }
}
