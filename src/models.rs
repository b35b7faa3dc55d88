//! Data Model
//!
//! Task and Note records shared by both store backends, plus the static
//! ambient-track catalog. Wire field names are camelCase to match the
//! hosted collections; instants are epoch milliseconds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed task category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Personal,
    Study,
    Health,
}

impl Category {
    /// Display order used everywhere categories are enumerated
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Study,
        Category::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Study => "study",
            Category::Health => "health",
        }
    }

    /// Capitalized form for chips and cards
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Study => "Study",
            Category::Health => "Health",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "personal" => Category::Personal,
            "study" => Category::Study,
            "health" => Category::Health,
            _ => Category::Work,
        }
    }
}

/// A planner task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Creation instant, epoch milliseconds
    pub timestamp: i64,
    pub category: Category,
    /// Set exactly while `completed` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    /// Owner reference, present on remote records only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Task {
    /// Patch flipping completion state. Sets `completedAt` on the way to
    /// completed and clears it on the way back, keeping the two in lockstep.
    pub fn toggle_patch(&self, now_ms: i64) -> TaskPatch {
        let completed = !self.completed;
        TaskPatch {
            completed: Some(completed),
            completed_at: Some(completed.then_some(now_ms)),
            ..TaskPatch::default()
        }
    }
}

/// Task fields for `create`; the backend assigns the id (and owner)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub category: Category,
    pub timestamp: i64,
}

impl NewTask {
    /// Materialize a local record with a fresh id
    pub fn into_task(self) -> Task {
        Task {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            completed: false,
            timestamp: self.timestamp,
            category: self.category,
            completed_at: None,
            user_id: None,
        }
    }
}

/// Partial task update; only present fields change.
/// `completed_at` is doubly optional so an explicit clear serializes as null.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Option<i64>>,
}

impl TaskPatch {
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = completed_at;
        }
    }
}

/// A pad note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    /// Non-empty (trimmed) once persisted
    pub title: String,
    pub content: String,
    /// Updated on every edit, epoch milliseconds
    pub last_modified: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Note fields for `create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub last_modified: i64,
}

impl NewNote {
    pub fn into_note(self) -> Note {
        Note {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            content: self.content,
            last_modified: self.last_modified,
            user_id: None,
        }
    }
}

/// Partial note update
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
}

impl NotePatch {
    pub fn apply(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(last_modified) = self.last_modified {
            note.last_modified = last_modified;
        }
    }
}

/// Ambient audio source; a static catalog entry, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub url: &'static str,
}

/// The fixed focus-music catalog
pub const TRACKS: [Track; 5] = [
    Track {
        id: "1",
        title: "Relaxing Lo-fi",
        category: "Lo-fi",
        url: "https://www.youtube.com/embed/jfKfPfyJRdk?autoplay=1&controls=0&showinfo=0&autohide=1",
    },
    Track {
        id: "2",
        title: "Rain Sounds",
        category: "Nature",
        url: "https://www.youtube.com/embed/mPZkdNFkNps?autoplay=1&controls=0&showinfo=0&autohide=1",
    },
    Track {
        id: "3",
        title: "White Noise",
        category: "Ambient",
        url: "https://www.youtube.com/embed/nMfPqeZjc2c?autoplay=1&controls=0&showinfo=0&autohide=1",
    },
    Track {
        id: "4",
        title: "Ocean Waves",
        category: "Nature",
        url: "https://www.youtube.com/embed/bn9F19Hi1Lk?autoplay=1&controls=0&showinfo=0&autohide=1",
    },
    Track {
        id: "5",
        title: "Forest Birds",
        category: "Nature",
        url: "https://www.youtube.com/embed/2G8LAiHSCAs?autoplay=1&controls=0&showinfo=0&autohide=1",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            completed,
            timestamp: 1_700_000_000_000,
            category: Category::Work,
            completed_at: completed.then_some(1_700_000_100_000),
            user_id: None,
        }
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let original = make_task("a", false);
        let mut task = original.clone();

        original.toggle_patch(42).apply(&mut task);
        assert!(task.completed);
        assert_eq!(task.completed_at, Some(42));

        let back = task.toggle_patch(99);
        back.apply(&mut task);
        assert_eq!(task, original);
    }

    #[test]
    fn patch_changes_only_named_fields() {
        let mut task = make_task("a", false);
        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            ..TaskPatch::default()
        };
        patch.apply(&mut task);
        assert_eq!(task.title, "Renamed");
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn category_wire_names_are_lowercase() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(Category::from_str(category.as_str()), category);
        }
        // Lenient parse falls back to Work
        assert_eq!(Category::from_str("gibberish"), Category::Work);
    }

    #[test]
    fn task_json_round_trip() {
        let task = make_task("buy-milk", true);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"completedAt\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn clearing_completed_at_serializes_as_null() {
        let patch = TaskPatch {
            completed: Some(false),
            completed_at: Some(None),
            ..TaskPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("\"completedAt\":null"));
        assert!(!json.contains("\"title\""));
    }

    #[test]
    fn new_task_starts_pending() {
        let task = NewTask {
            title: "Buy milk".to_string(),
            category: Category::Personal,
            timestamp: 123,
        }
        .into_task();
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert!(!task.id.is_empty());
    }
}
