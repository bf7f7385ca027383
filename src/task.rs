//! Task data structure and display helpers.
//!
//! This module defines the core `Task` struct that represents a single
//! to-do item in one user's list, plus formatting helpers for the UI.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a task.
///
/// The system only ever assigns `Pending` at creation; whatever status a
/// stored task carries round-trips through updates untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[default]
    Pending,
    Done,
}

/// A single to-do item.
///
/// `id` is a stable per-list counter, so UI selections stay valid across
/// intervening list mutations. Legacy files carry only the four wire fields
/// (`title`, `desc`, `due`, `status`); entries that load with id 0 are
/// assigned fresh ids by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub desc: String,
    pub due: String,
    pub status: Status,
    #[serde(default)]
    pub created_at_utc: i64,
    #[serde(default)]
    pub updated_at_utc: i64,
}

/// The editable fields of a task, as entered in the create/update forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub desc: String,
    pub due: String,
}

impl Task {
    /// Build a fresh `Pending` task from a draft.
    pub fn from_draft(id: u64, draft: TaskDraft) -> Self {
        let now = Utc::now().timestamp();
        Task {
            id,
            title: draft.title,
            desc: draft.desc,
            due: draft.due,
            status: Status::Pending,
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    /// Overwrite the editable fields, preserving status and creation time.
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.desc = draft.desc;
        self.due = draft.due;
        self.updated_at_utc = Utc::now().timestamp();
    }

    /// Draft view of the current editable fields, for pre-filling forms.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            desc: self.desc.clone(),
            due: self.due.clone(),
        }
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::Done => "Done",
    }
}

/// Render a free-form due string relative to today ("today", "in 3d",
/// "2d late") when it parses as an ISO date, otherwise return it untouched.
pub fn format_due_relative(due: &str, today: NaiveDate) -> String {
    let due = due.trim();
    if due.is_empty() {
        return "-".into();
    }
    match NaiveDate::parse_from_str(due, "%Y-%m-%d") {
        Err(_) => due.to_string(),
        Ok(d) => {
            let delta: Duration = d - today;
            if delta.num_days() == 0 {
                "today".into()
            } else if delta.num_days() == 1 {
                "tomorrow".into()
            } else if delta.num_days() > 1 {
                format!("in {}d", delta.num_days())
            } else {
                format!("{}d late", -delta.num_days())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn from_draft_forces_pending() {
        let t = Task::from_draft(
            1,
            TaskDraft {
                title: "Buy milk".into(),
                desc: "2%".into(),
                due: "2024-01-01".into(),
            },
        );
        assert_eq!(t.status, Status::Pending);
        assert_eq!(t.id, 1);
    }

    #[test]
    fn apply_draft_preserves_status_and_creation_time() {
        let mut t = Task::from_draft(3, TaskDraft::default());
        t.status = Status::Done;
        let created = t.created_at_utc;
        t.apply_draft(TaskDraft {
            title: "new".into(),
            desc: "d".into(),
            due: "whenever".into(),
        });
        assert_eq!(t.status, Status::Done);
        assert_eq!(t.created_at_utc, created);
        assert_eq!(t.title, "new");
        assert_eq!(t.due, "whenever");
    }

    #[test]
    fn legacy_wire_format_still_loads() {
        let json = r#"{"title":"Buy milk","desc":"2%","due":"2024-01-01","status":"Pending"}"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 0);
        assert_eq!(t.title, "Buy milk");
        assert_eq!(t.status, Status::Pending);
    }

    #[test]
    fn due_rendering_is_relative_for_iso_dates_only() {
        let today = day("2024-06-10");
        assert_eq!(format_due_relative("2024-06-10", today), "today");
        assert_eq!(format_due_relative("2024-06-11", today), "tomorrow");
        assert_eq!(format_due_relative("2024-06-13", today), "in 3d");
        assert_eq!(format_due_relative("2024-06-08", today), "2d late");
        assert_eq!(format_due_relative("next week sometime", today), "next week sometime");
        assert_eq!(format_due_relative("", today), "-");
    }
}
