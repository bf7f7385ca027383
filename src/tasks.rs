//! Per-user task list persistence.
//!
//! Each user owns one `<username>_tasks.json` array. Every mutation is a
//! load-mutate-save over the whole file. A missing file is an empty list,
//! not an error.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store::{read_json, write_json};
use crate::task::{Task, TaskDraft};

/// Stateless handle over the directory holding per-user task files.
#[derive(Debug, Clone)]
pub struct TaskStore {
    dir: PathBuf,
}

impl TaskStore {
    pub fn new(dir: &Path) -> Self {
        TaskStore {
            dir: dir.to_path_buf(),
        }
    }

    fn file_for(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{username}_tasks.json"))
    }

    /// Load one user's list, empty if no file exists yet.
    ///
    /// Entries from legacy files load with id 0 and are assigned fresh ids
    /// here, so every task handed to the UI is individually addressable.
    pub fn load(&self, username: &str) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = read_json(&self.file_for(username))?.unwrap_or_default();
        let mut next = next_id(&tasks);
        for t in tasks.iter_mut() {
            if t.id == 0 {
                t.id = next;
                next += 1;
            }
        }
        Ok(tasks)
    }

    /// Overwrite the user's file with the full list.
    pub fn save(&self, username: &str, tasks: &[Task]) -> Result<()> {
        write_json(&self.file_for(username), &tasks)
    }

    /// Append a new `Pending` task with a fresh id; returns the stored task.
    pub fn append(&self, username: &str, draft: TaskDraft) -> Result<Task> {
        let mut tasks = self.load(username)?;
        let task = Task::from_draft(next_id(&tasks), draft);
        tasks.push(task.clone());
        self.save(username, &tasks)?;
        Ok(task)
    }

    /// Overwrite the editable fields of the task with the given id, keeping
    /// its status and creation time.
    pub fn update(&self, username: &str, id: u64, draft: TaskDraft) -> Result<Task> {
        let mut tasks = self.load(username)?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::UnknownTask(id))?;
        task.apply_draft(draft);
        let updated = task.clone();
        self.save(username, &tasks)?;
        Ok(updated)
    }

    /// Remove the task with the given id, keeping the order of the rest.
    pub fn remove(&self, username: &str, id: u64) -> Result<Task> {
        let mut tasks = self.load(username)?;
        let idx = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::UnknownTask(id))?;
        let removed = tasks.remove(idx);
        self.save(username, &tasks)?;
        Ok(removed)
    }
}

/// Next available id: one past the highest id currently in the list.
fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;
    use tempfile::tempdir;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.into(),
            desc: format!("{title} description"),
            due: "2024-01-01".into(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        assert!(store.load("nobody").unwrap().is_empty());
    }

    #[test]
    fn append_forces_pending_and_lands_last() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        store.append("bob", draft("first")).unwrap();
        let appended = store
            .append(
                "bob",
                TaskDraft {
                    title: "Buy milk".into(),
                    desc: "2%".into(),
                    due: "2024-01-01".into(),
                },
            )
            .unwrap();

        let tasks = store.load("bob").unwrap();
        assert_eq!(tasks.len(), 2);
        let last = tasks.last().unwrap();
        assert_eq!(last, &appended);
        assert_eq!(last.title, "Buy milk");
        assert_eq!(last.status, Status::Pending);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        let a = store.append("u", draft("a")).unwrap();
        let b = store.append("u", draft("b")).unwrap();
        let c = store.append("u", draft("c")).unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn update_changes_only_the_addressed_task() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        let a = store.append("u", draft("a")).unwrap();
        let b = store.append("u", draft("b")).unwrap();

        store
            .update(
                "u",
                b.id,
                TaskDraft {
                    title: "b2".into(),
                    desc: "changed".into(),
                    due: "tomorrow-ish".into(),
                },
            )
            .unwrap();

        let tasks = store.load("u").unwrap();
        assert_eq!(tasks[0].title, a.title);
        assert_eq!(tasks[1].title, "b2");
        assert_eq!(tasks[1].due, "tomorrow-ish");
        assert_eq!(tasks[1].id, b.id);
    }

    #[test]
    fn update_preserves_status() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        let a = store.append("u", draft("a")).unwrap();

        let mut tasks = store.load("u").unwrap();
        tasks[0].status = Status::Done;
        store.save("u", &tasks).unwrap();

        let updated = store.update("u", a.id, draft("renamed")).unwrap();
        assert_eq!(updated.status, Status::Done);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        let _a = store.append("carol", draft("A")).unwrap();
        let b = store.append("carol", draft("B")).unwrap();
        let _c = store.append("carol", draft("C")).unwrap();

        let removed = store.remove("carol", b.id).unwrap();
        assert_eq!(removed.title, "B");

        let tasks = store.load("carol").unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn stale_ids_fail_instead_of_hitting_the_wrong_row() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        let a = store.append("u", draft("a")).unwrap();
        store.remove("u", a.id).unwrap();

        assert!(matches!(
            store.remove("u", a.id),
            Err(Error::UnknownTask(id)) if id == a.id
        ));
        assert!(matches!(
            store.update("u", a.id, draft("x")),
            Err(Error::UnknownTask(_))
        ));
    }

    #[test]
    fn save_of_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        store.append("u", draft("a")).unwrap();
        store.append("u", draft("b")).unwrap();

        let tasks = store.load("u").unwrap();
        store.save("u", &tasks).unwrap();
        assert_eq!(store.load("u").unwrap(), tasks);
    }

    #[test]
    fn lists_are_scoped_per_user() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path());
        store.append("bob", draft("bob's")).unwrap();
        store.append("carol", draft("carol's")).unwrap();

        assert_eq!(store.load("bob").unwrap().len(), 1);
        assert_eq!(store.load("carol").unwrap().len(), 1);
        assert_eq!(store.load("bob").unwrap()[0].title, "bob's");
    }

    #[test]
    fn legacy_four_field_files_load_and_get_ids() {
        let dir = tempdir().unwrap();
        let raw = r#"[
            {"title":"A","desc":"a","due":"2024-01-01","status":"Pending"},
            {"title":"B","desc":"b","due":"","status":"Done"}
        ]"#;
        std::fs::write(dir.path().join("old_tasks.json"), raw).unwrap();

        let store = TaskStore::new(dir.path());
        let tasks = store.load("old").unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].id != 0 && tasks[1].id != 0);
        assert_ne!(tasks[0].id, tasks[1].id);
        assert_eq!(tasks[1].status, Status::Done);
    }

    #[test]
    fn corrupt_task_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("u_tasks.json"), "not json").unwrap();
        let store = TaskStore::new(dir.path());
        assert!(matches!(store.load("u"), Err(Error::Parse { .. })));
    }
}
