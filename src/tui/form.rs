//! Form state for the auth and task screens.
//!
//! A form is an ordered set of `InputField`s with one focused field; focus
//! moves with Tab/Up/Down and the active flags drive the field highlight.

use crate::task::{Task, TaskDraft};
use crate::tui::input::InputField;

/// Field order for the task create/edit form.
pub const TITLE_FIELD: usize = 0;
pub const DESC_FIELD: usize = 1;
pub const DUE_FIELD: usize = 2;
pub const TASK_FIELD_COUNT: usize = 3;

/// The title/description/due-date form used by CreateTask and UpdateTask.
pub struct TaskForm {
    pub title: InputField,
    pub desc: InputField,
    pub due: InputField,
    pub current_field: usize,
}

impl TaskForm {
    /// An empty form for creating a task.
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            desc: InputField::new(),
            due: InputField::new(),
            current_field: TITLE_FIELD,
        };
        form.update_active_field();
        form
    }

    /// A form pre-filled from an existing task, for editing.
    pub fn from_task(task: &Task) -> Self {
        let draft = task.draft();
        let mut form = Self {
            title: InputField::with_value(&draft.title),
            desc: InputField::with_value(&draft.desc),
            due: InputField::with_value(&draft.due),
            current_field: TITLE_FIELD,
        };
        form.update_active_field();
        form
    }

    /// The entered values, ready for the store.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.value.clone(),
            desc: self.desc.value.clone(),
            due: self.due.value.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % TASK_FIELD_COUNT;
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + TASK_FIELD_COUNT - 1) % TASK_FIELD_COUNT;
        self.update_active_field();
    }

    /// The field currently holding focus.
    pub fn active_mut(&mut self) -> &mut InputField {
        match self.current_field {
            TITLE_FIELD => &mut self.title,
            DESC_FIELD => &mut self.desc,
            _ => &mut self.due,
        }
    }

    fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_FIELD;
        self.desc.active = self.current_field == DESC_FIELD;
        self.due.active = self.current_field == DUE_FIELD;
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The username/password form used by Login and SignUp.
///
/// SignUp carries an extra confirm-password field; Login doesn't.
pub struct AuthForm {
    pub username: InputField,
    pub password: InputField,
    pub confirm: Option<InputField>,
    pub current_field: usize,
}

impl AuthForm {
    /// Two-field form for logging in.
    pub fn login() -> Self {
        let mut form = Self {
            username: InputField::new(),
            password: InputField::masked(),
            confirm: None,
            current_field: 0,
        };
        form.update_active_field();
        form
    }

    /// Three-field form for registration.
    pub fn sign_up() -> Self {
        let mut form = Self {
            username: InputField::new(),
            password: InputField::masked(),
            confirm: Some(InputField::masked()),
            current_field: 0,
        };
        form.update_active_field();
        form
    }

    pub fn field_count(&self) -> usize {
        if self.confirm.is_some() {
            3
        } else {
            2
        }
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        let n = self.field_count();
        self.current_field = (self.current_field + n - 1) % n;
        self.update_active_field();
    }

    /// The field currently holding focus.
    pub fn active_mut(&mut self) -> &mut InputField {
        if self.current_field == 0 {
            return &mut self.username;
        }
        if self.current_field == 2 {
            if let Some(confirm) = self.confirm.as_mut() {
                return confirm;
            }
        }
        &mut self.password
    }

    fn update_active_field(&mut self) {
        self.username.active = self.current_field == 0;
        self.password.active = self.current_field == 1;
        if let Some(confirm) = self.confirm.as_mut() {
            confirm.active = self.current_field == 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;

    #[test]
    fn task_form_focus_wraps_both_ways() {
        let mut form = TaskForm::new();
        assert!(form.title.active);
        form.next_field();
        assert!(form.desc.active && !form.title.active);
        form.next_field();
        form.next_field();
        assert!(form.title.active);
        form.prev_field();
        assert!(form.due.active);
    }

    #[test]
    fn task_form_round_trips_a_task() {
        let task = Task {
            id: 7,
            title: "Buy milk".into(),
            desc: "2%".into(),
            due: "2024-01-01".into(),
            status: Status::Pending,
            created_at_utc: 0,
            updated_at_utc: 0,
        };
        let form = TaskForm::from_task(&task);
        assert_eq!(form.draft(), task.draft());
    }

    #[test]
    fn login_form_has_two_fields_and_sign_up_three() {
        assert_eq!(AuthForm::login().field_count(), 2);
        assert_eq!(AuthForm::sign_up().field_count(), 3);
    }

    #[test]
    fn sign_up_focus_reaches_the_confirm_field() {
        let mut form = AuthForm::sign_up();
        form.next_field();
        form.next_field();
        form.active_mut().handle_char('x');
        assert_eq!(form.confirm.as_ref().unwrap().value, "x");
    }
}
