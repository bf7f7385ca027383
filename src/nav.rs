//! Screen set and table-driven navigation.
//!
//! Every screen is a variant of [`Screen`]; the reachable targets per screen
//! live in one transition table, so navigation logic stays decoupled from
//! how each screen is drawn.

use std::fmt;

use crate::error::{Error, Result};

/// The application's screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Login,
    SignUp,
    Menu,
    CreateTask,
    ViewTasks,
    UpdateTask,
    DeleteTask,
}

/// Button-reachable targets per screen.
///
/// Entry into `Menu` is gated by the login success path, not here; the table
/// only says which buttons exist.
const TRANSITIONS: &[(Screen, &[Screen])] = &[
    (Screen::Welcome, &[Screen::Login, Screen::SignUp]),
    (Screen::Login, &[Screen::Menu, Screen::SignUp, Screen::Welcome]),
    (Screen::SignUp, &[Screen::Login, Screen::Welcome]),
    (
        Screen::Menu,
        &[
            Screen::CreateTask,
            Screen::ViewTasks,
            Screen::UpdateTask,
            Screen::DeleteTask,
            Screen::Welcome,
        ],
    ),
    (Screen::CreateTask, &[Screen::Menu]),
    (Screen::ViewTasks, &[Screen::Menu]),
    (Screen::UpdateTask, &[Screen::Menu]),
    (Screen::DeleteTask, &[Screen::Menu]),
];

impl Screen {
    /// Targets reachable from this screen.
    pub fn transitions(self) -> &'static [Screen] {
        TRANSITIONS
            .iter()
            .find(|(s, _)| *s == self)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }

    /// Screens that re-read the task store when they become active.
    pub fn refreshes(self) -> bool {
        matches!(
            self,
            Screen::ViewTasks | Screen::UpdateTask | Screen::DeleteTask
        )
    }

    /// Header title for the screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Log In",
            Screen::SignUp => "Sign Up",
            Screen::Menu => "Menu",
            Screen::CreateTask => "Create Task",
            Screen::ViewTasks => "Your Tasks",
            Screen::UpdateTask => "Update Task",
            Screen::DeleteTask => "Delete Task",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Tracks the active screen and validates requested transitions.
#[derive(Debug)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// A navigator starting on the Welcome screen.
    pub fn new() -> Self {
        Navigator {
            current: Screen::Welcome,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `to` if the transition table allows it. Returns whether the
    /// target wants a task-list refresh.
    pub fn activate(&mut self, to: Screen) -> Result<bool> {
        if !self.current.transitions().contains(&to) {
            return Err(Error::Navigation {
                from: self.current,
                to,
            });
        }
        self.current = to;
        Ok(to.refreshes())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
