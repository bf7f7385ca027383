//! # taskbook
//!
//! A file-backed personal task manager with a lightweight account system
//! and a terminal user interface.
//!
//! ## Key Features
//!
//! - **Accounts**: register and log in with a username/password; each
//!   account owns its own task list.
//! - **Task CRUD**: create, view, update, and delete tasks with a title,
//!   description, due date, and status.
//! - **Local File Storage**: one shared `users.json` mapping plus one
//!   `<username>_tasks.json` file per account, all plain JSON.
//! - **Screen Navigation**: a fixed set of screens (Welcome, Login, Sign Up,
//!   Menu, and the four task screens) driven by a transition table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the UI against the default store (~/.taskbook)
//! taskbook
//!
//! # Or keep the store somewhere else
//! taskbook --data-dir /tmp/taskbook-demo
//! ```
//!
//! Data is stored locally in `~/.taskbook/`. Passwords are plaintext; this
//! is a personal, single-user tool, not a security boundary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod error;
pub mod nav;
pub mod session;
pub mod store;
pub mod task;
pub mod tasks;
pub mod users;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod form;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".taskbook")
        }
    };
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    tui::run::run_tui(&data_dir)
        .with_context(|| format!("task store at {}", data_dir.display()))?;
    Ok(())
}
