use std::path::PathBuf;

use clap::Parser;

/// File-backed personal task manager with accounts.
/// Storage defaults to ~/.taskbook or a directory passed via --data-dir.
#[derive(Parser)]
#[command(name = "taskbook", version, about = "Personal task manager TUI")]
pub struct Cli {
    /// Directory holding users.json and the per-user task files.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
