//! Interactive mode flows.

pub mod create;
pub mod read;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::console::Console;
use crate::error::{FolderForgeError, Result};

/// What the session does with the root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompt for nested folders, then diagram them.
    Create,
    /// Diagram an existing directory.
    Read,
}

impl Mode {
    pub const CHOICES: [&'static str; 2] = ["create", "read"];

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "create" => Some(Mode::Create),
            "read" => Some(Mode::Read),
            _ => None,
        }
    }
}

/// Ask the user which mode to run.
pub fn select_mode<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Mode> {
    loop {
        let choice = console.choose("Select mode", &Mode::CHOICES)?;
        if let Some(mode) = Mode::from_choice(&choice) {
            return Ok(mode);
        }
    }
}

/// Run one session against `root`, prompting for the mode when not given.
pub fn run<R: BufRead, W: Write>(
    mode: Option<Mode>,
    root: &Path,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<()> {
    if !root.is_dir() {
        return Err(FolderForgeError::NotADirectory(root.to_path_buf()));
    }

    let mode = match mode {
        Some(mode) => mode,
        None => select_mode(console)?,
    };

    tracing::info!(?mode, root = %root.display(), "Starting session");

    match mode {
        Mode::Create => create::run(root, config, console),
        Mode::Read => read::run(root, config, console),
    }
}
