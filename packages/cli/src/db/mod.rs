use crate::app::AppContext;
use crate::error::CliError;
use mole_history::{locate, Connection};
use std::path::{Path, PathBuf};

pub fn resolve_history_path(context: &AppContext) -> Result<PathBuf, CliError> {
    if let Some(path) = &context.db_path {
        return Ok(locate::resolve_override(path)?);
    }

    let home = match &context.home_dir {
        Some(home) => home.clone(),
        None => locate::home_dir()?,
    };
    Ok(locate::find_history(&home)?)
}

/// Copies the history file aside and opens the copy read-only, so a
/// running browser never holds the file being read.
pub fn open_history_snapshot(path: &Path) -> Result<Connection, CliError> {
    let copy = locate::snapshot(path)?;
    Ok(locate::open_snapshot(&copy)?)
}
