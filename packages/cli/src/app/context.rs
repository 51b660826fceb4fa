use crate::cli::root::Cli;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    /// Explicit history database; skips the candidate search.
    pub db_path: Option<PathBuf>,
    /// Home directory to search under. Resolved from the OS when `None`.
    pub home_dir: Option<PathBuf>,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            db_path: cli.db.clone(),
            home_dir: None,
        }
    }
}
