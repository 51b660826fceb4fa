use std::path::PathBuf;

/// Failures while locating, snapshotting or reading a history database.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("no candidate locations matched")]
    NotFound { candidates: Vec<PathBuf> },

    #[error("history file does not exist: {}", .path.display())]
    MissingOverride { path: PathBuf },

    #[error("failed to inspect {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {} for snapshot: {source}", .path.display())]
    CopyRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write snapshot {}: {source}", .path.display())]
    CopyWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open sqlite database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("{0} not supported.")]
    UnknownTable(String),

    #[error("failed to open query `{query}`: {source}")]
    QueryOpen {
        query: String,
        source: rusqlite::Error,
    },

    #[error("failed to decode column {column}: {source}")]
    Scan {
        column: usize,
        source: rusqlite::Error,
    },

    #[error("row iteration failed: {0}")]
    Cursor(rusqlite::Error),

    #[error("failed to spawn reader thread: {0}")]
    Spawn(std::io::Error),

    #[error("reader thread panicked")]
    ProducerPanicked,
}
