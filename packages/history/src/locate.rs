use crate::HistoryError;
use rusqlite::{Connection, OpenFlags};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Appended to the source path to name its private copy.
pub const SNAPSHOT_SUFFIX: &str = ".copy";

const CANDIDATES: &[&str] = &[
    ".config/google-chrome/Default/History",
    ".config/chromium/Default/History",
    "Library/Application Support/Google/Chrome/Default/History",
];

pub fn home_dir() -> Result<PathBuf, HistoryError> {
    dirs::home_dir().ok_or(HistoryError::HomeDirUnavailable)
}

pub fn candidate_paths(home: &Path) -> Vec<PathBuf> {
    CANDIDATES.iter().map(|relative| home.join(relative)).collect()
}

pub fn find_history(home: &Path) -> Result<PathBuf, HistoryError> {
    find_history_in(&candidate_paths(home))
}

/// Returns the first candidate that exists and is a regular file.
pub fn find_history_in(candidates: &[PathBuf]) -> Result<PathBuf, HistoryError> {
    for candidate in candidates {
        tracing::debug!(path = %candidate.display(), "checking history candidate");
        if is_regular_file(candidate)? {
            tracing::info!(path = %candidate.display(), "located history file");
            return Ok(candidate.clone());
        }
    }
    Err(HistoryError::NotFound {
        candidates: candidates.to_vec(),
    })
}

/// Validates an explicitly supplied history path.
pub fn resolve_override(path: &Path) -> Result<PathBuf, HistoryError> {
    if !is_regular_file(path)? {
        return Err(HistoryError::MissingOverride {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

fn is_regular_file(path: &Path) -> Result<bool, HistoryError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn snapshot_path(history: &Path) -> PathBuf {
    let mut copy = OsString::from(history.as_os_str());
    copy.push(SNAPSHOT_SUFFIX);
    PathBuf::from(copy)
}

/// Copies `history` byte-for-byte next to itself and returns the copy's path.
///
/// The copy is left on disk.
pub fn snapshot(history: &Path) -> Result<PathBuf, HistoryError> {
    let bytes = fs::read(history).map_err(|source| HistoryError::CopyRead {
        path: history.to_path_buf(),
        source,
    })?;
    let destination = snapshot_path(history);
    fs::write(&destination, &bytes).map_err(|source| HistoryError::CopyWrite {
        path: destination.clone(),
        source,
    })?;
    tracing::debug!(
        path = %destination.display(),
        bytes = bytes.len(),
        "snapshot written"
    );
    Ok(destination)
}

pub fn open_snapshot(path: &Path) -> Result<Connection, HistoryError> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| HistoryError::Open {
        path: path.to_path_buf(),
        source,
    })
}
