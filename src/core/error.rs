//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`WorkbenchError`] which covers every failure that can
//! escape the library: repository access, panel state persistence, thread store
//! loading and CLI argument validation. It uses `thiserror` for ergonomic error
//! definitions and includes constructors for the path-carrying variants.
//!
//! # Public API
//! - [`WorkbenchError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, WorkbenchError>`
//!
//! # Error Categories
//! - **Git operations**: Repository not found, git2 library errors
//! - **Panel state**: Directory, read, parse and write failures
//! - **Thread store**: Missing or malformed thread files
//! - **Selection**: Invalid sections and out-of-range result numbers
//!
//! The search controller never returns errors; it records failures in its
//! session. [`WorkbenchError::SearchFailed`] only reports such a session to
//! the command line.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for workbench-navigator
#[derive(Error, Debug)]
pub enum WorkbenchError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Panel state errors
    #[error("Could not find state directory")]
    StateDirectoryNotFound,

    #[error("Failed to create state directory '{path}': {source}")]
    StateDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read state file '{path}': {source}")]
    StateReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    StateParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write state file '{path}': {source}")]
    StateWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Thread store errors
    #[error("Thread file does not exist at '{path}'")]
    ThreadFileNotFound { path: PathBuf },

    #[error("Failed to parse thread file '{path}': {source}")]
    ThreadFileParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Selection errors
    #[error("Invalid section: '{input}'. Use 'changes' or 'staged'")]
    InvalidSection { input: String },

    #[error("Result {index} is out of range (1-{max} available)")]
    ResultOutOfRange { index: usize, max: usize },

    #[error("No results to select")]
    NoResults,

    #[error("Search failed: {message}")]
    SearchFailed { message: String },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using WorkbenchError
pub type Result<T> = std::result::Result<T, WorkbenchError>;

impl WorkbenchError {
    /// Create an invalid section error
    pub fn invalid_section(input: impl Into<String>) -> Self {
        Self::InvalidSection {
            input: input.into(),
        }
    }

    /// Create a result out of range error
    pub fn result_out_of_range(index: usize, max: usize) -> Self {
        Self::ResultOutOfRange { index, max }
    }

    /// Create a state directory creation failed error
    pub fn state_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StateDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn state_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn state_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StateParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn state_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn search_failed(message: impl Into<String>) -> Self {
        Self::SearchFailed {
            message: message.into(),
        }
    }

    /// Create a thread file not found error
    pub fn thread_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThreadFileNotFound { path: path.into() }
    }

    /// Create a thread file parse error
    pub fn thread_file_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ThreadFileParseFailed {
            path: path.into(),
            source,
        }
    }
}
