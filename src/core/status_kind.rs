//! Type-safe change classification for files in a status snapshot.
//!
//! [`StatusKind`] is the closed set of change kinds the change tree understands.
//! A [`FileStatusRecord`] carries one optional kind for the index (staged side)
//! and one for the worktree (unstaged side).
//!
//! # Public API
//! - [`StatusKind`]: Enumeration of change kinds with git2 conversions
//! - [`FileStatusRecord`]: One changed path with its index and worktree status
//! - [`status_label`]: Single-letter label for a raw status string
//!
//! # Labels
//! - `added` and `untracked` → `A`
//! - `deleted` → `D`, `modified` → `M`, `renamed` → `R`, `conflicted` → `C`
//! - anything else → first character uppercased, missing → `?`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Untracked,
    Conflicted,
}

impl StatusKind {
    /// Status of the index side of a git2 status entry
    pub fn from_git2_index(flags: git2::Status) -> Option<StatusKind> {
        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(StatusKind::Added);
        }
        if flags.contains(git2::Status::INDEX_MODIFIED)
            || flags.contains(git2::Status::INDEX_TYPECHANGE)
        {
            return Some(StatusKind::Modified);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(StatusKind::Deleted);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(StatusKind::Renamed);
        }

        None
    }

    /// Status of the worktree side of a git2 status entry
    pub fn from_git2_worktree(flags: git2::Status) -> Option<StatusKind> {
        // Conflicts win over everything else on the worktree side
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(StatusKind::Conflicted);
        }

        if flags.contains(git2::Status::WT_NEW) {
            return Some(StatusKind::Untracked);
        }
        if flags.contains(git2::Status::WT_MODIFIED) || flags.contains(git2::Status::WT_TYPECHANGE)
        {
            return Some(StatusKind::Modified);
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return Some(StatusKind::Deleted);
        }
        if flags.contains(git2::Status::WT_RENAMED) {
            return Some(StatusKind::Renamed);
        }

        None
    }

    /// Wire name, as produced by the status backend
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Added => "added",
            StatusKind::Modified => "modified",
            StatusKind::Deleted => "deleted",
            StatusKind::Renamed => "renamed",
            StatusKind::Untracked => "untracked",
            StatusKind::Conflicted => "conflicted",
        }
    }

    /// Single-letter label used in tree rows
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Added | StatusKind::Untracked => "A",
            StatusKind::Deleted => "D",
            StatusKind::Modified => "M",
            StatusKind::Renamed => "R",
            StatusKind::Conflicted => "C",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(StatusKind::Added),
            "modified" => Ok(StatusKind::Modified),
            "deleted" => Ok(StatusKind::Deleted),
            "renamed" => Ok(StatusKind::Renamed),
            "untracked" => Ok(StatusKind::Untracked),
            "conflicted" => Ok(StatusKind::Conflicted),
            other => Err(other.to_string()),
        }
    }
}

/// Label for a raw status string as received from a status backend.
///
/// Known kinds map through [`StatusKind::label`]; unknown strings fall back to
/// their first character uppercased and a missing or empty status yields `?`.
pub fn status_label(status: Option<&str>) -> String {
    let Some(status) = status.filter(|s| !s.is_empty()) else {
        return "?".to_string();
    };

    match status.parse::<StatusKind>() {
        Ok(kind) => kind.label().to_string(),
        Err(_) => status
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string()),
    }
}

/// One changed path in a status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatusRecord {
    pub path: String,
    pub index_status: Option<StatusKind>,
    pub worktree_status: Option<StatusKind>,
}

impl FileStatusRecord {
    pub fn new(
        path: impl Into<String>,
        index_status: Option<StatusKind>,
        worktree_status: Option<StatusKind>,
    ) -> Self {
        Self {
            path: path.into(),
            index_status,
            worktree_status,
        }
    }

    /// Record with only worktree (unstaged) changes
    pub fn unstaged(path: impl Into<String>, status: StatusKind) -> Self {
        Self::new(path, None, Some(status))
    }

    /// Record with only index (staged) changes
    pub fn staged(path: impl Into<String>, status: StatusKind) -> Self {
        Self::new(path, Some(status), None)
    }

    pub fn has_unstaged_changes(&self) -> bool {
        self.worktree_status.is_some()
    }

    pub fn has_staged_changes(&self) -> bool {
        self.index_status.is_some()
    }
}
