//! Directory tree reconstruction for the changes panel.
//!
//! Turns a flat list of [`FileStatusRecord`]s into an ordered sequence of
//! [`TreeRow`]s: directories first, each immediately followed by its subtree,
//! then the files that live directly in the directory. The builder holds no
//! state; the caller passes the [`CollapseState`] on every call.
//!
//! # Public API
//! - [`Section`]: The two panel sections, `changes` and `staged`
//! - [`CollapseState`]: Per-directory collapse flags keyed by `"<section>:<path>"`
//! - [`TreeRow`]: A directory or file row with its depth
//! - [`records_for_section`]: Filters a status snapshot down to one section
//! - [`build_tree_rows`]: Builds the rows for one section
//!
//! # Ordering
//! - Sibling directories are ordered by name (byte-wise, locale independent)
//! - A directory's files follow all of its subdirectories and are ordered by path
//! - Identical inputs always produce identical output

use crate::core::error::WorkbenchError;
use crate::core::status_kind::{FileStatusRecord, StatusKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Worktree changes not yet staged
    Changes,
    /// Changes recorded in the index
    Staged,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Changes, Section::Staged];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Changes => "changes",
            Section::Staged => "staged",
        }
    }

    pub fn is_staged(&self) -> bool {
        matches!(self, Section::Staged)
    }

    /// Status of `file` as seen from this section
    pub fn status_of(&self, file: &FileStatusRecord) -> Option<StatusKind> {
        match self {
            Section::Changes => file.worktree_status,
            Section::Staged => file.index_status,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "changes" => Ok(Section::Changes),
            "staged" => Ok(Section::Staged),
            other => Err(WorkbenchError::invalid_section(other)),
        }
    }
}

/// Collapse flags for directory rows.
///
/// Keys are `"<section>:<path>"`; a key that is absent reads as expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapseState(BTreeMap<String, bool>);

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(section: Section, path: &str) -> String {
        format!("{}:{}", section.as_str(), path)
    }

    pub fn is_collapsed(&self, section: Section, path: &str) -> bool {
        self.0
            .get(&Self::key(section, path))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, section: Section, path: &str, collapsed: bool) {
        self.0.insert(Self::key(section, path), collapsed);
    }

    /// Flips the flag for one directory and returns the new value
    pub fn toggle(&mut self, section: Section, path: &str) -> bool {
        let collapsed = !self.is_collapsed(section, path);
        self.set(section, path, collapsed);
        collapsed
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One row of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeRow {
    Directory {
        path: String,
        name: String,
        depth: usize,
        collapsed: bool,
    },
    File {
        path: String,
        name: String,
        depth: usize,
        file: FileStatusRecord,
        staged: bool,
    },
}

impl TreeRow {
    pub fn path(&self) -> &str {
        match self {
            TreeRow::Directory { path, .. } | TreeRow::File { path, .. } => path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeRow::Directory { name, .. } | TreeRow::File { name, .. } => name,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            TreeRow::Directory { depth, .. } | TreeRow::File { depth, .. } => *depth,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeRow::Directory { .. })
    }

    /// Status shown for a file row in its section; `None` for directories
    pub fn status(&self) -> Option<StatusKind> {
        match self {
            TreeRow::Directory { .. } => None,
            TreeRow::File { file, staged, .. } => {
                if *staged {
                    file.index_status
                } else {
                    file.worktree_status
                }
            }
        }
    }
}

/// Records that belong to `section`: worktree changes for `changes`, index
/// changes for `staged`. A partially staged file belongs to both.
pub fn records_for_section(files: &[FileStatusRecord], section: Section) -> Vec<FileStatusRecord> {
    files
        .iter()
        .filter(|file| match section {
            Section::Changes => file.has_unstaged_changes(),
            Section::Staged => file.has_staged_changes(),
        })
        .cloned()
        .collect()
}

#[derive(Default)]
struct DirNode<'a> {
    path: String,
    dirs: BTreeMap<&'a str, DirNode<'a>>,
    files: Vec<&'a FileStatusRecord>,
}

impl<'a> DirNode<'a> {
    fn insert(&mut self, segments: &[&'a str], file: &'a FileStatusRecord) {
        match segments {
            [] => {}
            [_name] => self.files.push(file),
            [dir, rest @ ..] => {
                let parent_path = &self.path;
                let child = self.dirs.entry(*dir).or_insert_with(|| DirNode {
                    path: if parent_path.is_empty() {
                        (*dir).to_string()
                    } else {
                        format!("{parent_path}/{dir}")
                    },
                    ..DirNode::default()
                });
                child.insert(rest, file);
            }
        }
    }

    fn emit(
        &self,
        depth: usize,
        section: Section,
        collapse_state: &CollapseState,
        rows: &mut Vec<TreeRow>,
    ) {
        for (name, dir) in &self.dirs {
            let collapsed = collapse_state.is_collapsed(section, &dir.path);
            rows.push(TreeRow::Directory {
                path: dir.path.clone(),
                name: (*name).to_string(),
                depth,
                collapsed,
            });
            if !collapsed {
                dir.emit(depth + 1, section, collapse_state, rows);
            }
        }

        let mut files = self.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        for file in files {
            rows.push(TreeRow::File {
                path: file.path.clone(),
                name: file_name(&file.path).to_string(),
                depth,
                file: file.clone(),
                staged: section.is_staged(),
            });
        }
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}

/// Builds the rows for one section of the changes panel.
///
/// `files` is expected to be already filtered for `section` (see
/// [`records_for_section`]). Empty path segments are ignored and records whose
/// path has no segments at all are skipped.
pub fn build_tree_rows(
    files: &[FileStatusRecord],
    section: Section,
    collapse_state: &CollapseState,
) -> Vec<TreeRow> {
    let mut root = DirNode::default();

    for file in files {
        let segments: Vec<&str> = file.path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            log::debug!("Skipping status record with empty path: {:?}", file.path);
            continue;
        }
        root.insert(&segments, file);
    }

    let mut rows = Vec::with_capacity(files.len());
    root.emit(0, section, collapse_state, &mut rows);
    rows
}
