//! Git repository access for the changes panel.
//!
//! This module wraps `git2` to produce the status snapshot the change tree is
//! built from. One [`FileStatusRecord`] is produced per changed path, carrying
//! both its index and worktree status.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle with status and branch helpers

use crate::core::{
    error::{Result, WorkbenchError},
    status_kind::{FileStatusRecord, StatusKind},
};
use git2::{Repository, StatusOptions};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// One record per changed path, sorted by path
    pub fn file_status_records(&self) -> Result<Vec<FileStatusRecord>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut records = Vec::with_capacity(statuses.len());

        for entry in statuses.iter() {
            let path = entry.path().ok_or(WorkbenchError::InvalidUtf8Path)?;
            let flags = entry.status();

            let index_status = StatusKind::from_git2_index(flags);
            let worktree_status = StatusKind::from_git2_worktree(flags);
            if index_status.is_none() && worktree_status.is_none() {
                continue;
            }

            records.push(FileStatusRecord::new(path, index_status, worktree_status));
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("Read {} changed paths from repository", records.len());

        Ok(records)
    }

    pub fn get_repo_path(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if let Some(branch_name) = head.shorthand() {
            Ok(branch_name.to_string())
        } else {
            Ok("HEAD".to_string())
        }
    }
}
