//! Git repository and environment setup utilities
//!
//! Provides temporary repositories and an isolated config/cache home so that
//! CLI tests never touch the real user directories.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use workbench_navigator::core::error::Result;

/// Temporary repository; the TempDir must be kept alive for the whole test.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Isolated XDG config and cache directories for one test
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        Ok(Self {
            home: TempDir::new()?,
        })
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join("config")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.home.path().join("cache")
    }

    /// `workbench-navigator` command running in `current_dir` with this environment
    pub fn command(&self, current_dir: &Path) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("workbench-navigator")?;
        cmd.current_dir(current_dir)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env("XDG_CACHE_HOME", self.cache_dir())
            .env("NO_COLOR", "1");
        Ok(cmd)
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Sets up a fresh git repository with user config to avoid prompts
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a repository with one committed file per path in `committed`
pub fn setup_test_repo_with_commit(committed: &[&str]) -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    for path in committed {
        create_file(&repo.path, path, "initial content\n")?;
    }
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;
    Ok(repo)
}

/// Creates a file (and its parent directories) in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}
