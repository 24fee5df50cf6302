//! View-owned state of the changes panel and its per-repository persistence.
//!
//! The tree builder is pure; everything the user toggles lives here. Toggles are
//! plain key flips, the tree is rebuilt from scratch afterwards.
//!
//! # Public API
//! - [`SectionCollapse`]: Whole-section collapse flags
//! - [`ChangePanelState`]: Section flags plus per-directory [`CollapseState`]
//! - [`load_panel_state`] / [`save_panel_state`]: JSON persistence keyed by repository
//!
//! # Storage
//! - One directory per repository: `<cache>/workbench-navigator/<md5(repo path)>/`
//! - A missing `panel.json` reads as the default (everything expanded)

use crate::core::{
    change_tree::{build_tree_rows, records_for_section, CollapseState, Section, TreeRow},
    dirs::get_cache_directory,
    error::{Result, WorkbenchError},
    status_kind::FileStatusRecord,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PANEL_STATE_FILE: &str = "panel.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCollapse {
    pub changes: bool,
    pub staged: bool,
}

impl SectionCollapse {
    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Changes => self.changes,
            Section::Staged => self.staged,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Changes => &mut self.changes,
            Section::Staged => &mut self.staged,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePanelState {
    pub section_collapsed: SectionCollapse,
    pub collapsed_dirs: CollapseState,
}

impl ChangePanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses or expands a whole section, returns the new flag
    pub fn toggle_section(&mut self, section: Section) -> bool {
        let flag = self.section_collapsed.get_mut(section);
        *flag = !*flag;
        *flag
    }

    /// Collapses or expands one directory of a section, returns the new flag
    pub fn toggle_dir(&mut self, section: Section, path: &str) -> bool {
        self.collapsed_dirs.toggle(section, path)
    }

    pub fn is_section_collapsed(&self, section: Section) -> bool {
        self.section_collapsed.get(section)
    }

    /// Rows for one section of a status snapshot, empty when the section is collapsed
    pub fn section_rows(&self, files: &[FileStatusRecord], section: Section) -> Vec<TreeRow> {
        if self.is_section_collapsed(section) {
            return Vec::new();
        }
        let records = records_for_section(files, section);
        build_tree_rows(&records, section, &self.collapsed_dirs)
    }
}

/// Directory holding the panel state of one repository
pub fn get_state_dir(repo_path: &Path) -> Result<PathBuf> {
    let repo_hash = format!("{:x}", md5::compute(repo_path.to_string_lossy().as_bytes()));
    log::debug!("get_state_dir: repo_path = {repo_path:?}, repo_hash = {repo_hash}");
    Ok(get_cache_directory()?.join(repo_hash))
}

/// Loads the panel state for `repo_path`, falling back to the default
pub fn load_panel_state(repo_path: &Path) -> Result<ChangePanelState> {
    load_panel_state_from(&get_state_dir(repo_path)?)
}

pub fn save_panel_state(repo_path: &Path, state: &ChangePanelState) -> Result<()> {
    save_panel_state_to(&get_state_dir(repo_path)?, state)
}

pub fn load_panel_state_from(state_dir: &Path) -> Result<ChangePanelState> {
    let state_file = state_dir.join(PANEL_STATE_FILE);

    if !state_file.exists() {
        log::debug!(
            "No panel state at {}, using defaults",
            state_file.display()
        );
        return Ok(ChangePanelState::default());
    }

    let content = fs::read_to_string(&state_file).map_err(|e| {
        log::error!(
            "Failed to read panel state '{}': {}",
            state_file.display(),
            e
        );
        WorkbenchError::state_read_failed(&state_file, e)
    })?;

    let state: ChangePanelState = serde_json::from_str(&content).map_err(|e| {
        log::error!(
            "Failed to parse panel state '{}': {}",
            state_file.display(),
            e
        );
        WorkbenchError::state_parse_failed(&state_file, e)
    })?;

    log::debug!("Loaded panel state from {}", state_file.display());
    Ok(state)
}

pub fn save_panel_state_to(state_dir: &Path, state: &ChangePanelState) -> Result<()> {
    if let Err(e) = fs::create_dir_all(state_dir) {
        log::error!(
            "Failed to create state directory '{}': {}",
            state_dir.display(),
            e
        );
        return Err(WorkbenchError::state_directory_creation_failed(
            state_dir, e,
        ));
    }

    let state_file = state_dir.join(PANEL_STATE_FILE);
    let json = serde_json::to_string_pretty(state)?;

    if let Err(e) = fs::write(&state_file, json) {
        log::error!(
            "Failed to write panel state '{}': {}",
            state_file.display(),
            e
        );
        return Err(WorkbenchError::state_write_failed(&state_file, e));
    }

    log::debug!("Saved panel state to {}", state_file.display());
    Ok(())
}
