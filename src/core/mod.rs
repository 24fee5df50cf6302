//! Core functionality for workbench-navigator.
//!
//! This module provides the change-tree building blocks: status records, the
//! tree builder, panel state and its persistence, git access, configuration
//! and terminal output.

pub mod change_tree;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod output;
pub mod panel_state;
pub mod render;
pub mod status_kind;

// === Error handling ===
pub use error::{Result, WorkbenchError};

// === Status snapshot ===
// Typed change kinds and the per-path record the tree is built from
pub use status_kind::{status_label, FileStatusRecord, StatusKind};

// === Change tree ===
// Pure builder turning a flat status snapshot into indented rows
pub use change_tree::{build_tree_rows, records_for_section, CollapseState, Section, TreeRow};

// === Panel state ===
// View-owned collapse flags and their per-repository persistence
pub use panel_state::{load_panel_state, save_panel_state, ChangePanelState, SectionCollapse};

// === Git operations ===
pub use git::GitRepo;

// === Configuration ===
pub use config::{SearchConfig, WorkbenchConfig};

// === Output ===
pub use output::{print_error, print_info, print_success};
pub use render::{
    render_branch_header, render_search_result, render_section_header, render_tree_row,
    strip_ansi_codes,
};
