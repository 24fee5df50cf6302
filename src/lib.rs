//! Workbench Navigator - navigation core for a coding assistant workbench.
//!
//! This library provides the two pieces of client-side logic behind the
//! workbench's git panel and message search:
//!
//! - **Change tree**: a pure builder turning a flat git status snapshot into an
//!   ordered, collapsible directory tree ([`core::change_tree`])
//! - **Message search**: a debounced search controller that discards stale
//!   responses and supports keyboard navigation over results ([`search`])
//!
//! # Public API
//! The main public interface is re-exported from [`core`] and [`search`]:
//! - Status records and the tree builder
//! - Panel collapse state and its persistence
//! - Git repository access
//! - The search controller, its session and capability traits
//! - Error handling and result types

pub mod commands;
pub mod core;
pub mod search;

// Re-export the core public API for external users
pub use self::core::{
    build_tree_rows,
    // Change tree
    records_for_section,
    status_label,
    ChangePanelState,
    CollapseState,
    FileStatusRecord,
    // Git operations
    GitRepo,
    Result,
    Section,
    SectionCollapse,
    StatusKind,
    TreeRow,
    // Configuration
    WorkbenchConfig,
    // Error handling
    WorkbenchError,
};

pub use self::search::{
    ChatBinder, Direction, LocalThreadStore, SearchBackend, SearchController, SearchOptions,
    SearchPhase, SearchResult, SearchSession, Thread, ThreadDirectory,
};
