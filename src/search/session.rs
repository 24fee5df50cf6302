//! Observable state of one search surface.
//!
//! [`SearchSession`] is what a view renders. The controller publishes every
//! change through a `tokio::sync::watch` channel; views hold a receiver.

use serde::{Deserialize, Serialize};

/// One hit returned by the search capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub thread_id: String,
    pub message_id: String,
    pub snippet: String,
}

/// Where the session sits in `idle → debouncing → searching → settled | failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
    #[default]
    Idle,
    Debouncing,
    Searching,
    Settled,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_index: usize,
    /// Bumped on every submitted query; responses tagged with an older value are stale
    pub generation: u64,
    pub phase: SearchPhase,
    pub is_open: bool,
}

impl SearchSession {
    /// Fresh session for a surface that was just opened
    pub fn opened(generation: u64) -> Self {
        Self {
            generation,
            is_open: true,
            ..Self::default()
        }
    }

    /// Drops results and in-flight markers, keeps the query text
    pub(crate) fn clear_results(&mut self) {
        self.results.clear();
        self.error = None;
        self.loading = false;
        self.active_index = 0;
        self.phase = SearchPhase::Idle;
    }

    pub(crate) fn move_active(&mut self, direction: Direction) {
        self.active_index = match direction {
            Direction::Down => {
                let last = self.results.len().saturating_sub(1);
                self.active_index.saturating_add(1).min(last)
            }
            Direction::Up => self.active_index.saturating_sub(1),
        };
    }

    pub fn active_result(&self) -> Option<&SearchResult> {
        self.results.get(self.active_index)
    }
}
