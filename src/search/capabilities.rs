//! Capabilities the search controller depends on.
//!
//! They are owned by the host (a backend bridge in the desktop shell, a
//! [`LocalThreadStore`](crate::search::LocalThreadStore) in the CLI) and
//! injected into the controller at construction.

use crate::search::session::SearchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A conversation thread as known to the thread directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub repo_id: String,
    #[serde(default = "default_workspace_id")]
    pub workspace_id: String,
    #[serde(default)]
    pub title: String,
}

fn default_workspace_id() -> String {
    "default".to_string()
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// `query` is already trimmed and at least the minimum length.
    async fn search(&self, workspace_id: &str, query: &str) -> anyhow::Result<Vec<SearchResult>>;
}

#[async_trait]
pub trait ThreadDirectory: Send + Sync {
    /// Re-fetches the thread list of a workspace; [`threads`](Self::threads) reflects it afterwards
    async fn refresh_threads(&self, workspace_id: &str) -> anyhow::Result<()>;

    /// Synchronous snapshot of the currently known threads
    fn threads(&self) -> Vec<Thread>;

    /// Marks `thread` and its repository as the active selection
    fn set_active(&self, thread: &Thread);
}

#[async_trait]
pub trait ChatBinder: Send + Sync {
    /// Binds the chat view to a thread
    async fn set_active_thread(&self, thread_id: &str) -> anyhow::Result<()>;
}
