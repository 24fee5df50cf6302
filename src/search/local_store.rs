//! File-backed thread store implementing every search capability.
//!
//! Used by the CLI to drive a [`SearchController`](crate::search::SearchController)
//! without the desktop backend. Threads and their messages are read from one
//! JSON file; the active selection is written to `session.json` next to it.
//!
//! ```json
//! { "threads": [ { "id": "t1", "repoId": "r1", "workspaceId": "default",
//!                  "title": "Refactor", "messages": [ { "id": "m1", "text": "..." } ] } ] }
//! ```

use crate::core::error::{Result, WorkbenchError};
use crate::search::capabilities::{ChatBinder, SearchBackend, Thread, ThreadDirectory};
use crate::search::session::SearchResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";
const SNIPPET_BEFORE: usize = 30;
const SNIPPET_AFTER: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: String,
    #[serde(default)]
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredThread {
    #[serde(flatten)]
    pub thread: Thread,
    #[serde(default)]
    pub messages: Vec<StoredMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadFile {
    pub threads: Vec<StoredThread>,
}

/// What the store persists after a selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSelection {
    pub thread_id: Option<String>,
    pub repo_id: Option<String>,
    pub chat_thread_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub struct LocalThreadStore {
    path: PathBuf,
    max_results: usize,
    threads: RwLock<Vec<StoredThread>>,
    selection: Mutex<ActiveSelection>,
}

impl LocalThreadStore {
    /// Loads the thread file at `path`
    pub fn open(path: impl Into<PathBuf>, max_results: usize) -> Result<Self> {
        let path = path.into();
        let file = load_thread_file(&path)?;
        let selection = load_selection(&session_path(&path)).unwrap_or_default();
        log::debug!(
            "Loaded {} threads from {}",
            file.threads.len(),
            path.display()
        );

        Ok(Self {
            path,
            max_results,
            threads: RwLock::new(file.threads),
            selection: Mutex::new(selection),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn selection(&self) -> ActiveSelection {
        self.selection.lock().clone()
    }

    pub fn thread_title(&self, thread_id: &str) -> Option<String> {
        self.threads
            .read()
            .iter()
            .find(|stored| stored.thread.id == thread_id)
            .map(|stored| stored.thread.title.clone())
    }

    fn search_snapshot(&self, workspace_id: &str, query: &str) -> Vec<SearchResult> {
        let threads = self.threads.read();
        let mut results = Vec::new();

        for stored in threads
            .iter()
            .filter(|stored| stored.thread.workspace_id == workspace_id)
        {
            for message in &stored.messages {
                if results.len() >= self.max_results {
                    return results;
                }
                if let Some(snippet) = find_snippet(&message.text, query) {
                    results.push(SearchResult {
                        thread_id: stored.thread.id.clone(),
                        message_id: message.id.clone(),
                        snippet,
                    });
                }
            }
        }

        results
    }

    /// Applies `update` and returns the serialized selection
    fn apply_selection(&self, update: impl FnOnce(&mut ActiveSelection)) -> Result<String> {
        let mut selection = self.selection.lock();
        update(&mut *selection);
        selection.updated_at = Some(Utc::now());
        Ok(serde_json::to_string_pretty(&*selection)?)
    }

    fn update_selection(&self, update: impl FnOnce(&mut ActiveSelection)) -> Result<()> {
        let json = self.apply_selection(update)?;
        let session_file = session_path(&self.path);
        std::fs::write(&session_file, json)
            .map_err(|e| WorkbenchError::state_write_failed(&session_file, e))
    }

    async fn update_selection_async(
        &self,
        update: impl FnOnce(&mut ActiveSelection) + Send,
    ) -> Result<()> {
        let json = self.apply_selection(update)?;
        let session_file = session_path(&self.path);
        tokio::fs::write(&session_file, json)
            .await
            .map_err(|e| WorkbenchError::state_write_failed(&session_file, e))
    }
}

fn session_path(thread_file: &Path) -> PathBuf {
    thread_file
        .parent()
        .map(|dir| dir.join(SESSION_FILE))
        .unwrap_or_else(|| PathBuf::from(SESSION_FILE))
}

fn parse_thread_file(path: &Path, content: &str) -> Result<ThreadFile> {
    serde_json::from_str(content).map_err(|e| WorkbenchError::thread_file_parse_failed(path, e))
}

fn load_thread_file(path: &Path) -> Result<ThreadFile> {
    if !path.exists() {
        return Err(WorkbenchError::thread_file_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    parse_thread_file(path, &content)
}

fn load_selection(path: &Path) -> Option<ActiveSelection> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-insensitive match of `query` in `text`, returned as a short window of
/// surrounding text with whitespace collapsed. `None` when there is no match.
pub fn find_snippet(text: &str, query: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let haystack: Vec<char> = chars.iter().copied().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    let start = haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let from = start.saturating_sub(SNIPPET_BEFORE);
    let to = (start + needle.len() + SNIPPET_AFTER).min(chars.len());

    let window: String = chars[from..to].iter().collect();
    let mut snippet = window.split_whitespace().collect::<Vec<_>>().join(" ");
    if from > 0 {
        snippet.insert(0, '…');
    }
    if to < chars.len() {
        snippet.push('…');
    }
    Some(snippet)
}

#[async_trait]
impl SearchBackend for LocalThreadStore {
    async fn search(&self, workspace_id: &str, query: &str) -> anyhow::Result<Vec<SearchResult>> {
        Ok(self.search_snapshot(workspace_id, query))
    }
}

#[async_trait]
impl ThreadDirectory for LocalThreadStore {
    async fn refresh_threads(&self, workspace_id: &str) -> anyhow::Result<()> {
        if !self.path.exists() {
            return Err(WorkbenchError::thread_file_not_found(&self.path).into());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file = parse_thread_file(&self.path, &content)?;
        log::debug!(
            "Refreshed {} threads for workspace {workspace_id}",
            file.threads.len()
        );
        *self.threads.write() = file.threads;
        Ok(())
    }

    fn threads(&self) -> Vec<Thread> {
        self.threads
            .read()
            .iter()
            .map(|stored| stored.thread.clone())
            .collect()
    }

    fn set_active(&self, thread: &Thread) {
        let result = self.update_selection(|selection| {
            selection.thread_id = Some(thread.id.clone());
            selection.repo_id = Some(thread.repo_id.clone());
        });
        if let Err(e) = result {
            log::warn!("Failed to persist active thread {}: {e}", thread.id);
        }
    }
}

#[async_trait]
impl ChatBinder for LocalThreadStore {
    async fn set_active_thread(&self, thread_id: &str) -> anyhow::Result<()> {
        self.update_selection_async(|selection| {
            selection.chat_thread_id = Some(thread_id.to_string());
        })
        .await?;
        Ok(())
    }
}
