//! Scripted fake capabilities for search controller tests

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use workbench_navigator::search::{
    ChatBinder, SearchBackend, SearchController, SearchOptions, SearchResult, Thread,
    ThreadDirectory,
};

pub const WORKSPACE: &str = "ws-1";

pub fn result(thread_id: &str, message_id: &str, snippet: &str) -> SearchResult {
    SearchResult {
        thread_id: thread_id.to_string(),
        message_id: message_id.to_string(),
        snippet: snippet.to_string(),
    }
}

pub fn thread(id: &str, repo_id: &str) -> Thread {
    Thread {
        id: id.to_string(),
        repo_id: repo_id.to_string(),
        workspace_id: WORKSPACE.to_string(),
        title: format!("Thread {id}"),
    }
}

/// Search backend answering from a script of per-query responses, delays and failures
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<(String, String)>>,
    responses: Mutex<HashMap<String, Vec<SearchResult>>>,
    delays: Mutex<HashMap<String, Duration>>,
    failures: Mutex<HashMap<String, String>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, query: &str, results: Vec<SearchResult>) {
        self.responses.lock().insert(query.to_string(), results);
    }

    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().insert(query.to_string(), delay);
    }

    pub fn fail(&self, query: &str, message: &str) {
        self.failures
            .lock()
            .insert(query.to_string(), message.to_string());
    }

    /// Queries received so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, q)| q.clone()).collect()
    }

    pub fn workspaces(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(ws, _)| ws.clone()).collect()
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn search(&self, workspace_id: &str, query: &str) -> anyhow::Result<Vec<SearchResult>> {
        self.calls
            .lock()
            .push((workspace_id.to_string(), query.to_string()));

        let delay = self.delays.lock().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().get(query).cloned();
        if let Some(message) = failure {
            anyhow::bail!(message);
        }

        Ok(self
            .responses
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

/// Thread directory whose snapshot only catches up with `remote` on refresh
#[derive(Default)]
pub struct FakeThreads {
    known: Mutex<Vec<Thread>>,
    remote: Mutex<Vec<Thread>>,
    active: Mutex<Option<Thread>>,
    refreshes: AtomicUsize,
    fail_refresh: AtomicBool,
}

impl FakeThreads {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Threads already mirrored locally and also present on the backend
    pub fn with_known(threads: Vec<Thread>) -> Arc<Self> {
        let fake = Self::default();
        *fake.known.lock() = threads.clone();
        *fake.remote.lock() = threads;
        Arc::new(fake)
    }

    /// Mirrors a thread locally without it existing on the backend, so the next
    /// successful refresh drops it
    pub fn add_known(&self, thread: Thread) {
        self.known.lock().push(thread);
    }

    /// Makes a thread visible only after the next refresh
    pub fn add_remote(&self, thread: Thread) {
        self.remote.lock().push(thread);
    }

    pub fn fail_refreshes(&self) {
        self.fail_refresh.store(true, Ordering::SeqCst);
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    pub fn active(&self) -> Option<Thread> {
        self.active.lock().clone()
    }
}

#[async_trait]
impl ThreadDirectory for FakeThreads {
    async fn refresh_threads(&self, _workspace_id: &str) -> anyhow::Result<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        if self.fail_refresh.load(Ordering::SeqCst) {
            anyhow::bail!("backend unavailable");
        }
        let remote = self.remote.lock().clone();
        *self.known.lock() = remote;
        Ok(())
    }

    fn threads(&self) -> Vec<Thread> {
        self.known.lock().clone()
    }

    fn set_active(&self, thread: &Thread) {
        *self.active.lock() = Some(thread.clone());
    }
}

#[derive(Default)]
pub struct FakeChat {
    bound: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl FakeChat {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_binds(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn bound(&self) -> Vec<String> {
        self.bound.lock().clone()
    }
}

#[async_trait]
impl ChatBinder for FakeChat {
    async fn set_active_thread(&self, thread_id: &str) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("chat session closed");
        }
        self.bound.lock().push(thread_id.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub threads: Arc<FakeThreads>,
    pub chat: Arc<FakeChat>,
    pub controller: SearchController,
}

pub fn harness_with(threads: Arc<FakeThreads>, options: SearchOptions) -> Harness {
    let backend = FakeBackend::new();
    let chat = FakeChat::new();
    let controller = SearchController::new(
        WORKSPACE,
        backend.clone(),
        threads.clone(),
        chat.clone(),
        options,
    );
    Harness {
        backend,
        threads,
        chat,
        controller,
    }
}

pub fn harness() -> Harness {
    harness_with(FakeThreads::new(), SearchOptions::default())
}
