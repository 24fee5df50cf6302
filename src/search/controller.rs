//! Debounced, cancellable message search with keyboard navigation.
//!
//! [`SearchController`] turns keystrokes into search requests against an
//! injected [`SearchBackend`]. Keystrokes restart a debounce timer; when it
//! fires the current query is sent. Requests are never aborted once sent:
//! every submission bumps the session generation and a response is only
//! committed while its generation is still current, so the last submitted
//! query always wins regardless of completion order.
//!
//! State is published through a `tokio::sync::watch` channel so any number of
//! views can observe the session; all methods must be called from within a
//! tokio runtime.

use crate::search::capabilities::{ChatBinder, SearchBackend, Thread, ThreadDirectory};
use crate::search::session::{Direction, SearchPhase, SearchResult, SearchSession};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Quiet period after the latest keystroke before a search is sent
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(180);

/// Trimmed queries shorter than this never reach the backend
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub debounce: Duration,
    pub min_query_chars: usize,
    /// When set, a search still pending after this long fails the session
    pub timeout: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: SEARCH_DEBOUNCE,
            min_query_chars: MIN_QUERY_CHARS,
            timeout: None,
        }
    }
}

pub struct SearchController {
    workspace_id: String,
    options: SearchOptions,
    backend: Arc<dyn SearchBackend>,
    threads: Arc<dyn ThreadDirectory>,
    chat: Arc<dyn ChatBinder>,
    state: Arc<watch::Sender<SearchSession>>,
    debounce: Option<JoinHandle<()>>,
}

impl SearchController {
    pub fn new(
        workspace_id: impl Into<String>,
        backend: Arc<dyn SearchBackend>,
        threads: Arc<dyn ThreadDirectory>,
        chat: Arc<dyn ChatBinder>,
        options: SearchOptions,
    ) -> Self {
        let (state, _) = watch::channel(SearchSession::default());
        Self {
            workspace_id: workspace_id.into(),
            options,
            backend,
            threads,
            chat,
            state: Arc::new(state),
            debounce: None,
        }
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Snapshot of the current session
    pub fn session(&self) -> SearchSession {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSession> {
        self.state.subscribe()
    }

    /// Waits until no search is pending and returns the session at that point
    pub async fn settled(&self) -> SearchSession {
        let mut rx = self.state.subscribe();
        let session = match rx.wait_for(|session| !session.loading).await {
            Ok(session) => session.clone(),
            Err(_) => self.session(),
        };
        session
    }

    /// Starts a fresh session for a newly shown search surface
    pub fn open(&mut self) {
        self.cancel_debounce();
        self.state
            .send_modify(|session| *session = SearchSession::opened(session.generation + 1));
    }

    /// Clears the session; responses still in flight become stale
    pub fn close(&mut self) {
        self.cancel_debounce();
        self.state.send_modify(|session| {
            *session = SearchSession {
                generation: session.generation + 1,
                ..SearchSession::default()
            }
        });
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        let query = text.trim().to_string();
        self.cancel_debounce();

        if query.chars().count() < self.options.min_query_chars {
            self.state.send_modify(|session| {
                session.query = text;
                session.generation += 1;
                session.clear_results();
            });
            return;
        }

        let mut generation = 0;
        self.state.send_modify(|session| {
            session.query = text;
            session.generation += 1;
            session.loading = true;
            session.error = None;
            session.phase = SearchPhase::Debouncing;
            generation = session.generation;
        });
        log::debug!("Scheduling search for {query:?} (generation {generation})");

        let state = Arc::clone(&self.state);
        let backend = Arc::clone(&self.backend);
        let workspace_id = self.workspace_id.clone();
        let delay = self.options.debounce;
        let timeout = self.options.timeout;

        self.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let current = state.send_if_modified(|session| {
                if session.generation != generation {
                    return false;
                }
                session.phase = SearchPhase::Searching;
                true
            });
            if !current {
                return;
            }

            // Detached so that a later keystroke only cancels the timer, never the request
            tokio::spawn(run_search(
                state,
                backend,
                workspace_id,
                query,
                generation,
                timeout,
            ));
        }));
    }

    pub fn move_active(&mut self, direction: Direction) {
        self.state
            .send_modify(|session| session.move_active(direction));
    }

    /// Direct set, used on hover; the caller passes a valid index
    pub fn set_active_index(&mut self, index: usize) {
        self.state.send_modify(|session| session.active_index = index);
    }

    pub async fn select_active(&mut self) -> bool {
        let index = self.state.borrow().active_index;
        self.select(index).await
    }

    /// Opens the thread owning `results[index]` and closes the surface.
    ///
    /// The thread list is refreshed before resolving so that hits in threads
    /// not yet mirrored locally still resolve. The snapshot taken before the
    /// refresh is only used when the refresh itself fails. Returns `false` without any
    /// visible effect when the thread cannot be found.
    pub async fn select(&mut self, index: usize) -> bool {
        let result = {
            let session = self.state.borrow();
            session.results.get(index).cloned()
        };
        let Some(result) = result else {
            return false;
        };

        let known = self.find_thread(&result);
        let resolved = match self.threads.refresh_threads(&self.workspace_id).await {
            Ok(()) => self.find_thread(&result),
            Err(err) => {
                log::warn!(
                    "Failed to refresh threads for workspace {}: {err}",
                    self.workspace_id
                );
                self.find_thread(&result).or(known)
            }
        };

        let Some(thread) = resolved else {
            log::debug!(
                "Search result {} references unknown thread {}",
                result.message_id,
                result.thread_id
            );
            return false;
        };

        self.threads.set_active(&thread);
        if let Err(err) = self.chat.set_active_thread(&thread.id).await {
            log::warn!("Failed to bind chat to thread {}: {err}", thread.id);
            self.state
                .send_modify(|session| session.error = Some(err.to_string()));
            return false;
        }

        self.close();
        true
    }

    fn find_thread(&self, result: &SearchResult) -> Option<Thread> {
        self.threads
            .threads()
            .into_iter()
            .find(|thread| thread.id == result.thread_id)
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_debounce();
    }
}

async fn run_search(
    state: Arc<watch::Sender<SearchSession>>,
    backend: Arc<dyn SearchBackend>,
    workspace_id: String,
    query: String,
    generation: u64,
    timeout: Option<Duration>,
) {
    let outcome = match timeout {
        Some(limit) => {
            match tokio::time::timeout(limit, backend.search(&workspace_id, &query)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(anyhow::anyhow!(
                    "search timed out after {}ms",
                    limit.as_millis()
                )),
            }
        }
        None => backend.search(&workspace_id, &query).await,
    };

    state.send_if_modified(|session| {
        if session.generation != generation {
            log::debug!(
                "Discarding stale response for {query:?} (generation {generation}, current {})",
                session.generation
            );
            return false;
        }

        match outcome {
            Ok(results) => {
                log::debug!("Search for {query:?} returned {} results", results.len());
                session.results = results;
                session.error = None;
                session.phase = SearchPhase::Settled;
            }
            Err(err) => {
                log::warn!("Search for {query:?} failed: {err}");
                session.results.clear();
                session.error = Some(err.to_string());
                session.phase = SearchPhase::Failed;
            }
        }
        session.active_index = 0;
        session.loading = false;
        true
    });
}
