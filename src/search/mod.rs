//! Incremental message search.
//!
//! The [`SearchController`] owns one [`SearchSession`] and depends only on the
//! capability traits in [`capabilities`], which makes it usable against the
//! desktop backend bridge, the file-backed [`LocalThreadStore`], or test fakes.

pub mod capabilities;
pub mod controller;
pub mod local_store;
pub mod session;

pub use capabilities::{ChatBinder, SearchBackend, Thread, ThreadDirectory};
pub use controller::{SearchController, SearchOptions, MIN_QUERY_CHARS, SEARCH_DEBOUNCE};
pub use local_store::{find_snippet, ActiveSelection, LocalThreadStore};
pub use session::{Direction, SearchPhase, SearchResult, SearchSession};
