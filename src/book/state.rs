//! Bookshelf Application State
//!
//! The state is built once at startup and injected into the router, so each
//! test can run against its own empty store.

use super::store::BookStore;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state handed to every request handler
#[derive(Default)]
pub struct AppState {
    /// The in-memory book collection
    pub books: BookStore,
}

impl AppState {
    /// Creates a state with an empty bookshelf
    pub fn new() -> Self {
        Self::default()
    }
}
