//! Bookshelf Domain Module
//!
//! This module contains all bookshelf logic, including:
//! - Domain models (Book, request payloads, list filters)
//! - The in-memory book store and its validation rules
//! - Error types and their HTTP mapping
//! - REST API handlers

pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
pub use store::BookStore;
