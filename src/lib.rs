//! Bookshelf Library
//!
//! This library provides an in-memory bookshelf with a REST API for creating,
//! listing, fetching, updating and deleting books.

// Domain modules
pub mod book;

// Infrastructure
pub mod config;
pub mod router;
