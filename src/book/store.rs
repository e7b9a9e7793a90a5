//! Book Store
//!
//! `BookStore` owns the in-memory collection. Every operation takes the
//! single collection lock once and runs to completion, so no caller ever
//! observes a half-applied change.

use super::{
    errors::{BookError, Result, ValidationError},
    helpers::new_book_id,
    models::{Book, BookInput, BookSummary, ListFilter},
};
use chrono::Utc;
use parking_lot::Mutex;

/// Checks a create/update payload. The first failing rule wins.
pub fn validate(input: &BookInput) -> std::result::Result<(), ValidationError> {
    if input.name.as_deref().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingName);
    }
    if input.read_page() > input.page_count() {
        return Err(ValidationError::ReadPageExceedsPageCount);
    }
    Ok(())
}

/// In-memory, insertion-ordered collection of books
#[derive(Default)]
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `input`, stores it as a new book and returns its id.
    pub fn create(&self, input: BookInput) -> Result<String> {
        validate(&input)?;

        let mut books = self.books.lock();
        let mut id = new_book_id();
        while books.iter().any(|b| b.id == id) {
            id = new_book_id();
        }

        books.push(Book::new(id.clone(), input, Utc::now()));
        tracing::debug!(book_id = %id, total = books.len(), "book created");

        Ok(id)
    }

    /// Returns the projection of every book matching `filter`, in store order.
    pub fn list(&self, filter: &ListFilter) -> Vec<BookSummary> {
        self.books
            .lock()
            .iter()
            .filter(|b| filter.matches(b))
            .map(Book::summary)
            .collect()
    }

    /// Returns a copy of the book with the given id.
    pub fn get(&self, id: &str) -> Result<Book> {
        self.books
            .lock()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(BookError::NotFound)
    }

    /// Replaces the mutable fields of an existing book.
    ///
    /// Validation runs before the lookup, so an invalid payload for an
    /// unknown id reports the validation failure.
    pub fn update(&self, id: &str, input: BookInput) -> Result<()> {
        validate(&input)?;

        let mut books = self.books.lock();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookError::NotFound)?;

        book.apply(input);
        // never earlier than the previous value, even if the clock steps back
        book.updated_at = Utc::now().max(book.updated_at);
        tracing::debug!(book_id = %id, "book updated");

        Ok(())
    }

    /// Removes a book, keeping the relative order of the others.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut books = self.books.lock();
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookError::NotFound)?;

        books.remove(index);
        tracing::debug!(book_id = %id, total = books.len(), "book deleted");

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.books.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.lock().is_empty()
    }
}
