//! Bookshelf Domain Models
//!
//! This module contains the book record, the request schema used by the
//! create/update endpoints, and the list projection and filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Book Records
// =============================================================================

/// A stored book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque identifier assigned at creation
    pub id: String,

    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,

    /// Always `page_count == read_page`
    pub finished: bool,

    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Builds a new record from already validated input.
    pub fn new(id: String, input: BookInput, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: 0,
            author: String::new(),
            summary: String::new(),
            publisher: String::new(),
            page_count: 0,
            read_page: 0,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(input);
        book
    }

    /// Replaces every mutable field with `input` and recomputes `finished`.
    ///
    /// `id`, `inserted_at` and `updated_at` are left to the caller.
    pub fn apply(&mut self, input: BookInput) {
        self.name = input.name.unwrap_or_default();
        self.year = input.year.unwrap_or_default();
        self.author = input.author.unwrap_or_default();
        self.summary = input.summary.unwrap_or_default();
        self.publisher = input.publisher.unwrap_or_default();
        self.page_count = input.page_count.unwrap_or_default();
        self.read_page = input.read_page.unwrap_or_default();
        self.reading = input.reading.unwrap_or_default();
        self.finished = self.page_count == self.read_page;
    }

    /// Returns the `{id, name, publisher}` view used by listings.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Payload accepted by the create and update endpoints.
///
/// Every field is optional so that an omitted field and an explicit `null`
/// read the same way. A missing name is reported by validation rather than
/// as a malformed body; the other fields fall back to their zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInput {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: Option<bool>,
}

impl BookInput {
    pub fn page_count(&self) -> u32 {
        self.page_count.unwrap_or_default()
    }

    pub fn read_page(&self) -> u32 {
        self.read_page.unwrap_or_default()
    }
}

/// Reduced view of a book returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

// =============================================================================
// Listing Filters
// =============================================================================

/// Raw query string of `GET /books`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Parsed listing filter. Every present field must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl ListFilter {
    /// Returns true when `book` satisfies every supplied criterion.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(name) = &self.name {
            if !book.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if self.reading.is_some_and(|reading| book.reading != reading) {
            return false;
        }
        if self.finished.is_some_and(|finished| book.finished != finished) {
            return false;
        }
        true
    }
}

impl ListQuery {
    /// Converts the query into a filter.
    ///
    /// Returns `None` when a flag carries a value that is neither a number
    /// nor a boolean; such a query cannot match any book.
    pub fn into_filter(self) -> Option<ListFilter> {
        Some(ListFilter {
            name: self.name,
            reading: parse_flag(self.reading)?,
            finished: parse_flag(self.finished)?,
        })
    }
}

/// A missing or empty value is "no filter"; an unrecognised value yields the
/// outer `None`.
fn parse_flag(value: Option<String>) -> Option<Option<bool>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Some(None),
        Some("1") | Some("true") => Some(Some(true)),
        Some("0") | Some("false") => Some(Some(false)),
        Some(_) => None,
    }
}
