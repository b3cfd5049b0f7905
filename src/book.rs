use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Availability of a catalog book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// Book is on the shelf and may be issued
    #[default]
    Available,
    /// Book is issued to a reader
    Issued,
}

impl BookStatus {
    /// Lowercase name used both on disk and in messages
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog record.
///
/// Fields serialize in declaration order, which fixes the key order of the
/// persisted JSON objects. The status can only change through [`Book::issue`]
/// and [`Book::return_book`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    /// Title as entered
    title: String,
    /// Author as entered
    author: String,
    /// Lookup key for issue, return and exact search
    isbn: String,
    /// Current availability; absent in older files means available
    #[serde(default)]
    status: BookStatus,
}

impl Book {
    /// Create a book that starts out available
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN of the book
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> BookStatus {
        self.status
    }

    /// Whether the book can currently be issued
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Move the book from available to issued
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidState` if the book is already issued.
    pub fn issue(&mut self) -> Result<(), InventoryError> {
        self.transition(BookStatus::Available, BookStatus::Issued)
    }

    /// Move the book from issued back to available
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidState` if the book is already available.
    pub fn return_book(&mut self) -> Result<(), InventoryError> {
        self.transition(BookStatus::Issued, BookStatus::Available)
    }

    /// Apply `from -> to`, rejecting the self-transition on `to`
    fn transition(&mut self, from: BookStatus, to: BookStatus) -> Result<(), InventoryError> {
        if self.status != from {
            return Err(InventoryError::InvalidState { isbn: self.isbn.clone(), status: self.status });
        }
        self.status = to;
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.status)
    }
}
