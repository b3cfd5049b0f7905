use thiserror::Error;

use crate::book::BookStatus;

/// Business-rule failures raised by the catalog.
///
/// Each variant carries the ISBN involved so callers can log it; the
/// `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A book with this ISBN is already in the catalog
    #[error("A book with this ISBN already exists.")]
    DuplicateIsbn(String),
    /// No book with this ISBN is in the catalog
    #[error("Book not found.")]
    NotFound(String),
    /// The book is already in the state the operation would move it to
    #[error("Book is already {status}.")]
    InvalidState {
        /// ISBN of the book that rejected the transition
        isbn: String,
        /// Status the book is stuck in
        status: BookStatus,
    },
}

impl InventoryError {
    /// ISBN the failed operation was asked about
    #[must_use]
    pub fn isbn(&self) -> &str {
        match self {
            Self::DuplicateIsbn(isbn) | Self::NotFound(isbn) | Self::InvalidState { isbn, .. } => isbn,
        }
    }
}
