use tracing::info;

use crate::book::{Book, BookStatus};

/// Trait for status change observation
pub trait InventoryObserver {
    /// Called after a book changed status and before the catalog is saved
    fn on_status_change(&self, book: &Book, from: BookStatus, to: BookStatus);
}

/// Logs every issue and return through `tracing`
#[derive(Debug)]
pub struct TransitionLogger;

impl InventoryObserver for TransitionLogger {
    fn on_status_change(&self, book: &Book, from: BookStatus, to: BookStatus) {
        info!(isbn = book.isbn(), title = book.title(), %from, %to, "book status changed");
    }
}
