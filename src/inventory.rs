use std::{
    fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    book::Book,
    error::InventoryError,
    observers::InventoryObserver,
    persistence::{load_books, save_books},
};

/// The library catalog, backed by a JSON file.
///
/// Books keep insertion order. Every successful mutation rewrites the whole
/// backing file before returning. Problems reading or writing that file are
/// logged and otherwise ignored: a bad file starts an empty catalog, and a
/// failed save leaves memory ahead of disk.
pub struct LibraryInventory {
    /// Backing JSON file
    storage_path: PathBuf,
    /// Catalog records in insertion order
    books: Vec<Book>,
    /// Registered status change observers
    observers: Vec<Box<dyn InventoryObserver>>,
}

// Manual implementation of Debug for LibraryInventory
impl fmt::Debug for LibraryInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryInventory")
            .field("storage_path", &self.storage_path)
            .field("books", &self.books)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl LibraryInventory {
    /// Open the catalog stored at `storage_path`.
    ///
    /// Never fails: a missing, empty, unreadable or malformed file yields an
    /// empty catalog.
    #[must_use]
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let mut inventory =
            Self { storage_path: storage_path.into(), books: Vec::new(), observers: Vec::new() };
        inventory.load();
        inventory
    }

    /// Replace the in-memory catalog with the file contents
    fn load(&mut self) {
        self.books = match load_books(&self.storage_path) {
            Ok(books) => {
                info!(path = %self.storage_path.display(), count = books.len(), "catalog loaded");
                books
            }
            Err(error) => {
                warn!(
                    path = %self.storage_path.display(),
                    %error,
                    "could not load catalog, starting empty"
                );
                Vec::new()
            }
        };
    }

    /// Write the whole catalog to disk, logging instead of failing
    pub fn persist(&self) {
        match save_books(&self.storage_path, &self.books) {
            Ok(()) => {
                debug!(path = %self.storage_path.display(), count = self.books.len(), "catalog saved");
            }
            Err(error) => {
                warn!(path = %self.storage_path.display(), %error, "could not save catalog");
            }
        }
    }

    /// Register an observer to be notified of status changes
    pub fn register_observer(&mut self, observer: Box<dyn InventoryObserver>) {
        self.observers.push(observer);
    }

    /// File the catalog is persisted to
    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Number of books in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Add a new, available book and save.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::DuplicateIsbn` if a book with `isbn` is
    /// already in the catalog; the catalog is left unchanged.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> Result<Book, InventoryError> {
        if self.search_by_isbn(isbn).is_some() {
            return Err(InventoryError::DuplicateIsbn(isbn.to_string()));
        }

        let book = Book::new(title, author, isbn);
        self.books.push(book.clone());
        info!(isbn, title, "book added");
        self.persist();
        Ok(book)
    }

    /// Books whose title contains `query`, ignoring case, in catalog order.
    ///
    /// An empty query matches every book.
    #[must_use]
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books.iter().filter(|book| book.title().to_lowercase().contains(&query)).collect()
    }

    /// First book whose ISBN equals `isbn` exactly
    #[must_use]
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    /// All books in catalog order
    #[must_use]
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Issue the book with `isbn` and save.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` if no book has `isbn`, or
    /// `InventoryError::InvalidState` if it is already issued.
    pub fn issue_book(&mut self, isbn: &str) -> Result<(), InventoryError> {
        self.apply(isbn, Book::issue)
    }

    /// Return the book with `isbn` and save.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` if no book has `isbn`, or
    /// `InventoryError::InvalidState` if it is already available.
    pub fn return_book(&mut self, isbn: &str) -> Result<(), InventoryError> {
        self.apply(isbn, Book::return_book)
    }

    /// Run a status transition on the first book with `isbn`, then notify
    /// observers and save. Nothing is saved when the transition fails.
    fn apply(
        &mut self,
        isbn: &str,
        transition: fn(&mut Book) -> Result<(), InventoryError>,
    ) -> Result<(), InventoryError> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.isbn() == isbn)
            .ok_or_else(|| InventoryError::NotFound(isbn.to_string()))?;

        let from = book.status();
        transition(book)?;

        for observer in &self.observers {
            observer.on_status_change(book, from, book.status());
        }

        self.persist();
        Ok(())
    }
}
