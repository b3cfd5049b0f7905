//! Single-user library catalog kept in a JSON file.
//!
//! This crate tracks books and whether they are issued, rewrites the backing
//! file after every change, and provides a numbered text menu over it.

pub mod book;
pub mod config;
pub mod display;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod menu;
pub mod observers;
pub mod persistence;

pub use book::{Book, BookStatus};
pub use error::InventoryError;
pub use inventory::LibraryInventory;
pub use menu::Menu;
pub use observers::{InventoryObserver, TransitionLogger};
pub use persistence::PersistenceError;
