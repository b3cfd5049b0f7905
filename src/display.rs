use colored::Colorize;

use crate::book::{Book, BookStatus};

/// Render one catalog line, coloring the status when `color` is set
#[must_use]
pub fn book_line(book: &Book, color: bool) -> String {
    if !color {
        return book.to_string();
    }

    let status = match book.status() {
        BookStatus::Available => book.status().as_str().green(),
        BookStatus::Issued => book.status().as_str().yellow(),
    };
    format!("{} by {} (ISBN: {}) - {status}", book.title().bold(), book.author(), book.isbn())
}

/// Render a header line
#[must_use]
pub fn heading(text: &str, color: bool) -> String {
    if color { text.bold().to_string() } else { text.to_string() }
}

/// Render an error message shown to the user
#[must_use]
pub fn error_line(message: &str, color: bool) -> String {
    if color { format!("{} {message}", "Error:".red().bold()) } else { format!("Error: {message}") }
}
