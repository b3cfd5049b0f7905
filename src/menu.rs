//! Numbered text menu driving a [`LibraryInventory`].
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so the binary
//! hands it stdin/stdout while tests hand it in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::{
    display::{book_line, error_line, heading},
    inventory::LibraryInventory,
};

/// Whether the loop keeps going after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the menu again
    Continue,
    /// Leave the loop
    Exit,
}

/// Interactive front end over a catalog
#[derive(Debug)]
pub struct Menu<R, W> {
    /// Catalog being managed
    inventory: LibraryInventory,
    /// Source of user input
    input: R,
    /// Destination for prompts and results
    output: W,
    /// Colored output enabled
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu over `inventory`
    #[must_use]
    pub fn new(inventory: LibraryInventory, input: R, output: W, color: bool) -> Self {
        Self { inventory, input, output, color }
    }

    /// Catalog being managed
    #[must_use]
    pub fn inventory(&self) -> &LibraryInventory {
        &self.inventory
    }

    /// Give back the catalog and the output stream
    #[must_use]
    pub fn into_parts(self) -> (LibraryInventory, W) {
        (self.inventory, self.output)
    }

    /// Run until the user picks exit or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option (1-7): ")? else {
                return self.exit_on_eof();
            };
            if self.handle_choice(&choice)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Print the header and the numbered options
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", heading("Library Inventory Manager", self.color))?;
        for option in [
            "1. Add Book",
            "2. Issue Book",
            "3. Return Book",
            "4. View All Books",
            "5. Search by Title",
            "6. Search by ISBN",
            "7. Exit",
        ] {
            writeln!(self.output, "{option}")?;
        }
        Ok(())
    }

    /// Show `label` and read one trimmed line; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so they
    /// reach the caller as ordinary unrecognized input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Say goodbye after input ran out mid-session
    fn exit_on_eof(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Exiting.")?;
        Ok(())
    }

    /// Dispatch one menu choice
    fn handle_choice(&mut self, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.add_book(),
            "2" => self.issue_book(),
            "3" => self.return_book(),
            "4" => self.list_books(),
            "5" => self.search_title(),
            "6" => self.search_isbn(),
            "7" => {
                writeln!(self.output, "Goodbye.")?;
                Ok(Flow::Exit)
            }
            _ => {
                writeln!(self.output, "Invalid option. Try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Prompt for `label`, or finish the session if input ended
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        let answer = self.prompt(label)?;
        if answer.is_none() {
            self.exit_on_eof()?;
        }
        Ok(answer)
    }

    /// Print a business error
    fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", error_line(message, self.color))
    }

    /// Option 1
    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(title) = self.ask("Title: ")? else { return Ok(Flow::Exit) };
        let Some(author) = self.ask("Author: ")? else { return Ok(Flow::Exit) };
        let Some(isbn) = self.ask("ISBN: ")? else { return Ok(Flow::Exit) };

        match self.inventory.add_book(&title, &author, &isbn) {
            Ok(_) => writeln!(self.output, "Book added successfully.")?,
            Err(err) => self.report(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    /// Option 2
    fn issue_book(&mut self) -> io::Result<Flow> {
        let Some(isbn) = self.ask("ISBN to issue: ")? else { return Ok(Flow::Exit) };

        match self.inventory.issue_book(&isbn) {
            Ok(()) => writeln!(self.output, "Book issued.")?,
            Err(err) => self.report(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    /// Option 3
    fn return_book(&mut self) -> io::Result<Flow> {
        let Some(isbn) = self.ask("ISBN to return: ")? else { return Ok(Flow::Exit) };

        match self.inventory.return_book(&isbn) {
            Ok(()) => writeln!(self.output, "Book returned.")?,
            Err(err) => self.report(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    /// Option 4
    fn list_books(&mut self) -> io::Result<Flow> {
        if self.inventory.is_empty() {
            writeln!(self.output, "No books in catalog.")?;
        }
        for book in self.inventory.list_all() {
            writeln!(self.output, "{}", book_line(book, self.color))?;
        }
        Ok(Flow::Continue)
    }

    /// Option 5
    fn search_title(&mut self) -> io::Result<Flow> {
        let Some(query) = self.ask("Enter title search query: ")? else { return Ok(Flow::Exit) };

        let results = self.inventory.search_by_title(&query);
        if results.is_empty() {
            writeln!(self.output, "No matches.")?;
        }
        for book in results {
            writeln!(self.output, "{}", book_line(book, self.color))?;
        }
        Ok(Flow::Continue)
    }

    /// Option 6
    fn search_isbn(&mut self) -> io::Result<Flow> {
        let Some(isbn) = self.ask("Enter ISBN: ")? else { return Ok(Flow::Exit) };

        match self.inventory.search_by_isbn(&isbn) {
            Some(book) => writeln!(self.output, "{}", book_line(book, self.color))?,
            None => writeln!(self.output, "Not found.")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::book::BookStatus;

    /// Run a scripted session and return the catalog and everything printed
    fn run_script(dir: &TempDir, script: &str) -> (LibraryInventory, String) {
        let inventory = LibraryInventory::open(dir.path().join("books.json"));
        let mut menu = Menu::new(inventory, Cursor::new(script.to_string()), Vec::new(), false);
        menu.run().unwrap();
        let (inventory, output) = menu.into_parts();
        (inventory, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_issue_list_exit() {
        let dir = TempDir::new().unwrap();
        let script = "1\nDune\nFrank Herbert\n111\n2\n111\n4\n7\n";
        let (inventory, output) = run_script(&dir, script);

        assert!(output.contains("Library Inventory Manager\n1. Add Book\n"));
        assert!(output.contains("Book added successfully."));
        assert!(output.contains("Book issued."));
        assert!(output.contains("Dune by Frank Herbert (ISBN: 111) - issued"));
        assert!(output.ends_with("Goodbye.\n"));
        assert_eq!(inventory.search_by_isbn("111").map(|b| b.status()), Some(BookStatus::Issued));
    }

    #[test]
    fn test_business_errors_are_printed() {
        let dir = TempDir::new().unwrap();
        let script = "2\n999\n1\nDune\nHerbert\n111\n1\nDune\nHerbert\n111\n3\n111\n7\n";
        let (inventory, output) = run_script(&dir, script);

        assert!(output.contains("Error: Book not found."));
        assert!(output.contains("Error: A book with this ISBN already exists."));
        assert!(output.contains("Error: Book is already available."));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let dir = TempDir::new().unwrap();
        let (_, output) = run_script(&dir, "9\n7\n");

        assert!(output.contains("Invalid option. Try again."));
        assert_eq!(output.matches("Library Inventory Manager").count(), 2);
    }

    #[test]
    fn test_non_utf8_choice_is_an_invalid_option() {
        let dir = TempDir::new().unwrap();
        let inventory = LibraryInventory::open(dir.path().join("books.json"));
        let script = vec![0xff, 0xfe, b'\n', b'7', b'\n'];
        let mut menu = Menu::new(inventory, Cursor::new(script), Vec::new(), false);

        menu.run().unwrap();
        let (_, output) = menu.into_parts();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Invalid option. Try again."));
        assert_eq!(output.matches("Library Inventory Manager").count(), 2);
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_non_utf8_isbn_is_not_found() {
        let dir = TempDir::new().unwrap();
        let inventory = LibraryInventory::open(dir.path().join("books.json"));
        let mut script = b"2\n".to_vec();
        script.extend_from_slice(&[0xc3, 0x28, b'\n']);
        script.extend_from_slice(b"7\n");
        let mut menu = Menu::new(inventory, Cursor::new(script), Vec::new(), false);

        menu.run().unwrap();
        let (_, output) = menu.into_parts();
        assert!(String::from_utf8(output).unwrap().contains("Error: Book not found."));
    }

    #[test]
    fn test_empty_catalog_and_searches() {
        let dir = TempDir::new().unwrap();
        let (_, output) = run_script(&dir, "4\n5\ndune\n6\n111\n7\n");

        assert!(output.contains("No books in catalog."));
        assert!(output.contains("No matches."));
        assert!(output.contains("Not found."));
    }

    #[test]
    fn test_search_results() {
        let dir = TempDir::new().unwrap();
        let script = "1\nDune\nHerbert\n111\n1\nEmma\nAusten\n222\n5\n  DUNE  \n6\n222\n7\n";
        let (_, output) = run_script(&dir, script);

        assert!(output.contains("Dune by Herbert (ISBN: 111) - available"));
        assert!(output.contains("Emma by Austen (ISBN: 222) - available"));
        assert_eq!(output.matches("Dune by Herbert").count(), 1);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let dir = TempDir::new().unwrap();
        let (_, output) = run_script(&dir, "");
        assert!(output.ends_with("\nExiting.\n"));

        let (inventory, output) = run_script(&dir, "1\nDune\n");
        assert!(output.ends_with("\nExiting.\n"));
        assert!(inventory.is_empty());
    }
}
