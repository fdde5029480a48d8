//! The interactive menu loop.
//!
//! A [`Session`] owns the open catalog and the terminal streams. Storage
//! faults are reported to the operator and the loop carries on; only
//! failures of the terminal streams themselves end the session early.

use std::io::{BufRead, Write};

use bookstock::{Book, Database};

use crate::error::CliError;
use crate::prompt::{parse_book_id, Prompted, Prompter};

const MENU: &str = "\nBookstore Management System
1. Enter book
2. Update book
3. Delete book
4. Search books
5. Show all books
0. Exit";

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new book.
    EnterBook,
    /// Replace a book's title, author and quantity.
    UpdateBook,
    /// Remove a book.
    DeleteBook,
    /// Find books by substring.
    SearchBooks,
    /// List the whole catalog.
    ShowAll,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Parses a menu answer; anything but `0`-`5` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::EnterBook),
            "2" => Some(Self::UpdateBook),
            "3" => Some(Self::DeleteBook),
            "4" => Some(Self::SearchBooks),
            "5" => Some(Self::ShowAll),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drives the menu against one catalog.
pub struct Session<R, W> {
    db: Database,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an open database and terminal streams.
    pub fn new(db: Database, input: R, output: W) -> Self {
        Self {
            db,
            prompter: Prompter::new(input, output),
        }
    }

    /// Returns the catalog this session works on.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Consumes the session and returns the output stream.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Creates and seeds the book table.
    ///
    /// A storage fault is reported and swallowed; the menu can still run,
    /// and each later operation reports its own failure.
    pub fn initialize(&mut self) -> Result<(), CliError> {
        match self.db.initialize() {
            Ok(inserted) => {
                log::info!("catalog ready ({inserted} sample books added)");
                Ok(())
            }
            Err(e) => self.report_fault(&e),
        }
    }

    /// Runs the menu until the operator exits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            writeln!(self.prompter.output(), "{MENU}")?;
            // End of input counts as choosing to exit.
            let choice = match self.prompter.ask("Enter your choice: ")? {
                Some(answer) => MenuChoice::parse(&answer),
                None => {
                    log::debug!("input closed, leaving menu");
                    Some(MenuChoice::Exit)
                }
            };

            match choice {
                Some(MenuChoice::EnterBook) => self.enter_book()?,
                Some(MenuChoice::UpdateBook) => self.update_book()?,
                Some(MenuChoice::DeleteBook) => self.delete_book()?,
                Some(MenuChoice::SearchBooks) => self.search_books()?,
                Some(MenuChoice::ShowAll) => self.show_all()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.prompter.output(), "Exiting the program.")?;
                    return Ok(());
                }
                None => writeln!(
                    self.prompter.output(),
                    "Invalid choice. Please try again."
                )?,
            }
        }
    }

    fn enter_book(&mut self) -> Result<(), CliError> {
        self.show_all()?;

        let id = loop {
            let Prompted::Value(answer) = self.prompter.text("Enter book ID", "Book ID")? else {
                return Ok(());
            };
            let Some(id) = parse_book_id(&answer) else {
                writeln!(
                    self.prompter.output(),
                    "Error: Book ID must be a number. Please try again."
                )?;
                continue;
            };
            if self.book_exists(id)? {
                writeln!(
                    self.prompter.output(),
                    "Error: A book with this ID already exists. Please enter a new ID."
                )?;
            } else {
                break id;
            }
        };

        let Some(book) = self.collect_book(id, "Enter book", "Enter quantity")? else {
            return Ok(());
        };

        match self.db.add(&book) {
            Ok(()) => writeln!(self.prompter.output(), "Book added successfully.")?,
            Err(e) => self.report_fault(&e)?,
        }
        Ok(())
    }

    fn update_book(&mut self) -> Result<(), CliError> {
        self.show_all()?;

        let Some(id) = self.existing_book_id("Enter book ID to update")? else {
            return Ok(());
        };
        let Some(book) = self.collect_book(id, "Enter new book", "Enter new quantity")? else {
            return Ok(());
        };

        match self.db.update(&book) {
            Ok(_) => writeln!(self.prompter.output(), "Book updated successfully.")?,
            Err(e) => self.report_fault(&e)?,
        }
        Ok(())
    }

    fn delete_book(&mut self) -> Result<(), CliError> {
        self.show_all()?;

        let Some(id) = self.existing_book_id("Enter book ID to delete")? else {
            return Ok(());
        };

        match self.db.delete(id) {
            Ok(_) => writeln!(self.prompter.output(), "Book deleted successfully.")?,
            Err(e) => self.report_fault(&e)?,
        }
        Ok(())
    }

    fn search_books(&mut self) -> Result<(), CliError> {
        let Prompted::Value(term) = self
            .prompter
            .text("Enter search term (title or author)", "Search term")?
        else {
            return Ok(());
        };

        match self.db.search(&term) {
            Ok(books) if books.is_empty() => writeln!(
                self.prompter.output(),
                "No books found matching the search term."
            )?,
            Ok(books) => self.render("Search Results:", &books)?,
            Err(e) => self.report_fault(&e)?,
        }
        Ok(())
    }

    fn show_all(&mut self) -> Result<(), CliError> {
        match self.db.list_all() {
            Ok(books) if books.is_empty() => {
                writeln!(self.prompter.output(), "No books found in the database.")?;
            }
            Ok(books) => self.render("All Books in Database:", &books)?,
            Err(e) => self.report_fault(&e)?,
        }
        Ok(())
    }

    /// Asks once for an id that must already be in the catalog.
    ///
    /// A malformed or unknown id is reported and yields `None`, which
    /// abandons the flow rather than asking again.
    fn existing_book_id(&mut self, prompt: &str) -> Result<Option<i64>, CliError> {
        let Prompted::Value(answer) = self.prompter.text(prompt, "Book ID")? else {
            return Ok(None);
        };
        let Some(id) = parse_book_id(&answer) else {
            writeln!(
                self.prompter.output(),
                "Error: Book ID must be a number. Please try again."
            )?;
            return Ok(None);
        };
        if !self.book_exists(id)? {
            writeln!(
                self.prompter.output(),
                "Error: No book with this ID exists. Please try again."
            )?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    /// Collects title, author and quantity for `id`.
    ///
    /// `None` means the operator backed out. The prompts already enforce
    /// everything [`Book::new`] checks, so the book is built directly.
    fn collect_book(
        &mut self,
        id: i64,
        field_prompt: &str,
        qty_prompt: &str,
    ) -> Result<Option<Book>, CliError> {
        let Prompted::Value(title) = self
            .prompter
            .text(&format!("{field_prompt} title"), "Title")?
        else {
            return Ok(None);
        };
        let Prompted::Value(author) = self
            .prompter
            .text(&format!("{field_prompt} author"), "Author")?
        else {
            return Ok(None);
        };
        let Prompted::Value(qty) = self.prompter.quantity(qty_prompt)? else {
            return Ok(None);
        };

        Ok(Some(Book {
            id,
            title,
            author,
            qty,
        }))
    }

    /// Existence check that reports a storage fault and treats it as absent.
    fn book_exists(&mut self, id: i64) -> Result<bool, CliError> {
        match self.db.exists(id) {
            Ok(exists) => Ok(exists),
            Err(e) => {
                self.report_fault(&e)?;
                Ok(false)
            }
        }
    }

    fn render(&mut self, header: &str, books: &[Book]) -> Result<(), CliError> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "{header}")?;
        for book in books {
            writeln!(out, "{book}")?;
        }
        Ok(())
    }

    fn report_fault(&mut self, err: &bookstock::Error) -> Result<(), CliError> {
        log::debug!("storage fault: {err:?}");
        writeln!(self.prompter.output(), "Database error: {err}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstock::{seed_books, DatabaseConfig};
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        session: Session<Cursor<Vec<u8>>, Vec<u8>>,
    }

    impl Fixture {
        /// Runs a seeded session to completion over `input`.
        fn run(input: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
            let mut session = Session::new(db, Cursor::new(input.as_bytes().to_vec()), Vec::new());
            session.initialize().unwrap();
            session.run().unwrap();
            Self {
                _dir: dir,
                session,
            }
        }

        fn books(&self) -> Vec<Book> {
            self.session.database().list_all().unwrap()
        }

        fn output(self) -> String {
            String::from_utf8(self.session.into_output()).unwrap()
        }
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::EnterBook));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::ShowAll));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("one"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let fixture = Fixture::run("0\n");
        let out = fixture.output();
        assert!(out.contains("Bookstore Management System"));
        assert!(out.contains("Exiting the program."));
    }

    #[test]
    fn test_end_of_input_exits_like_choice_zero() {
        let out = Fixture::run("").output();
        assert!(out.ends_with("Enter your choice: \nExiting the program.\n"));

        let out = Fixture::run("1\n3006\nDune\n").output();
        assert!(out.ends_with("Exiting the program.\n"));
        assert!(!out.contains("Book added successfully."));
    }

    #[test]
    fn test_enter_book_with_large_quantity() {
        let fixture = Fixture::run("1\n3006\nBulk Paper\nWarehouse\n5000000000\n5\n0\n");
        let books = fixture.books();
        assert_eq!(books.last().map(|b| b.qty), Some(5_000_000_000));
        assert!(fixture
            .output()
            .contains("ID: 3006, Title: Bulk Paper, Author: Warehouse, Quantity: 5000000000"));
    }

    #[test]
    fn test_invalid_choice() {
        let out = Fixture::run("9\n0\n").output();
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn test_show_all_lists_seed_books() {
        let out = Fixture::run("5\n0\n").output();
        assert!(out.contains("\nAll Books in Database:\n"));
        for book in seed_books() {
            assert!(out.contains(&format!("{book}\n")));
        }
    }

    #[test]
    fn test_enter_book() {
        let fixture = Fixture::run("1\n3006\nDune\nFrank Herbert\n10\n0\n");
        let books = fixture.books();
        assert_eq!(books.len(), 6);
        assert_eq!(
            books.last(),
            Some(&Book::new(3006, "Dune", "Frank Herbert", 10).unwrap())
        );
        assert!(fixture.output().contains("Book added successfully."));
    }

    #[test]
    fn test_enter_book_retries_bad_and_taken_ids() {
        let fixture = Fixture::run("1\nabc\n3001\n\n3006\nDune\nFrank Herbert\n10\n0\n");
        assert_eq!(fixture.books().len(), 6);
        let out = fixture.output();
        assert!(out.contains("Error: Book ID must be a number. Please try again."));
        assert!(out.contains("Error: A book with this ID already exists. Please enter a new ID."));
        assert!(out.contains("Error: Book ID cannot be empty. Please try again."));
    }

    #[test]
    fn test_enter_book_back_writes_nothing() {
        for input in [
            "1\nback\n0\n",
            "1\n3006\nback\n0\n",
            "1\n3006\nDune\nBACK\n0\n",
            "1\n3006\nDune\nFrank Herbert\nback\n0\n",
        ] {
            let fixture = Fixture::run(input);
            assert_eq!(fixture.books(), seed_books(), "input {input:?}");
            assert!(fixture.output().contains("Exiting the program."));
        }
    }

    #[test]
    fn test_enter_book_duplicate_title_reports_fault() {
        let fixture = Fixture::run("1\n3006\nAlice in Wonderland\nSomeone\n1\n0\n");
        assert_eq!(fixture.books(), seed_books());
        let out = fixture.output();
        assert!(out.contains("Database error: UNIQUE constraint failed: book.title"));
        assert!(!out.contains("Book added successfully."));
        assert!(out.contains("Exiting the program."));
    }

    #[test]
    fn test_update_book() {
        let fixture = Fixture::run("2\n3005\nThrough the Looking-Glass\nLewis Carroll\n7\n0\n");
        let book = fixture
            .books()
            .into_iter()
            .find(|b| b.id == 3005)
            .unwrap();
        assert_eq!(book.title, "Through the Looking-Glass");
        assert_eq!(book.qty, 7);
        assert!(fixture.output().contains("Book updated successfully."));
    }

    #[test]
    fn test_update_unknown_id_aborts() {
        // The id is not retried: "Dune" lands on the menu as an invalid choice
        let fixture = Fixture::run("2\n9999\nDune\n0\n");
        assert_eq!(fixture.books(), seed_books());
        let out = fixture.output();
        assert!(out.contains("Error: No book with this ID exists. Please try again."));
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_update_non_numeric_id_aborts() {
        let fixture = Fixture::run("2\nabc\n0\n");
        assert_eq!(fixture.books(), seed_books());
        assert!(fixture
            .output()
            .contains("Error: Book ID must be a number. Please try again."));
    }

    #[test]
    fn test_update_back_at_quantity() {
        let fixture = Fixture::run("2\n3001\nNew Title\nNew Author\nback\n0\n");
        assert_eq!(fixture.books(), seed_books());
    }

    #[test]
    fn test_delete_book() {
        let fixture = Fixture::run("3\n3002\n0\n");
        let ids: Vec<i64> = fixture.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3001, 3003, 3004, 3005]);
        assert!(fixture.output().contains("Book deleted successfully."));
    }

    #[test]
    fn test_delete_unknown_id() {
        let fixture = Fixture::run("3\n4242\n0\n");
        assert_eq!(fixture.books(), seed_books());
        assert!(fixture
            .output()
            .contains("Error: No book with this ID exists. Please try again."));
    }

    #[test]
    fn test_search_books() {
        let out = Fixture::run("4\nLewis\n0\n").output();
        assert!(out.contains("\nSearch Results:\n"));
        assert!(out.contains("ID: 3003, Title: The Lion, the Witch and the Wardrobe"));
        assert!(out.contains("ID: 3005, Title: Alice in Wonderland"));
        assert!(!out.contains("ID: 3001, Title"));
    }

    #[test]
    fn test_search_no_match() {
        let out = Fixture::run("4\nTolstoy\n0\n").output();
        assert!(out.contains("No books found matching the search term."));
    }

    #[test]
    fn test_search_requires_term() {
        let out = Fixture::run("4\n\nback\n0\n").output();
        assert!(out.contains("Error: Search term cannot be empty. Please try again."));
        assert!(!out.contains("Search Results:"));
    }

    #[test]
    fn test_empty_catalog_message() {
        let out = Fixture::run("3\n3001\n3\n3002\n3\n3003\n3\n3004\n3\n3005\n5\n0\n").output();
        assert!(out.ends_with(&format!(
            "No books found in the database.\n{MENU}\nEnter your choice: Exiting the program.\n"
        )));
    }

    #[test]
    fn test_storage_faults_do_not_stop_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        // Without initialize() there is no book table
        let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
        let input = "5\n4\nLewis\n1\n3006\nDune\nFrank Herbert\n1\n0\n";
        let mut session = Session::new(db, Cursor::new(input.as_bytes().to_vec()), Vec::new());
        session.run().unwrap();

        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.contains("Database error: no such table: book"));
        assert!(!out.contains("Book added successfully."));
        assert!(out.contains("Exiting the program."));
    }
}
