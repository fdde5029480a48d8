//! Catalog operations over the `book` table.
//!
//! Each operation is a single statement, or a single transaction for the
//! seed batch, so it is committed by the time it returns.

use rusqlite::{params, Row};

use crate::book::{Book, MAX_QTY, SEED_BOOKS};
use crate::error::{Error, Result};

use super::connection::Database;
use super::schema::{
    CREATE_BOOK_TABLE, DELETE_BOOK, INSERT_BOOK, INSERT_SEED_BOOK, SEARCH_BOOKS,
    SELECT_ALL_BOOKS, SELECT_BOOK_EXISTS, UPDATE_BOOK,
};

/// Deserializes a book from a row of `id, title, author, qty`.
///
/// Any non-negative stored quantity is accepted.
fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    let qty: i64 = row.get(3)?;
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        qty: u64::try_from(qty).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(3, qty))?,
    })
}

/// Converts a quantity to the column's signed storage type.
fn qty_to_sql(qty: u64) -> Result<i64> {
    i64::try_from(qty).map_err(|_| Error::Validation {
        field: "qty".into(),
        message: format!("must not exceed {MAX_QTY}"),
    })
}

/// Builds a `LIKE` pattern that matches `term` literally anywhere.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl Database {
    /// Creates the `book` table if needed and inserts the seed books.
    ///
    /// Seed books whose id or title is already present are skipped, never
    /// overwritten, so calling this repeatedly is harmless.
    ///
    /// Returns how many seed books were actually inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be created or the seed
    /// transaction fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookstock::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/bookstock.db")).unwrap();
    /// let inserted = db.initialize().unwrap();
    /// println!("seeded {inserted} books");
    /// ```
    pub fn initialize(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(CREATE_BOOK_TABLE, [])?;

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(INSERT_SEED_BOOK)?;
            for (id, title, author, qty) in SEED_BOOKS {
                inserted += stmt.execute(params![id, title, author, qty_to_sql(qty)?])?;
            }
        }
        tx.commit()?;

        log::debug!("book table ready, {inserted} seed books inserted");
        Ok(inserted)
    }

    /// Returns every book ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails, for example because the table
    /// has not been created.
    pub fn list_all(&self) -> Result<Vec<Book>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_BOOKS)?;
        let books = stmt
            .query_map([], row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    /// Checks whether a book with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn exists(&self, id: i64) -> Result<bool> {
        let exists = self
            .conn
            .query_row(SELECT_BOOK_EXISTS, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    /// Inserts a new book.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or title is already taken; nothing is
    /// written in that case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookstock::database::{Database, DatabaseConfig};
    /// use bookstock::Book;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/bookstock.db")).unwrap();
    /// db.initialize().unwrap();
    ///
    /// let book = Book::new(3006, "Dune", "Frank Herbert", 10).unwrap();
    /// db.add(&book).unwrap();
    /// assert!(db.exists(3006).unwrap());
    /// ```
    pub fn add(&self, book: &Book) -> Result<()> {
        self.conn.execute(
            INSERT_BOOK,
            params![book.id, book.title, book.author, qty_to_sql(book.qty)?],
        )?;
        log::debug!("added book {}", book.id);
        Ok(())
    }

    /// Replaces the title, author and quantity of the book with `book.id`.
    ///
    /// Returns the number of rows changed. An id with no matching row
    /// changes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails, for example because the
    /// new title belongs to another book.
    pub fn update(&self, book: &Book) -> Result<usize> {
        let changed = self.conn.execute(
            UPDATE_BOOK,
            params![book.title, book.author, qty_to_sql(book.qty)?, book.id],
        )?;
        log::debug!("updated book {} ({changed} rows)", book.id);
        Ok(changed)
    }

    /// Removes the book with the given id.
    ///
    /// Returns the number of rows removed; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let removed = self.conn.execute(DELETE_BOOK, params![id])?;
        log::debug!("deleted book {id} ({removed} rows)");
        Ok(removed)
    }

    /// Finds books whose id, title or author contains `term`.
    ///
    /// The term is matched as a literal substring; `%` and `_` have no
    /// wildcard meaning. ASCII letters match case-insensitively, as with
    /// `SQLite`'s `LIKE`. No match yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search(&self, term: &str) -> Result<Vec<Book>> {
        let mut stmt = self.conn.prepare(SEARCH_BOOKS)?;
        let books = stmt
            .query_map(params![like_pattern(term)], row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        log::debug!("search for {term:?} matched {} books", books.len());
        Ok(books)
    }
}
