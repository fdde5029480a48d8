//! SQL statements for the book catalog.
//!
//! Every statement binds its values as parameters.

/// SQL statement to create the book table.
///
/// Both the id and the title are unique, so inserting a duplicate of
/// either fails with a constraint violation.
pub const CREATE_BOOK_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS book (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL UNIQUE,
        author TEXT NOT NULL,
        qty INTEGER NOT NULL
    )";

/// Inserts a seed book unless its id or title is already present.
pub const INSERT_SEED_BOOK: &str =
    "INSERT OR IGNORE INTO book (id, title, author, qty) VALUES (?1, ?2, ?3, ?4)";

pub const INSERT_BOOK: &str = "INSERT INTO book (id, title, author, qty) VALUES (?1, ?2, ?3, ?4)";

pub const UPDATE_BOOK: &str = "UPDATE book SET title = ?1, author = ?2, qty = ?3 WHERE id = ?4";

pub const DELETE_BOOK: &str = "DELETE FROM book WHERE id = ?1";

pub const SELECT_ALL_BOOKS: &str = "SELECT id, title, author, qty FROM book ORDER BY id";

pub const SELECT_BOOK_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM book WHERE id = ?1)";

/// Substring search over id, title and author.
///
/// The single parameter is a `LIKE` pattern escaped with `\`.
pub const SEARCH_BOOKS: &str = r"
    SELECT id, title, author, qty
    FROM book
    WHERE CAST(id AS TEXT) LIKE ?1 ESCAPE '\'
       OR title LIKE ?1 ESCAPE '\'
       OR author LIKE ?1 ESCAPE '\'
    ORDER BY id
";
