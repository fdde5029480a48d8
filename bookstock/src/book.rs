//! The book record stored in the catalog.

use std::fmt;

use crate::error::{Error, Result};

/// One row of the catalog table.
///
/// The id is supplied by the operator and never generated. Title and
/// author are required; the quantity is unsigned so it can never go
/// negative, and is capped at [`MAX_QTY`] so it fits the `INTEGER` column.
///
/// # Examples
///
/// ```
/// use bookstock::Book;
///
/// let book = Book::new(3006, "Dune", "Frank Herbert", 10).unwrap();
/// assert_eq!(
///     book.to_string(),
///     "ID: 3006, Title: Dune, Author: Frank Herbert, Quantity: 10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Primary key.
    pub id: i64,
    /// Title, unique across the catalog.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Copies in stock.
    pub qty: u64,
}

/// Largest quantity the `qty INTEGER` column can hold.
#[allow(clippy::cast_sign_loss)]
pub const MAX_QTY: u64 = i64::MAX as u64;

impl Book {
    /// Creates a book after checking that title and author are not blank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the title or author is empty or
    /// consists only of whitespace, or if `qty` exceeds [`MAX_QTY`].
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        qty: u64,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();
        require_text("title", &title)?;
        require_text("author", &author)?;
        if qty > MAX_QTY {
            return Err(Error::Validation {
                field: "qty".into(),
                message: format!("must not exceed {MAX_QTY}"),
            });
        }
        Ok(Self {
            id,
            title,
            author,
            qty,
        })
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "must not be empty".into(),
        });
    }
    Ok(())
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Quantity: {}",
            self.id, self.title, self.author, self.qty
        )
    }
}

/// Sample books inserted on first initialization, as
/// `(id, title, author, qty)`.
pub const SEED_BOOKS: [(i64, &str, &str, u64); 5] = [
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (
        3002,
        "Harry Potter and the Philosopher's Stone",
        "J.K. Rowling",
        40,
    ),
    (3003, "The Lion, the Witch and the Wardrobe", "C. S. Lewis", 25),
    (3004, "The Lord of the Rings", "J.R.R. Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll", 12),
];

/// Returns the seed books as [`Book`] values.
#[must_use]
pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|&(id, title, author, qty)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            qty,
        })
        .collect()
}
