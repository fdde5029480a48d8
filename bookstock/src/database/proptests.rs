//! Property-based tests for catalog operations.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

use super::test_util::create_test_database;
use crate::Book;

/// Titles and authors drawn from a small alphabet so substrings collide often.
fn text() -> impl Strategy<Value = String> {
    "[a-cA-C ]{1,8}".prop_filter("must not be blank", |s| !s.trim().is_empty())
}

/// A set of books with distinct ids and distinct titles.
fn catalog() -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec((0i64..500, text(), text(), 0u64..1000), 0..12).prop_map(|rows| {
        let mut by_id = BTreeMap::new();
        let mut titles = HashSet::new();
        for (id, title, author, qty) in rows {
            if !by_id.contains_key(&id) && titles.insert(title.clone()) {
                by_id.insert(id, Book { id, title, author, qty });
            }
        }
        by_id.into_values().collect()
    })
}

fn contains_ignoring_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Everything added can be listed back, in id order
    #[test]
    fn added_books_are_listed(books in catalog()) {
        let mut db = create_test_database();
        db.initialize().unwrap();
        for id in 3001..=3005 {
            db.delete(id).unwrap();
        }

        for book in &books {
            db.add(book).unwrap();
            prop_assert!(db.exists(book.id).unwrap());
        }
        prop_assert_eq!(db.list_all().unwrap(), books);
    }

    // A second add with a taken id or title never changes the catalog
    #[test]
    fn duplicate_add_is_rejected(books in catalog(), pick in any::<prop::sample::Index>(), qty in 0u64..10) {
        let mut db = create_test_database();
        db.initialize().unwrap();
        for book in &books {
            db.add(book).unwrap();
        }
        let before = db.list_all().unwrap();
        let existing = &before[pick.index(before.len())];

        let same_id = Book { id: existing.id, title: "zz unique".into(), author: "x".into(), qty };
        prop_assert!(db.add(&same_id).is_err());

        let same_title = Book { id: 100_000, title: existing.title.clone(), author: "x".into(), qty };
        prop_assert!(db.add(&same_title).is_err());

        prop_assert_eq!(db.list_all().unwrap(), before);
    }

    // Search returns exactly the books containing the term somewhere
    #[test]
    fn search_matches_substring(books in catalog(), term in "[a-cA-C0-9]{1,3}") {
        let mut db = create_test_database();
        db.initialize().unwrap();
        for id in 3001..=3005 {
            db.delete(id).unwrap();
        }
        for book in &books {
            db.add(book).unwrap();
        }

        let expected: Vec<Book> = books
            .iter()
            .filter(|b| {
                b.id.to_string().contains(&term)
                    || contains_ignoring_ascii_case(&b.title, &term)
                    || contains_ignoring_ascii_case(&b.author, &term)
            })
            .cloned()
            .collect();

        prop_assert_eq!(db.search(&term).unwrap(), expected);
    }
}
