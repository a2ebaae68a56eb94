//! Contact list types.
//!
//! `GET /api/contacts` returns a flat list of strings. The dashboard loads
//! it once at start-up and freezes it into a [`ContactBook`], a cheap to
//! clone read-only snapshot handed to whoever needs to search it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/contacts`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactList {
    /// Phone numbers or display names, in service order.
    pub contacts: Vec<String>,
}

/// Immutable, shareable snapshot of the contact list.
///
/// Order is preserved exactly as loaded; searches never re-rank.
///
/// # Examples
///
/// ```
/// use simdash_models::ContactBook;
///
/// let book = ContactBook::new(vec!["+15550001".into(), "Alice".into()]);
/// let hits: Vec<&str> = book.search("ALI", 5).collect();
/// assert_eq!(hits, vec!["Alice"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactBook {
    entries: Arc<[String]>,
}

impl ContactBook {
    /// Freeze a list of contacts.
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// An empty book (before the one-shot load completes, or if it fails).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All contacts in load order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Case-insensitive substring search, first `limit` hits in load order.
    ///
    /// An empty `query` matches nothing.
    pub fn search<'a>(&'a self, query: &str, limit: usize) -> impl Iterator<Item = &'a str> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |c| !needle.is_empty() && c.to_lowercase().contains(&needle))
            .map(String::as_str)
            .take(limit)
    }
}

impl From<ContactList> for ContactBook {
    fn from(list: ContactList) -> Self {
        Self::new(list.contacts)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> ContactBook {
        ContactBook::new(
            ["+15550100", "+15550101", "Bob", "+44 20 5550 0199", "bobby", "+15550102"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    #[test]
    fn search_is_case_insensitive() {
        let book = book();
        let hits: Vec<_> = book.search("BOB", 5).collect();
        assert_eq!(hits, vec!["Bob", "bobby"]);
    }

    #[test]
    fn search_keeps_load_order_and_limit() {
        let book = book();
        let hits: Vec<_> = book.search("555", 3).collect();
        assert_eq!(hits, vec!["+15550100", "+15550101", "+44 20 5550 0199"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert_eq!(book().search("", 5).count(), 0);
    }

    #[test]
    fn clones_share_storage() {
        let a = book();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.entries, &b.entries));
    }

    #[test]
    fn from_contact_list() {
        let list: ContactList = serde_json::from_str(r#"{"contacts":["x","y"]}"#).unwrap();
        let book = ContactBook::from(list);
        assert_eq!(book.len(), 2);
        assert_eq!(book.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
