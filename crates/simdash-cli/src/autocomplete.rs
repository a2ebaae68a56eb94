//! Phone-number suggestions drawn from the contact snapshot.

use simdash_models::ContactBook;

pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Default)]
pub struct Autocomplete {
    book: ContactBook,
    suggestions: Vec<String>,
    visible: bool,
}

impl Autocomplete {
    /// Replaces the snapshot. Takes effect on the next edit.
    pub fn load(&mut self, book: ContactBook) {
        self.book = book;
    }

    pub fn contact_count(&self) -> usize {
        self.book.len()
    }

    /// Recomputes suggestions for the current phone field value.
    pub fn on_input(&mut self, value: &str) {
        self.suggestions = self
            .book
            .search(value, MAX_SUGGESTIONS)
            .map(str::to_owned)
            .collect();
        self.visible = !self.suggestions.is_empty();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The rows to draw; empty while hidden.
    pub fn suggestions(&self) -> &[String] {
        if self.visible {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// Picks a row, hiding the list. Returns the exact contact string.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let picked = self.suggestions().get(index).cloned()?;
        self.hide();
        Some(picked)
    }
}
