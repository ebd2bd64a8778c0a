//! Books panel state store

use crate::display_types::{BookPanelModel, DEFAULT_NOTE_DATE_FORMAT};
use dioxus::prelude::*;
use lifeos_common::Book;

/// State for the books panel
#[derive(Clone, Debug, PartialEq, Store)]
pub struct BooksState {
    /// All books supplied by the provider, in display order
    pub books: Vec<Book>,
    /// strftime pattern for note dates
    pub date_format: String,
}

impl Default for BooksState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            date_format: DEFAULT_NOTE_DATE_FORMAT.to_string(),
        }
    }
}

impl BooksState {
    pub fn new(books: Vec<Book>, date_format: impl Into<String>) -> Self {
        Self {
            books,
            date_format: date_format.into(),
        }
    }

    /// The first book, if any
    pub fn selected_book(&self) -> Option<&Book> {
        self.books.first()
    }

    pub fn panel_model(&self) -> BookPanelModel {
        BookPanelModel::from_selected(self.selected_book(), &self.date_format)
    }
}
