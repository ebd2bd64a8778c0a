//! Panel actions and note appending
//!
//! The panel only knows the shape of its commands. Whoever hosts it decides
//! what a [`PanelAction`] does; the default [`TracingDispatcher`] just traces.

use crate::books::BookProvider;
use chrono::{Local, NaiveDate};
use lifeos_common::{Book, Note};
use thiserror::Error;
use tracing::info;

/// Commands the books panel can emit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Open a note editor for the given book
    AddNote { book_id: i64 },
    /// Start adding a book (empty state call to action)
    AddBook,
}

/// Receives panel actions
pub trait ActionDispatcher {
    fn dispatch(&self, action: PanelAction);
}

/// Dispatcher that records each action in the trace log and changes nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDispatcher;

impl ActionDispatcher for TracingDispatcher {
    fn dispatch(&self, action: PanelAction) {
        match action {
            PanelAction::AddNote { book_id } => {
                info!(book_id, "Add note requested, note editor not implemented");
            }
            PanelAction::AddBook => {
                info!("Add book requested, book entry not implemented");
            }
        }
    }
}

/// Errors appending a note
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Book {0} not found")]
    BookNotFound(i64),
    #[error("Note title cannot be empty")]
    EmptyTitle,
}

/// Output of a note editor, before it has an id or a date
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// In-memory owner of book notes for a completed note workflow
#[derive(Clone, Debug, Default)]
pub struct NoteService {
    books: Vec<Book>,
}

impl NoteService {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Append a note dated `today` to a book's notes.
    ///
    /// The new note gets the book's next free id. Tags are trimmed and blank
    /// tags dropped; order and duplicates are kept.
    pub fn add_note(
        &mut self,
        book_id: i64,
        draft: NoteDraft,
        today: NaiveDate,
    ) -> Result<Note, NoteError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or(NoteError::BookNotFound(book_id))?;

        let note = Note {
            id: book.next_note_id(),
            title: title.to_string(),
            content: draft.content,
            date: today,
            tags: draft
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        };
        book.notes.push(note.clone());
        info!(book_id, note_id = note.id, "Note added");
        Ok(note)
    }

    /// [`add_note`](Self::add_note) dated with the local calendar day.
    pub fn add_note_today(&mut self, book_id: i64, draft: NoteDraft) -> Result<Note, NoteError> {
        self.add_note(book_id, draft, Local::now().date_naive())
    }
}

impl BookProvider for NoteService {
    fn all_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn selected_book(&self) -> Option<Book> {
        self.books.first().cloned()
    }
}
