use crate::{Note, Progress, Rating};
use chrono::{Datelike, NaiveDate};

/// The only status label with special rendering (the progress bar)
pub const READING_STATUS: &str = "reading";

/// Validated, read-only snapshot of a catalogued book
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Format label, e.g. "Paperback"
    pub format: String,
    pub pages: u32,
    pub publish_date: NaiveDate,
    pub isbn: String,
    pub genres: Vec<String>,
    pub synopsis: String,
    /// Opaque cover reference, never resolved
    pub cover: String,
    pub status: String,
    pub progress: Progress,
    pub rating: Rating,
    /// Insertion order is display order
    pub notes: Vec<Note>,
}

impl Book {
    /// Exact, case-sensitive match against "reading".
    pub fn is_reading(&self) -> bool {
        self.status == READING_STATUS
    }

    pub fn published_year(&self) -> i32 {
        self.publish_date.year()
    }

    /// Id for the next appended note: one past the largest existing id.
    pub fn next_note_id(&self) -> i64 {
        self.notes.iter().map(|n| n.id).max().map_or(1, |max| max + 1)
    }
}
