//! Wire shape of book data as supplied by a data source
//!
//! Field names follow the camelCase JSON the panel was originally fed
//! (`publishDate`, `type`, `genre`). Converting a record into a [`Book`]
//! is the validation boundary.

use crate::{Book, BookError, Note, Progress, Rating};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Calendar date format used by records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "type")]
    pub format: String,
    pub pages: i64,
    pub publish_date: String,
    pub isbn: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub cover: String,
    pub status: String,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub notes: Vec<NoteRecord>,
}

/// Parse a `YYYY-MM-DD` calendar date, naming `field` on failure.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, BookError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| BookError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<NoteRecord> for Note {
    type Error = BookError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        Ok(Note {
            id: record.id,
            title: record.title,
            content: record.content,
            date: parse_date("note", &record.date)?,
            tags: record.tags,
        })
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = BookError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let pages = u32::try_from(record.pages)
            .ok()
            .filter(|p| *p > 0)
            .ok_or(BookError::InvalidPageCount(record.pages))?;

        let mut seen = HashSet::new();
        let mut notes = Vec::with_capacity(record.notes.len());
        for note in record.notes {
            if !seen.insert(note.id) {
                return Err(BookError::DuplicateNoteId(note.id));
            }
            notes.push(Note::try_from(note)?);
        }

        Ok(Book {
            id: record.id,
            title: record.title,
            author: record.author,
            format: record.format,
            pages,
            publish_date: parse_date("publish", &record.publish_date)?,
            isbn: record.isbn,
            genres: record.genre,
            synopsis: record.synopsis,
            cover: record.cover,
            status: record.status,
            progress: Progress::new(record.progress)?,
            rating: Rating::new(record.rating)?,
            notes,
        })
    }
}
