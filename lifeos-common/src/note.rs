use chrono::NaiveDate;

/// A reading note attached to a book
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// Unique within the parent book
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    /// Display order, duplicates allowed
    pub tags: Vec<String>,
}
