//! Display types for the books panel
//!
//! A [`Book`] is turned into these once per render, so the components only
//! lay out strings and flags. Every rendering decision (which blocks appear,
//! label text, star counts, tag prefixes) is made here and unit tested.

use crate::components::utils::{capitalize_words, format_date};
use lifeos_common::{Book, Note, Progress, Rating, MAX_RATING};

/// Note date format used when none is configured (US short date)
pub const DEFAULT_NOTE_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// What the books panel shows
#[derive(Clone, Debug, PartialEq)]
pub enum BookPanelModel {
    /// No book selected
    Empty,
    Detail(BookDetailDisplay),
}

impl BookPanelModel {
    pub fn from_selected(book: Option<&Book>, date_format: &str) -> Self {
        match book {
            Some(book) => BookPanelModel::Detail(BookDetailDisplay::from_book(book, date_format)),
            None => BookPanelModel::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BookPanelModel::Empty)
    }

    pub fn detail(&self) -> Option<&BookDetailDisplay> {
        match self {
            BookPanelModel::Detail(detail) => Some(detail),
            BookPanelModel::Empty => None,
        }
    }
}

/// Reading progress bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressDisplay {
    pub percent: u8,
    /// e.g. "45%"
    pub label: String,
    /// CSS width of the fill, e.g. "45%"
    pub fill_width: String,
}

impl ProgressDisplay {
    pub fn new(progress: Progress) -> Self {
        let percent = progress.percent().min(Progress::MAX);
        Self {
            percent,
            label: format!("{percent}%"),
            fill_width: format!("{percent}%"),
        }
    }
}

/// One unit of the rating indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarUnit {
    Filled,
    Unfilled,
}

/// Five units, left to right: `rating` filled then the rest unfilled.
pub fn star_units(rating: Rating) -> Vec<StarUnit> {
    (0..MAX_RATING)
        .map(|i| {
            if i < rating.stars() {
                StarUnit::Filled
            } else {
                StarUnit::Unfilled
            }
        })
        .collect()
}

/// Note card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteDisplay {
    pub id: i64,
    pub title: String,
    pub date_label: String,
    pub content: String,
    /// Hash-prefixed badges, e.g. "#DRY"
    pub tags: Vec<String>,
}

impl NoteDisplay {
    pub fn from_note(note: &Note, date_format: &str) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            date_label: format_date(note.date, date_format),
            content: note.content.clone(),
            tags: note.tags.iter().map(|t| format!("#{t}")).collect(),
        }
    }
}

/// Everything the detail view renders for one book
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDetailDisplay {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub format: String,
    pub pages: u32,
    pub published_year: i32,
    pub genres: Vec<String>,
    pub synopsis: String,
    /// Present only while the book's status is exactly "reading"
    pub progress: Option<ProgressDisplay>,
    pub notes: Vec<NoteDisplay>,
    pub isbn: String,
    /// Capitalized status, display only
    pub status_label: String,
    /// Present only for rated books
    pub rating: Option<Vec<StarUnit>>,
}

impl BookDetailDisplay {
    pub fn from_book(book: &Book, date_format: &str) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            format: book.format.clone(),
            pages: book.pages,
            published_year: book.published_year(),
            genres: book.genres.clone(),
            synopsis: book.synopsis.clone(),
            progress: book
                .is_reading()
                .then(|| ProgressDisplay::new(book.progress)),
            notes: book
                .notes
                .iter()
                .map(|n| NoteDisplay::from_note(n, date_format))
                .collect(),
            isbn: book.isbn.clone(),
            status_label: capitalize_words(&book.status),
            rating: book.rating.is_rated().then(|| star_units(book.rating)),
        }
    }

    pub fn filled_stars(&self) -> usize {
        self.count_stars(StarUnit::Filled)
    }

    pub fn unfilled_stars(&self) -> usize {
        self.count_stars(StarUnit::Unfilled)
    }

    fn count_stars(&self, unit: StarUnit) -> usize {
        self.rating
            .as_ref()
            .map_or(0, |stars| stars.iter().filter(|s| **s == unit).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn note(id: i64, title: &str, tags: &[&str]) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: format!("{title} body"),
            date: NaiveDate::from_ymd_opt(2025, 8, 17 + id as u32).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn book(status: &str, progress: i64, rating: i64, notes: Vec<Note>) -> Book {
        Book {
            id: 1,
            title: "The Pragmatic Programmer".into(),
            author: "David Thomas, Andrew Hunt".into(),
            format: "Paperback".into(),
            pages: 352,
            publish_date: NaiveDate::from_ymd_opt(1999, 10, 20).unwrap(),
            isbn: "978-0201616224".into(),
            genres: vec!["Programming".into(), "Software Development".into()],
            synopsis: "Straight from the programming trenches.".into(),
            cover: "/placeholder-book.jpg".into(),
            status: status.into(),
            progress: Progress::new(progress).unwrap(),
            rating: Rating::new(rating).unwrap(),
            notes,
        }
    }

    fn detail(book: &Book) -> BookDetailDisplay {
        BookDetailDisplay::from_book(book, DEFAULT_NOTE_DATE_FORMAT)
    }

    #[test]
    fn test_no_book_is_empty_state() {
        let model = BookPanelModel::from_selected(None, DEFAULT_NOTE_DATE_FORMAT);
        assert!(model.is_empty());
        assert!(model.detail().is_none());
    }

    #[test]
    fn test_book_is_detail() {
        let b = book("reading", 45, 5, vec![]);
        let model = BookPanelModel::from_selected(Some(&b), DEFAULT_NOTE_DATE_FORMAT);
        assert!(!model.is_empty());
        assert_eq!(model.detail().unwrap().title, "The Pragmatic Programmer");
    }

    #[test]
    fn test_overview_fields() {
        let d = detail(&book("reading", 45, 5, vec![]));
        assert_eq!(d.format, "Paperback");
        assert_eq!(d.pages, 352);
        assert_eq!(d.published_year, 1999);
        assert_eq!(d.genres, vec!["Programming", "Software Development"]);
    }

    #[test]
    fn test_progress_hidden_unless_reading() {
        for status in ["finished", "Reading", "want-to-read", ""] {
            for progress in [0, 45, 100] {
                assert!(detail(&book(status, progress, 0, vec![])).progress.is_none());
            }
        }
    }

    #[test]
    fn test_progress_shown_while_reading() {
        for progress in [0, 1, 45, 99, 100] {
            let p = detail(&book("reading", progress, 0, vec![])).progress.unwrap();
            assert_eq!(i64::from(p.percent), progress);
            assert_eq!(p.label, format!("{progress}%"));
            assert_eq!(p.fill_width, format!("{progress}%"));
        }
    }

    #[test]
    fn test_clamped_progress_never_overflows() {
        let p = ProgressDisplay::new(Progress::clamped(180));
        assert_eq!(p.fill_width, "100%");
    }

    #[test]
    fn test_unrated_has_no_rating_block() {
        let d = detail(&book("reading", 45, 0, vec![]));
        assert!(d.rating.is_none());
        assert_eq!(d.filled_stars(), 0);
    }

    #[test]
    fn test_rating_units_in_order() {
        for rating in 1..=5u8 {
            let d = detail(&book("finished", 0, i64::from(rating), vec![]));
            let stars = d.rating.clone().unwrap();
            assert_eq!(stars.len(), 5);
            assert_eq!(d.filled_stars(), rating as usize);
            assert_eq!(d.unfilled_stars(), 5 - rating as usize);
            let first_unfilled = stars
                .iter()
                .position(|s| *s == StarUnit::Unfilled)
                .unwrap_or(5);
            assert_eq!(first_unfilled, rating as usize);
        }
    }

    #[test]
    fn test_no_notes() {
        assert!(detail(&book("reading", 45, 5, vec![])).notes.is_empty());
    }

    #[test]
    fn test_notes_and_tags_keep_order() {
        let notes = vec![
            note(2, "Second", &["b", "a", "b"]),
            note(1, "First", &["Zeta", "alpha"]),
        ];
        let d = detail(&book("reading", 45, 5, notes));
        let titles: Vec<_> = d.notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(d.notes[0].tags, vec!["#b", "#a", "#b"]);
        assert_eq!(d.notes[1].tags, vec!["#Zeta", "#alpha"]);
    }

    #[test]
    fn test_note_date_label() {
        let d = detail(&book("reading", 45, 5, vec![note(1, "A", &[])]));
        assert_eq!(d.notes[0].date_label, "8/18/2025");

        let iso = BookDetailDisplay::from_book(&book("reading", 45, 5, vec![note(1, "A", &[])]), "%Y-%m-%d");
        assert_eq!(iso.notes[0].date_label, "2025-08-18");
    }

    #[test]
    fn test_status_label_capitalized_source_unchanged() {
        let b = book("reading", 45, 5, vec![]);
        assert_eq!(detail(&b).status_label, "Reading");
        assert_eq!(b.status, "reading");
    }

    #[test]
    fn test_pragmatic_programmer_scenario() {
        let b = book(
            "reading",
            45,
            5,
            vec![
                note(1, "Chapter 2 Insights", &["DRY", "best-practices"]),
                note(2, "Orthogonality Notes", &["architecture", "design"]),
            ],
        );
        let d = detail(&b);

        let progress = d.progress.clone().unwrap();
        assert_eq!(progress.label, "45%");
        assert_eq!(progress.fill_width, "45%");
        assert_eq!(d.filled_stars(), 5);
        assert_eq!(d.unfilled_stars(), 0);
        assert_eq!(d.notes.len(), 2);
        assert_eq!(d.notes[0].title, "Chapter 2 Insights");
        assert_eq!(d.notes[0].tags, vec!["#DRY", "#best-practices"]);
        assert_eq!(d.notes[1].title, "Orthogonality Notes");
        assert_eq!(d.notes[1].tags, vec!["#architecture", "#design"]);
    }
}
