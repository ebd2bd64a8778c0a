//! lifeos-common - Book and note data model shared by every LifeOS crate
//!
//! Pure data: no UI, no I/O. Records arriving from a data source are
//! validated here before anything downstream sees them.

mod book;
mod error;
mod note;
mod progress;
mod rating;
mod record;

pub use book::{Book, READING_STATUS};
pub use error::BookError;
pub use note::Note;
pub use progress::Progress;
pub use rating::{Rating, MAX_RATING};
pub use record::{parse_date, BookRecord, NoteRecord, DATE_FORMAT};
