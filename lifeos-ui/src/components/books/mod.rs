//! Books panel components

mod book_info;
mod empty_state;
mod notes;
mod overview;
mod reading_progress;
mod view;

pub use book_info::{BookInfo, RatingStars};
pub use empty_state::NoBookSelected;
pub use notes::{NoteCard, NotesSection};
pub use overview::BookOverview;
pub use reading_progress::ReadingProgress;
pub use view::{BooksPanel, BooksPanelView};
