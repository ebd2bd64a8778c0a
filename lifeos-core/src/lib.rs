//! lifeos-core - Book data sourcing, panel actions and configuration

pub mod books;
pub mod config;
pub mod notes;

pub use books::{load_books, parse_books, BookProvider, FixtureFormat, ProviderError, StaticBookProvider};
pub use notes::{ActionDispatcher, NoteDraft, NoteError, NoteService, PanelAction, TracingDispatcher};
