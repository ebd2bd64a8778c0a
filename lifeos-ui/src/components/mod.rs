//! Shared UI components

pub mod activity;
pub mod books;
pub mod button;
pub mod icons;
pub mod utils;

pub use books::{BooksPanel, BooksPanelView};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::{
    BookOpenIcon, CalendarIcon, ClockIcon, FileTextIcon, PenLineIcon, PlusIcon, StarIcon,
    TagIcon, UserIcon,
};
pub use utils::{capitalize_words, format_date};
