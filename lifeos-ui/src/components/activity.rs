//! Activity panels mounted by the navigation shell
//!
//! Aggregation only. Sibling panels (agents, health, trash, debug) live
//! outside this crate.

pub use super::books::{BooksPanel, BooksPanelView};
