use lifeos_common::Book;
use lifeos_core::ActionDispatcher;
use std::sync::Arc;

/// Everything the UI needs from startup, provided as root context
#[derive(Clone)]
pub struct AppContext {
    pub books: Vec<Book>,
    pub date_format: String,
    /// Receives the panel's add-note and add-book actions
    pub dispatcher: Arc<dyn ActionDispatcher + Send + Sync>,
}
