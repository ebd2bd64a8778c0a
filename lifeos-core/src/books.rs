//! Book providers
//!
//! The panel never reads data sources directly. It asks a [`BookProvider`]
//! for the full list and for the currently selected book, which is simply
//! the first book in the list.

use lifeos_common::{Book, BookError, BookRecord};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Embedded sample library (compiled into the binary)
const SAMPLE_JSON: &str = include_str!("../fixtures/books.json");

/// Errors loading book data
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid book {book_id}: {source}")]
    InvalidBook {
        book_id: i64,
        #[source]
        source: BookError,
    },
}

/// Query interface the panel reads from
pub trait BookProvider {
    /// All books, in display order.
    fn all_books(&self) -> Vec<Book>;

    /// The currently selected book: the first of [`all_books`](Self::all_books).
    fn selected_book(&self) -> Option<Book> {
        self.all_books().into_iter().next()
    }
}

/// Book file layout: `{ "books": [...] }`
#[derive(Debug, Deserialize)]
struct BookFile {
    #[serde(default)]
    books: Vec<BookRecord>,
}

/// Serialization format of a book file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// `.yaml` / `.yml` are YAML, anything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                FixtureFormat::Yaml
            }
            _ => FixtureFormat::Json,
        }
    }
}

/// Parse and validate every book in `contents`.
pub fn parse_books(contents: &str, format: FixtureFormat) -> Result<Vec<Book>, ProviderError> {
    let file: BookFile = match format {
        FixtureFormat::Json => serde_json::from_str(contents)?,
        FixtureFormat::Yaml => serde_yaml::from_str(contents)?,
    };

    file.books
        .into_iter()
        .map(|record| {
            let book_id = record.id;
            Book::try_from(record).map_err(|source| ProviderError::InvalidBook { book_id, source })
        })
        .collect()
}

/// Load books from a JSON or YAML file on disk.
pub fn load_books(path: &Path) -> Result<Vec<Book>, ProviderError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let books = parse_books(&contents, FixtureFormat::from_path(path))?;
    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

/// Provider over a fixed, in-memory list of books
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticBookProvider {
    books: Vec<Book>,
}

impl StaticBookProvider {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The built-in single-book library.
    pub fn sample() -> Self {
        let books = parse_books(SAMPLE_JSON, FixtureFormat::Json)
            .expect("Failed to parse embedded sample books");
        debug!("Using {} sample books", books.len());
        Self { books }
    }

    pub fn from_path(path: &Path) -> Result<Self, ProviderError> {
        Ok(Self::new(load_books(path)?))
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookProvider for StaticBookProvider {
    fn all_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn selected_book(&self) -> Option<Book> {
        self.books.first().cloned()
    }
}
