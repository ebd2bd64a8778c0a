use clap::Parser;
use lifeos_common::Book;
use lifeos_core::config::Config;
use lifeos_core::{BookProvider, StaticBookProvider, TracingDispatcher};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

mod ui;

pub use ui::AppContext;

/// LifeOS books panel
#[derive(Parser, Debug)]
#[command(name = "lifeos")]
struct Args {
    /// Book file (JSON or YAML) to show instead of the built-in sample.
    #[arg(long, env = "LIFEOS_BOOKS_PATH")]
    books: Option<PathBuf>,

    /// strftime pattern for note dates.
    #[arg(long)]
    date_format: Option<String>,

    /// Tracing filter, e.g. "lifeos_core=debug". RUST_LOG takes precedence.
    #[arg(long)]
    log: Option<String>,

    /// Start with no books (empty state).
    #[arg(long)]
    empty: bool,
}

impl Args {
    /// Command-line values win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(books) = &self.books {
            config.books_path = Some(books.clone());
        }
        if let Some(date_format) = &self.date_format {
            config.date_format = date_format.clone();
        }
        if let Some(log) = &self.log {
            config.log_filter = log.clone();
        }
    }
}

fn configure_logging(default_filter: &str) {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Build the book list the panel starts with
fn create_books(config: &Config, empty: bool) -> Result<Vec<Book>, lifeos_core::ProviderError> {
    let provider = if empty {
        StaticBookProvider::default()
    } else if let Some(path) = &config.books_path {
        StaticBookProvider::from_path(path)?
    } else {
        info!("No book file configured, using sample library");
        StaticBookProvider::sample()
    };
    Ok(provider.all_books())
}

fn main() {
    let args = Args::parse();
    let (mut config, config_error) = Config::load();
    args.apply(&mut config);
    configure_logging(&config.log_filter);
    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    debug!(?config, "Config loaded");

    let books = match create_books(&config, args.empty) {
        Ok(books) => books,
        Err(e) => {
            error!("Failed to load books: {}", e);
            std::process::exit(1);
        }
    };
    info!("Starting UI with {} books", books.len());

    ui::launch_app(AppContext {
        books,
        date_format: config.date_format.clone(),
        dispatcher: Arc::new(TracingDispatcher),
    });
    info!("UI quit");
}
