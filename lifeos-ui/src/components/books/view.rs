//! Books panel - main component
//!
//! `BooksPanel` reads the books store once and asks it for the display model;
//! `BooksPanelView` is the pure renderer and only sees the display model.

use super::book_info::BookInfo;
use super::empty_state::NoBookSelected;
use super::notes::NotesSection;
use super::overview::BookOverview;
use super::reading_progress::ReadingProgress;
use crate::components::icons::BookOpenIcon;
use crate::display_types::{BookDetailDisplay, BookPanelModel};
use crate::stores::books::BooksState;
use dioxus::prelude::*;

/// Books panel bound to the books store
#[component]
pub fn BooksPanel(
    state: ReadStore<BooksState>,
    /// Called with the selected book's id when "Add Note" is pressed
    on_add_note: EventHandler<i64>,
    on_add_book: EventHandler<()>,
) -> Element {
    let model = state.read().panel_model();

    rsx! {
        BooksPanelView { model, on_add_note, on_add_book }
    }
}

/// Books panel view - pure rendering, no data access
#[component]
pub fn BooksPanelView(
    model: BookPanelModel,
    on_add_note: EventHandler<i64>,
    on_add_book: EventHandler<()>,
) -> Element {
    match model {
        BookPanelModel::Empty => rsx! {
            div { class: "flex flex-col h-full", "data-testid": "books-panel-empty",
                PanelHeader { label: "BOOKS" }
                NoBookSelected { on_add_book }
            }
        },
        BookPanelModel::Detail(book) => rsx! {
            div { class: "flex flex-col h-full", "data-testid": "books-panel",
                PanelHeader { label: "BOOK DETAILS" }
                BookDetail { book, on_add_note }
            }
        },
    }
}

#[component]
fn PanelHeader(label: &'static str) -> Element {
    rsx! {
        div { class: "p-4 border-b border-[#454545]",
            h3 { class: "text-[#cccccc] font-medium mb-4 flex items-center gap-2",
                BookOpenIcon {}
                "{label}"
            }
        }
    }
}

/// Scrollable detail body, sections in fixed order
#[component]
fn BookDetail(book: BookDetailDisplay, on_add_note: EventHandler<i64>) -> Element {
    let book_id = book.id;

    rsx! {
        div { class: "flex-1 min-h-0 overflow-y-auto",
            div { class: "p-4 space-y-6",
                BookOverview {
                    title: book.title.clone(),
                    author: book.author.clone(),
                    format: book.format.clone(),
                    pages: book.pages,
                    published_year: book.published_year,
                    genres: book.genres.clone(),
                }

                div { class: "space-y-2",
                    h5 { class: "text-[#cccccc] font-medium text-sm", "Synopsis" }
                    p { class: "text-[#858585] text-sm leading-relaxed", "{book.synopsis}" }
                }

                if let Some(progress) = book.progress.clone() {
                    ReadingProgress { progress }
                }

                NotesSection {
                    notes: book.notes.clone(),
                    on_add_note: move |_| on_add_note.call(book_id),
                }

                BookInfo {
                    isbn: book.isbn.clone(),
                    status_label: book.status_label.clone(),
                    rating: book.rating.clone(),
                }
            }
        }
    }
}
