//! Rendered-output tests for the books panel.
//!
//! The panel is mounted in a headless `VirtualDom`, rendered to HTML with
//! `dioxus-ssr`, and clicked through the runtime's event dispatch.

use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_core::{ElementId, Event, Mutation};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use lifeos_common::{Book, Note, Progress, Rating};
use lifeos_ui::display_types::{BookPanelModel, DEFAULT_NOTE_DATE_FORMAT};
use lifeos_ui::BooksPanelView;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

const FILLED_STAR: &str = "w-3 h-3 text-yellow-400";
const UNFILLED_STAR: &str = "w-3 h-3 text-[#454545]";

/// Callback log shared between the test and the mounted panel
#[derive(Clone, Default)]
struct Calls(Rc<RefCell<Vec<String>>>);

impl Calls {
    fn recorded(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl PartialEq for Calls {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
fn Harness(model: BookPanelModel, calls: Calls) -> Element {
    let note_calls = calls.clone();
    let book_calls = calls.clone();

    rsx! {
        BooksPanelView {
            model,
            on_add_note: move |book_id: i64| note_calls.0.borrow_mut().push(format!("add-note:{book_id}")),
            on_add_book: move |_| book_calls.0.borrow_mut().push("add-book".to_string()),
        }
    }
}

fn note(id: i64, title: &str, tags: &[&str]) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: format!("{title} body"),
        date: NaiveDate::from_ymd_opt(2025, 8, 17).unwrap(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn book(status: &str, progress: i64, rating: i64, notes: Vec<Note>) -> Book {
    Book {
        id: 7,
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

fn model_for(book: Option<&Book>) -> BookPanelModel {
    BookPanelModel::from_selected(book, DEFAULT_NOTE_DATE_FORMAT)
}

fn mount(model: BookPanelModel, calls: Calls) -> VirtualDom {
    VirtualDom::new_with_props(Harness, HarnessProps { model, calls })
}

fn render(model: BookPanelModel) -> String {
    let mut dom = mount(model, Calls::default());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Ids of every element that registered a click listener during the first build
fn click_targets(dom: &mut VirtualDom) -> Vec<ElementId> {
    dom.rebuild_to_vec()
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(id),
            _ => None,
        })
        .collect()
}

fn click(dom: &VirtualDom, target: ElementId) {
    let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, target);
}

#[test]
fn test_empty_model_renders_empty_state() {
    let html = render(model_for(None));

    assert!(html.contains("data-testid=\"books-panel-empty\""));
    assert!(html.contains("No books selected"));
    assert!(html.contains("data-testid=\"add-book\""));
    assert!(!html.contains("data-testid=\"books-panel\""));
    assert!(!html.contains("Synopsis"));
    assert!(!html.contains("data-testid=\"add-note\""));
}

#[test]
fn test_progress_bar_only_while_reading() {
    let reading = render(model_for(Some(&book("reading", 45, 3, vec![]))));
    assert!(reading.contains("data-testid=\"reading-progress\""));
    assert!(reading.contains("45%"));
    assert!(reading.contains("width: 45%"));

    for status in ["completed", "want-to-read", "Reading"] {
        let html = render(model_for(Some(&book(status, 45, 3, vec![]))));
        assert!(
            !html.contains("data-testid=\"reading-progress\""),
            "progress shown for status {status}"
        );
        assert!(!html.contains("width: 45%"));
    }
}

#[test]
fn test_rating_renders_filled_then_unfilled_stars() {
    for rating in 1..=5 {
        let html = render(model_for(Some(&book("reading", 45, rating, vec![]))));
        let filled = html.matches(FILLED_STAR).count();
        let unfilled = html.matches(UNFILLED_STAR).count();
        assert_eq!(filled, rating as usize, "rating {rating}");
        assert_eq!(unfilled, 5 - rating as usize, "rating {rating}");

        if let (Some(last_filled), Some(first_unfilled)) =
            (html.rfind(FILLED_STAR), html.find(UNFILLED_STAR))
        {
            assert!(last_filled < first_unfilled);
        }
    }
}

#[test]
fn test_unrated_book_has_no_rating_row() {
    let html = render(model_for(Some(&book("reading", 45, 0, vec![]))));
    assert!(!html.contains("My Rating:"));
    assert!(!html.contains("data-testid=\"rating\""));
    assert_eq!(html.matches(UNFILLED_STAR).count(), 0);
}

#[test]
fn test_no_notes_shows_placeholder_instead_of_cards() {
    let html = render(model_for(Some(&book("reading", 45, 5, vec![]))));
    assert!(html.contains("No notes yet"));
    assert!(html.contains("Add your first reading note to get started"));
    assert!(!html.contains("body</p>"));
}

#[test]
fn test_notes_and_tags_keep_their_order() {
    let notes = vec![
        note(2, "Second written first", &["DRY", "best-practices", "automation"]),
        note(1, "Earlier note", &["debugging"]),
    ];
    let html = render(model_for(Some(&book("reading", 45, 5, notes))));

    assert!(!html.contains("No notes yet"));
    let positions: Vec<usize> = [
        "Second written first",
        "#DRY",
        "#best-practices",
        "#automation",
        "Earlier note",
        "#debugging",
    ]
    .iter()
    .map(|text| html.find(text).unwrap_or_else(|| panic!("missing {text}")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_add_note_click_calls_back_once_with_book_id() {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    let calls = Calls::default();
    let mut dom = mount(model_for(Some(&book("reading", 45, 5, vec![]))), calls.clone());
    let targets = click_targets(&mut dom);
    // The Add Note button is the only clickable element in the detail view
    assert_eq!(targets.len(), 1);

    let before = dioxus_ssr::render(&dom);
    click(&dom, targets[0]);
    assert_eq!(calls.recorded(), vec!["add-note:7".to_string()]);

    click(&dom, targets[0]);
    assert_eq!(calls.recorded().len(), 2);
    assert_eq!(dioxus_ssr::render(&dom), before);
}

#[test]
fn test_add_book_click_on_empty_panel() {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    let calls = Calls::default();
    let mut dom = mount(model_for(None), calls.clone());
    let targets = click_targets(&mut dom);
    assert_eq!(targets.len(), 1);

    click(&dom, targets[0]);
    assert_eq!(calls.recorded(), vec!["add-book".to_string()]);
}
