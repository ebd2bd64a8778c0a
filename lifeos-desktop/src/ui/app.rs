use crate::ui::AppContext;
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use lifeos_core::PanelAction;
use lifeos_ui::stores::BooksState;
use lifeos_ui::BooksPanel;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_background_color((0x1e, 0x1e, 0x1e, 0xff))
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("LifeOS Books")
        .with_decorations(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(480, 800))
}

pub fn launch_app(context: AppContext) {
    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}

#[component]
fn App() -> Element {
    let context = use_context::<AppContext>();
    let state = use_hook(|| {
        Store::new(BooksState::new(
            context.books.clone(),
            context.date_format.clone(),
        ))
    });

    let on_add_note = {
        let dispatcher = context.dispatcher.clone();
        move |book_id: i64| dispatcher.dispatch(PanelAction::AddNote { book_id })
    };
    let on_add_book = {
        let dispatcher = context.dispatcher.clone();
        move |_| dispatcher.dispatch(PanelAction::AddBook)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "h-screen bg-[#1e1e1e] text-[#cccccc]",
            BooksPanel { state, on_add_note, on_add_book }
        }
    }
}
