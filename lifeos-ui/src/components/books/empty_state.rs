use crate::components::icons::{BookOpenIcon, PlusIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Shown when there is no book to display
#[component]
pub fn NoBookSelected(on_add_book: EventHandler<()>) -> Element {
    rsx! {
        div { class: "flex-1 flex items-center justify-center",
            div { class: "text-center text-[#858585]",
                BookOpenIcon { class: "w-12 h-12 mx-auto mb-4 opacity-50" }
                p { "No books selected" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    class: Some("mt-4".to_string()),
                    testid: Some("add-book"),
                    onclick: move |_| on_add_book.call(()),
                    PlusIcon { class: "w-4 h-4" }
                    "Add Book"
                }
            }
        }
    }
}
