//! Reading notes list

use crate::components::icons::{ClockIcon, PenLineIcon, PlusIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::NoteDisplay;
use dioxus::prelude::*;

/// Notes header with the "Add Note" trigger, then the cards in order
#[component]
pub fn NotesSection(notes: Vec<NoteDisplay>, on_add_note: EventHandler<()>) -> Element {
    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                h5 { class: "text-[#cccccc] font-medium text-sm flex items-center gap-2",
                    PenLineIcon {}
                    "Reading Notes & Thoughts"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    testid: Some("add-note"),
                    onclick: move |_| on_add_note.call(()),
                    PlusIcon { class: "w-3 h-3" }
                    "Add Note"
                }
            }

            div { class: "space-y-3", "data-testid": "note-list",
                if notes.is_empty() {
                    div { class: "text-center py-8 text-[#858585] text-sm",
                        PenLineIcon { class: "w-6 h-6 mx-auto mb-2 opacity-50" }
                        p { "No notes yet" }
                        p { class: "text-xs mt-1", "Add your first reading note to get started" }
                    }
                } else {
                    for note in notes {
                        NoteCard { key: "{note.id}", note }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NoteCard(note: NoteDisplay) -> Element {
    rsx! {
        div { class: "bg-[#3c3c3c] rounded-lg p-3 hover:bg-[#404040] transition-colors",
            div { class: "flex justify-between items-start mb-2",
                h6 { class: "text-[#cccccc] font-medium text-sm", "{note.title}" }
                div { class: "flex items-center gap-1 text-xs text-[#858585]",
                    ClockIcon { class: "w-3 h-3" }
                    "{note.date_label}"
                }
            }
            p { class: "text-[#858585] text-sm leading-relaxed mb-2", "{note.content}" }
            div { class: "flex flex-wrap gap-1",
                for (i , tag) in note.tags.iter().enumerate() {
                    span {
                        key: "{i}",
                        class: "px-1.5 py-0.5 bg-[#2d2d2d] text-[#858585] text-xs rounded",
                        "{tag}"
                    }
                }
            }
        }
    }
}
