//! Cover placeholder, title, author and metadata

use crate::components::icons::{BookOpenIcon, CalendarIcon, FileTextIcon, TagIcon, UserIcon};
use dioxus::prelude::*;

#[component]
pub fn BookOverview(
    title: String,
    author: String,
    format: String,
    pages: u32,
    published_year: i32,
    genres: Vec<String>,
) -> Element {
    rsx! {
        div { class: "flex gap-4",
            // Covers are not resolved yet, always show the glyph
            div { class: "w-24 h-32 bg-[#2d2d2d] rounded flex items-center justify-center flex-shrink-0",
                BookOpenIcon { class: "w-8 h-8 text-[#858585]" }
            }

            div { class: "flex-1 space-y-2",
                h4 { class: "text-[#cccccc] font-semibold text-lg leading-tight", "{title}" }
                p { class: "text-[#858585] flex items-center gap-1",
                    UserIcon { class: "w-3 h-3" }
                    "{author}"
                }

                div { class: "space-y-1 text-xs",
                    MetadataRow { label: "Type:", value: format,
                        TagIcon { class: "w-3 h-3" }
                    }
                    MetadataRow { label: "Pages:", value: pages.to_string(),
                        FileTextIcon { class: "w-3 h-3" }
                    }
                    MetadataRow { label: "Published:", value: published_year.to_string(),
                        CalendarIcon { class: "w-3 h-3" }
                    }
                }

                div { class: "flex flex-wrap gap-1 mt-2", "data-testid": "genre-list",
                    for (i , genre) in genres.iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "px-2 py-1 bg-[#007acc]/20 text-[#007acc] text-xs rounded",
                            "{genre}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetadataRow(label: &'static str, value: String, children: Element) -> Element {
    rsx! {
        div { class: "flex items-center gap-2 text-[#858585]",
            {children}
            span { class: "text-[#cccccc]", "{label}" }
            span { "{value}" }
        }
    }
}
