//! Footer metadata table

use crate::components::icons::StarIcon;
use crate::display_types::StarUnit;
use dioxus::prelude::*;

#[component]
pub fn BookInfo(isbn: String, status_label: String, rating: Option<Vec<StarUnit>>) -> Element {
    rsx! {
        div { class: "pt-4 border-t border-[#454545]",
            h5 { class: "text-[#cccccc] font-medium text-sm mb-3", "Book Information" }
            div { class: "grid grid-cols-1 gap-2 text-xs",
                div { class: "flex justify-between",
                    span { class: "text-[#858585]", "ISBN:" }
                    span { class: "text-[#cccccc]", "{isbn}" }
                }
                div { class: "flex justify-between",
                    span { class: "text-[#858585]", "Status:" }
                    span { class: "text-[#cccccc]", "{status_label}" }
                }
                if let Some(stars) = rating {
                    div { class: "flex justify-between items-center",
                        span { class: "text-[#858585]", "My Rating:" }
                        RatingStars { stars }
                    }
                }
            }
        }
    }
}

/// Star units left to right
#[component]
pub fn RatingStars(stars: Vec<StarUnit>) -> Element {
    rsx! {
        div { class: "flex gap-0.5", "data-testid": "rating",
            for (i , unit) in stars.iter().enumerate() {
                StarIcon {
                    key: "{i}",
                    class: star_class(*unit),
                    filled: *unit == StarUnit::Filled,
                }
            }
        }
    }
}

fn star_class(unit: StarUnit) -> &'static str {
    match unit {
        StarUnit::Filled => "w-3 h-3 text-yellow-400",
        StarUnit::Unfilled => "w-3 h-3 text-[#454545]",
    }
}
