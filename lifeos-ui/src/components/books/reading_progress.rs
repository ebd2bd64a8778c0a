use crate::display_types::ProgressDisplay;
use dioxus::prelude::*;

/// Percentage label plus a horizontal fill
#[component]
pub fn ReadingProgress(progress: ProgressDisplay) -> Element {
    rsx! {
        div { class: "space-y-2", "data-testid": "reading-progress",
            div { class: "flex justify-between items-center",
                h5 { class: "text-[#cccccc] font-medium text-sm", "Reading Progress" }
                span { class: "text-xs text-[#858585]", "{progress.label}" }
            }
            div {
                class: "w-full bg-[#2d2d2d] rounded-full h-2",
                "role": "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{progress.percent}",
                div {
                    class: "bg-[#007acc] h-2 rounded-full transition-all",
                    style: "width: {progress.fill_width}",
                }
            }
        }
    }
}
