//! Panel buttons

use dioxus::prelude::*;

/// Unstyled button: disabled state and click gating only
#[component]
fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] testid: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": testid,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent blue background - for the panel's main action
    Primary,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Compact, for section headers
    Small,
    Medium,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-[#007acc] hover:bg-[#005a9e] text-white disabled:opacity-50 disabled:cursor-not-allowed"
            }
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "inline-flex items-center gap-1 px-2.5 py-1 text-xs rounded",
            ButtonSize::Medium => "inline-flex items-center gap-2 px-4 py-2 text-sm rounded",
        }
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] testid: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{} transition-colors {} {extra}", size.class(), variant.class()),
        None => format!("{} transition-colors {}", size.class(), variant.class()),
    };

    rsx! {
        ChromelessButton {
            disabled,
            testid,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
