//! Empty-state panel shown before the first card is generated.

use dioxus::prelude::*;

/// Placeholder for the card surface while no card exists yet.
#[component]
pub fn CardPlaceholder() -> Element {
    rsx! {
        div { class: "card-placeholder",
            span { class: "card-placeholder__glyph", "🃏" }
            p { class: "card-placeholder__text", "Your card will appear here" }
            small { class: "card-placeholder__hint",
                "Fill in the creature details and hit Generate"
            }
        }
    }
}
