//! Toast banner rendering the notifier's current message.
//!
//! The notifier itself lives in [`crate::context::Toaster`]; this component
//! is just its visible surface. Keying the node on the message id restarts
//! the slide-in animation when one toast replaces another.

use dioxus::prelude::*;

use crate::context::use_toaster;

/// The single transient notification banner.
#[component]
pub fn Toast() -> Element {
    let toaster = use_toaster();

    rsx! {
        if let Some(toast) = toaster.current() {
            div { key: "{toast.id}", class: "toast", "{toast.text}" }
        }
    }
}
