//! Creature Form
//!
//! Collects the creature details and emits a trimmed `CardRequest` on submit.
//! No validation beyond trimming: empty fields are allowed through, the
//! server substitutes its own defaults.

use dioxus::prelude::*;

use cardforge_core::{CardRequest, Element as CardElement};

/// Creature detail form with the generate button.
#[component]
pub fn CardForm(
    /// True while a generation request is in flight; disables the button
    /// and swaps its label for the loading indicator
    busy: bool,
    /// Handler called with the built request when the form is submitted
    on_generate: EventHandler<CardRequest>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut element = use_signal(|| CardElement::Fire);
    let mut description = use_signal(String::new);
    let mut special_ability = use_signal(String::new);
    let mut weakness = use_signal(String::new);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let request = CardRequest::from_form(
            &name(),
            element(),
            &description(),
            &special_ability(),
            &weakness(),
        );
        on_generate.call(request);
    };

    rsx! {
        form { class: "card-form", onsubmit: handle_submit,
            div { class: "form-field",
                label { class: "form-label", r#for: "name", "Name" }
                input {
                    id: "name",
                    class: "input-field",
                    placeholder: "Emberwing",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "element", "Element" }
                select {
                    id: "element",
                    class: "input-field",
                    onchange: move |e| {
                        if let Some(el) = CardElement::from_name(&e.value()) {
                            element.set(el);
                        }
                    },
                    for el in CardElement::all().iter().copied() {
                        option {
                            value: el.as_str(),
                            selected: el == element(),
                            {format!("{} {}", el.glyph(), el.as_str())}
                        }
                    }
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "description", "Description" }
                textarea {
                    id: "description",
                    class: "input-field",
                    placeholder: "A small dragon that nests in chimneys...",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    rows: 4,
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "special_ability", "Special ability" }
                input {
                    id: "special_ability",
                    class: "input-field",
                    placeholder: "Soot Cloud",
                    value: "{special_ability}",
                    oninput: move |e| special_ability.set(e.value()),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "weakness", "Weakness" }
                input {
                    id: "weakness",
                    class: "input-field",
                    placeholder: "Water",
                    value: "{weakness}",
                    oninput: move |e| weakness.set(e.value()),
                }
            }

            button {
                class: "btn-generate",
                r#type: "submit",
                disabled: busy,
                if busy {
                    span { class: "btn-generate__loader" }
                    "Forging..."
                } else {
                    "Generate Card"
                }
            }
        }
    }
}
