//! Studio page - the single form-to-card view.
//!
//! Owns the submission state machine: Idle -> Submitting -> (card stored or
//! error toast) -> Idle. At most one generation request is in flight; the
//! form's generate button is disabled for the whole Submitting span.

use dioxus::prelude::*;

use cardforge_core::{CardRequest, CardResponse};

use crate::components::{CardForm, CardPlaceholder, CreatureCard, Toast};
use crate::context::{use_client, use_toaster, TOAST_DURATION};

/// Submission phase, an explicit state instead of a bare loading flag.
/// Button rendering is a pure function of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

impl Phase {
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Submitting)
    }
}

/// The studio: creature form on the left, rendered card on the right.
#[component]
pub fn Studio() -> Element {
    let client = use_client();
    let mut toaster = use_toaster();

    let mut phase = use_signal(|| Phase::Idle);
    let mut last_card = use_signal(|| Option::<CardResponse>::None);
    // Bumped on every successful generation; keys the card node so the
    // entrance animation replays even for identical payloads.
    let mut render_seq = use_signal(|| 0usize);

    let on_generate = move |request: CardRequest| {
        if phase.peek().is_busy() {
            // The disabled button already blocks this path in the UI; the
            // state check makes the single-flight invariant total.
            return;
        }
        phase.set(Phase::Submitting);

        spawn(async move {
            match client().generate(&request).await {
                Ok(card) => {
                    let seq = render_seq.peek().wrapping_add(1);
                    render_seq.set(seq);
                    last_card.set(Some(card));
                }
                Err(err) => {
                    tracing::error!("card generation failed: {err}");
                    toaster.notify(format!("Error: {}", err.user_message()), TOAST_DURATION);
                }
            }
            phase.set(Phase::Idle);
        });
    };

    rsx! {
        main { class: "studio",
            header { class: "studio-header",
                h1 { class: "page-title", "Card Forge" }
                p { class: "tagline", "describe a creature, get a card" }
            }

            div { class: "studio-layout",
                section { class: "form-panel",
                    CardForm {
                        busy: phase().is_busy(),
                        on_generate,
                    }
                }

                section { class: "card-panel",
                    if let Some(card) = last_card() {
                        CreatureCard {
                            card,
                            render_seq: render_seq(),
                        }
                    } else {
                        CardPlaceholder {}
                    }
                }
            }

            Toast {}
        }
    }
}
