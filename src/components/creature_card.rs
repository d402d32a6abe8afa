//! Creature Card
//!
//! Renders a generated card: header with name/HP/element badge, artwork (or
//! its placeholder), the two attacks, weakness, retreat cost, and flavor
//! text. All server text renders through escaping text nodes, never as
//! markup.

use dioxus::prelude::*;

use cardforge_core::{glyph_for, CardResponse};

/// Formatted HP string for the card header.
fn hp_label(hp: u32) -> String {
    format!("HP {hp}")
}

/// Retreat cost as a repeated star glyph; absent or zero cost shows one star.
fn retreat_stars(cost: Option<u32>) -> String {
    let count = cost.filter(|c| *c > 0).unwrap_or(1);
    "⭐".repeat(count as usize)
}

/// Weakness display text, an en dash when absent or empty.
fn weakness_label(weakness: Option<&str>) -> String {
    weakness
        .filter(|w| !w.is_empty())
        .unwrap_or("–")
        .to_string()
}

fn flavor_label(flavor: Option<&str>) -> String {
    flavor.unwrap_or_default().to_string()
}

/// Inline data URI for the card artwork, when the server produced one.
fn image_data_uri(card: &CardResponse) -> Option<String> {
    card.image_b64
        .as_ref()
        .map(|b64| format!("data:image/png;base64,{b64}"))
}

/// A rendered creature card.
#[component]
pub fn CreatureCard(
    /// The generated card data
    card: CardResponse,
    /// Bumped per generation; keying the card node on it recreates the node
    /// and restarts the entrance animation even for identical payloads
    render_seq: usize,
) -> Element {
    let glyph = glyph_for(&card.element);
    let image_uri = image_data_uri(&card);

    rsx! {
        article {
            key: "{render_seq}",
            class: "creature-card",
            "data-element": "{card.element}",

            header { class: "creature-card__header",
                h2 { class: "creature-card__name", "{card.name}" }
                div { class: "creature-card__hp", {hp_label(card.hp)} }
                span { class: "creature-card__badge", "{glyph}" }
            }

            div { class: "creature-card__image-frame",
                if let Some(uri) = image_uri {
                    img {
                        class: "creature-card__image loaded",
                        src: "{uri}",
                        alt: "{card.name}",
                    }
                } else {
                    div { class: "creature-card__image-placeholder",
                        span { class: "creature-card__image-glyph", "🎨" }
                        small { "Image could not be generated" }
                    }
                }
            }

            div { class: "creature-card__attacks",
                for atk in card.attacks() {
                    div { class: "attack",
                        div { class: "attack__info",
                            div { class: "attack__name", "{atk.name}" }
                            div { class: "attack__desc", "{atk.description}" }
                        }
                        div { class: "attack__damage", "{atk.damage}" }
                    }
                }
            }

            footer { class: "creature-card__footer",
                div { class: "creature-card__stat",
                    span { class: "creature-card__stat-label", "Weakness" }
                    span { class: "creature-card__stat-value",
                        {weakness_label(card.weakness.as_deref())}
                    }
                }
                div { class: "creature-card__stat",
                    span { class: "creature-card__stat-label", "Retreat" }
                    span { class: "creature-card__stat-value",
                        {retreat_stars(card.retreat_cost)}
                    }
                }
            }

            p { class: "creature-card__flavor", {flavor_label(card.flavor_text.as_deref())} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> CardResponse {
        CardResponse {
            name: "Emberwing".to_string(),
            hp: 120,
            element: "Fire".to_string(),
            attack1_name: "Cinder Dive".to_string(),
            attack1_damage: 40,
            attack1_description: "Swoops through hot ash.".to_string(),
            attack2_name: "Soot Cloud".to_string(),
            attack2_damage: 70,
            attack2_description: "Blinds the opponent.".to_string(),
            image_b64: None,
            weakness: Some("Water".to_string()),
            retreat_cost: Some(2),
            flavor_text: Some("Nests in chimneys.".to_string()),
        }
    }

    #[test]
    fn test_hp_label_format() {
        assert_eq!(hp_label(120), "HP 120");
        assert_eq!(hp_label(0), "HP 0");
    }

    #[test]
    fn test_retreat_stars_repeat_count() {
        assert_eq!(retreat_stars(Some(3)).chars().count(), 3);
        assert_eq!(retreat_stars(Some(3)), "⭐⭐⭐");
    }

    #[test]
    fn test_retreat_stars_default_to_one() {
        assert_eq!(retreat_stars(None), "⭐");
        assert_eq!(retreat_stars(Some(0)), "⭐");
    }

    #[test]
    fn test_weakness_label_defaults_to_dash() {
        assert_eq!(weakness_label(Some("Water")), "Water");
        assert_eq!(weakness_label(None), "–");
        assert_eq!(weakness_label(Some("")), "–");
    }

    #[test]
    fn test_flavor_label_defaults_to_empty() {
        assert_eq!(flavor_label(Some("Nests in chimneys.")), "Nests in chimneys.");
        assert_eq!(flavor_label(None), "");
    }

    #[test]
    fn test_image_uri_absent_without_payload() {
        let card = sample_card();
        assert_eq!(image_data_uri(&card), None);
    }

    #[test]
    fn test_image_uri_present_with_payload() {
        let mut card = sample_card();
        card.image_b64 = Some("aGVsbG8=".to_string());
        assert_eq!(
            image_data_uri(&card).as_deref(),
            Some("data:image/png;base64,aGVsbG8=")
        );
    }

    #[test]
    fn test_glyph_for_known_and_unknown_elements() {
        assert_eq!(glyph_for("Fire"), "🔥");
        assert_eq!(glyph_for("Plasma"), "⬜");
    }
}
