//! Wire schema for the card generation endpoint.
//!
//! `CardRequest` is built fresh from the form on every submission;
//! `CardResponse` is what the server answers with. Neither is persisted, the
//! rendered card is the only place the data lives on.

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Badge glyph for element names the table does not know.
pub const DEFAULT_GLYPH: &str = "⬜";

/// The fixed element set offered by the form.
///
/// Serializes as its name string (`"Fire"`, `"Water"`, ...), which is also
/// what the server echoes back in `CardResponse::element`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Psychic,
    Dragon,
    Fairy,
    Ghost,
    Normal,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Grass => "Grass",
            Element::Electric => "Electric",
            Element::Ice => "Ice",
            Element::Fighting => "Fighting",
            Element::Poison => "Poison",
            Element::Psychic => "Psychic",
            Element::Dragon => "Dragon",
            Element::Fairy => "Fairy",
            Element::Ghost => "Ghost",
            Element::Normal => "Normal",
        }
    }

    /// Badge emoji for the element.
    pub fn glyph(&self) -> &'static str {
        match self {
            Element::Fire => "🔥",
            Element::Water => "💧",
            Element::Grass => "🌿",
            Element::Electric => "⚡",
            Element::Ice => "❄️",
            Element::Fighting => "👊",
            Element::Poison => "☠️",
            Element::Psychic => "🔮",
            Element::Dragon => "🐉",
            Element::Fairy => "✨",
            Element::Ghost => "👻",
            Element::Normal => DEFAULT_GLYPH,
        }
    }

    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Water,
            Element::Grass,
            Element::Electric,
            Element::Ice,
            Element::Fighting,
            Element::Poison,
            Element::Psychic,
            Element::Dragon,
            Element::Fairy,
            Element::Ghost,
            Element::Normal,
        ]
    }

    pub fn from_name(name: &str) -> Option<Element> {
        Element::all().iter().copied().find(|e| e.as_str() == name)
    }
}

/// Badge glyph for a free-form element string.
///
/// The server echoes the element back as a plain string; anything outside the
/// known table gets the neutral glyph.
pub fn glyph_for(name: &str) -> &'static str {
    Element::from_name(name).map(|e| e.glyph()).unwrap_or(DEFAULT_GLYPH)
}

/// Payload for `POST /generate_card`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRequest {
    pub name: String,
    pub element: Element,
    pub description: String,
    pub special_ability: String,
    pub weakness: String,
}

impl CardRequest {
    /// Build a request from raw form values.
    ///
    /// Surrounding whitespace is dropped; empty fields are allowed through to
    /// the server, which substitutes its own defaults.
    pub fn from_form(
        name: &str,
        element: Element,
        description: &str,
        special_ability: &str,
        weakness: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            element,
            description: description.trim().to_string(),
            special_ability: special_ability.trim().to_string(),
            weakness: weakness.trim().to_string(),
        }
    }
}

/// A generated card as the server returns it.
///
/// The stat fields are required; the card fails closed as
/// [`CardError::Malformed`] if any is missing. Image, weakness, retreat cost
/// and flavor text are optional and masked with display defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardResponse {
    pub name: String,
    pub hp: u32,
    pub element: String,
    pub attack1_name: String,
    pub attack1_damage: u32,
    pub attack1_description: String,
    pub attack2_name: String,
    pub attack2_damage: u32,
    pub attack2_description: String,
    /// Base64-encoded PNG artwork, when image generation succeeded
    #[serde(default)]
    pub image_b64: Option<String>,
    #[serde(default)]
    pub weakness: Option<String>,
    #[serde(default)]
    pub retreat_cost: Option<u32>,
    #[serde(default)]
    pub flavor_text: Option<String>,
}

/// One of the two attack slots, projected out for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Attack {
    pub name: String,
    pub damage: u32,
    pub description: String,
}

impl CardResponse {
    /// Parse a response body defensively.
    ///
    /// Bodies that are not JSON or are missing a required stat field are
    /// rejected as [`CardError::Malformed`]. An image payload that is not
    /// valid base64 is discarded rather than failing the card, the artwork is
    /// optional by contract.
    pub fn from_json(body: &str) -> Result<Self, CardError> {
        let mut card: CardResponse =
            serde_json::from_str(body).map_err(|e| CardError::Malformed(e.to_string()))?;

        if let Some(b64) = &card.image_b64 {
            use base64::Engine;
            if base64::engine::general_purpose::STANDARD.decode(b64).is_err() {
                tracing::warn!(name = %card.name, "discarding image payload that is not valid base64");
                card.image_b64 = None;
            }
        }

        Ok(card)
    }

    /// The two attack slots, in display order.
    pub fn attacks(&self) -> [Attack; 2] {
        [
            Attack {
                name: self.attack1_name.clone(),
                damage: self.attack1_damage,
                description: self.attack1_description.clone(),
            },
            Attack {
                name: self.attack2_name.clone(),
                damage: self.attack2_damage,
                description: self.attack2_description.clone(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> String {
        r#"{
            "name": "Emberwing",
            "hp": 120,
            "element": "Fire",
            "attack1_name": "Cinder Dive",
            "attack1_damage": 40,
            "attack1_description": "Swoops through hot ash.",
            "attack2_name": "Soot Cloud",
            "attack2_damage": 70,
            "attack2_description": "Blinds the opponent.",
            "image_b64": "aGVsbG8=",
            "weakness": "Water",
            "retreat_cost": 2,
            "flavor_text": "Nests in chimneys."
        }"#
        .to_string()
    }

    #[test]
    fn test_full_body_parses() {
        let card = CardResponse::from_json(&full_body()).unwrap();
        assert_eq!(card.name, "Emberwing");
        assert_eq!(card.hp, 120);
        assert_eq!(card.element, "Fire");
        assert_eq!(card.image_b64.as_deref(), Some("aGVsbG8="));
        assert_eq!(card.retreat_cost, Some(2));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let body = r#"{
            "name": "Mossling",
            "hp": 60,
            "element": "Grass",
            "attack1_name": "Leaf Flick",
            "attack1_damage": 10,
            "attack1_description": "A quick flick.",
            "attack2_name": "Spore Burst",
            "attack2_damage": 30,
            "attack2_description": "Releases spores."
        }"#;
        let card = CardResponse::from_json(body).unwrap();
        assert_eq!(card.image_b64, None);
        assert_eq!(card.weakness, None);
        assert_eq!(card.retreat_cost, None);
        assert_eq!(card.flavor_text, None);
    }

    #[test]
    fn test_missing_required_field_fails_closed() {
        // No hp
        let body = r#"{
            "name": "Mossling",
            "element": "Grass",
            "attack1_name": "Leaf Flick",
            "attack1_damage": 10,
            "attack1_description": "A quick flick.",
            "attack2_name": "Spore Burst",
            "attack2_damage": 30,
            "attack2_description": "Releases spores."
        }"#;
        assert!(matches!(
            CardResponse::from_json(body),
            Err(CardError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_json_body_fails_closed() {
        assert!(matches!(
            CardResponse::from_json("<html>502 Bad Gateway</html>"),
            Err(CardError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_base64_image_is_discarded() {
        let body = full_body().replace("aGVsbG8=", "not base64!!");
        let card = CardResponse::from_json(&body).unwrap();
        assert_eq!(card.image_b64, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // The server echoes request fields back alongside the stats
        let body = full_body().replace(
            "\"name\": \"Emberwing\",",
            "\"name\": \"Emberwing\", \"description\": \"echoed\", \"special_ability\": \"echoed\",",
        );
        let card = CardResponse::from_json(&body).unwrap();
        assert_eq!(card.name, "Emberwing");
    }

    #[test]
    fn test_attacks_projects_both_slots_in_order() {
        let card = CardResponse::from_json(&full_body()).unwrap();
        let [first, second] = card.attacks();
        assert_eq!(first.name, "Cinder Dive");
        assert_eq!(first.damage, 40);
        assert_eq!(second.name, "Soot Cloud");
        assert_eq!(second.damage, 70);
    }

    #[test]
    fn test_attack_text_with_markup_is_kept_verbatim() {
        let body = full_body().replace("Cinder Dive", "<script>alert(1)</script>");
        let card = CardResponse::from_json(&body).unwrap();
        let [first, _] = card.attacks();
        // Carried as plain text; the UI renders it through escaping text
        // nodes, never as markup.
        assert_eq!(first.name, "<script>alert(1)</script>");
    }

    #[test]
    fn test_element_glyphs() {
        assert_eq!(glyph_for("Fire"), "🔥");
        assert_eq!(glyph_for("Water"), "💧");
        assert_eq!(glyph_for("Normal"), DEFAULT_GLYPH);
    }

    #[test]
    fn test_unknown_element_gets_default_glyph() {
        assert_eq!(glyph_for("Plasma"), DEFAULT_GLYPH);
        assert_eq!(glyph_for(""), DEFAULT_GLYPH);
    }

    #[test]
    fn test_element_round_trips_through_name() {
        for element in Element::all() {
            assert_eq!(Element::from_name(element.as_str()), Some(*element));
        }
        assert_eq!(Element::from_name("fire"), None);
    }

    #[test]
    fn test_element_serializes_as_name_string() {
        assert_eq!(serde_json::to_string(&Element::Fire).unwrap(), "\"Fire\"");
    }

    #[test]
    fn test_request_from_form_trims_fields() {
        let request = CardRequest::from_form(
            "  Emberwing ",
            Element::Fire,
            "\na small dragon\n",
            " Soot Cloud",
            "",
        );
        assert_eq!(request.name, "Emberwing");
        assert_eq!(request.description, "a small dragon");
        assert_eq!(request.special_ability, "Soot Cloud");
        // Empty fields are allowed through
        assert_eq!(request.weakness, "");
    }

    #[test]
    fn test_request_serializes_element_as_string() {
        let request = CardRequest::from_form("A", Element::Ghost, "", "", "");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["element"], "Ghost");
    }
}
