//! Card Forge Core Library
//!
//! Typed client and wire schema for the card generation server.
//!
//! ## Overview
//!
//! The server exposes a single endpoint, `POST /generate_card`, which takes a
//! creature description and answers with the full stat block for a trading
//! card (HP, two attacks, weakness, retreat cost, flavor text, and an optional
//! base64-encoded artwork). This crate owns everything that crosses that
//! boundary: the request/response types, the element table, the error
//! taxonomy, and the HTTP client.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardforge_core::{CardClient, CardRequest, Element};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CardClient::new("http://127.0.0.1:5000");
//!
//!     let request = CardRequest::from_form(
//!         "Emberwing",
//!         Element::Fire,
//!         "A small dragon that nests in chimneys",
//!         "Soot Cloud",
//!         "Water",
//!     );
//!
//!     let card = client.generate(&request).await?;
//!     println!("{} — HP {}", card.name, card.hp);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-exports
pub use client::{CardClient, GENERATE_CARD_PATH};
pub use error::CardError;
pub use types::{glyph_for, Attack, CardRequest, CardResponse, Element, DEFAULT_GLYPH};
