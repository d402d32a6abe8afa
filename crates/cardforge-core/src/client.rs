//! HTTP client for the card generation server.

use serde::Deserialize;

use crate::error::CardError;
use crate::types::{CardRequest, CardResponse};

/// Path of the generation endpoint, relative to the server base URL.
pub const GENERATE_CARD_PATH: &str = "/generate_card";

/// Error body the server may attach to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the card generation server.
///
/// Wraps a reqwest connection pool; cloning is cheap and shares the pool.
/// The UI keeps at most one generation request in flight, and no timeout is
/// applied, so a hung server keeps the caller waiting.
#[derive(Debug, Clone)]
pub struct CardClient {
    http: reqwest::Client,
    base_url: String,
}

impl CardClient {
    /// Create a client against a server base URL such as
    /// `http://127.0.0.1:5000`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the creature details and parse the generated card.
    ///
    /// Non-2xx answers surface the server's `{"error": ...}` message when the
    /// body carries one; otherwise the numeric status is reported. A 2xx body
    /// that does not parse as a card is rejected, never rendered partially.
    pub async fn generate(&self, request: &CardRequest) -> Result<CardResponse, CardError> {
        let url = format!("{}{}", self.base_url, GENERATE_CARD_PATH);
        tracing::debug!(url = %url, name = %request.name, "requesting card generation");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| CardError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CardError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(CardError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let card = CardResponse::from_json(&body)?;
        tracing::info!(name = %card.name, hp = card.hp, "card generated");
        Ok(card)
    }
}
