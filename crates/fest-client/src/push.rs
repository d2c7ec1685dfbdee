//! Push-subscription endpoints.
//!
//! Delivery is owned by the platform Push API and the backend; this module
//! only registers and unregisters subscriptions and hands the frontend the
//! decoded VAPID application-server key it needs to create one.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use fest_core::model::PushSubscription;
use fest_core::{FestError, Result};

use crate::client::ApiClient;
use crate::response::Ack;

#[derive(Deserialize)]
struct VapidKeyResponse {
    key: String,
}

#[derive(Serialize)]
struct UnsubscribeRequest<'a> {
    endpoint: &'a str,
}

impl ApiClient {
    /// Fetches and decodes the server's VAPID application-server key.
    pub async fn vapid_public_key(&self) -> Result<Vec<u8>> {
        let response: VapidKeyResponse = self.get_json("api/push/key").await?;
        decode_vapid_key(&response.key)
    }

    /// Registers a platform push subscription with the backend.
    pub async fn register_push_subscription(
        &self,
        subscription: &PushSubscription,
    ) -> Result<Option<String>> {
        let ack: Ack = self.post_json("api/push/subscribe", subscription).await?;
        ack.into_result()
    }

    /// Removes a subscription by its endpoint URL.
    pub async fn unregister_push_subscription(&self, endpoint: &str) -> Result<Option<String>> {
        let ack: Ack = self
            .post_json("api/push/unsubscribe", &UnsubscribeRequest { endpoint })
            .await?;
        ack.into_result()
    }
}

/// Decodes a VAPID key from its URL-safe base64 wire form into the raw
/// bytes the platform subscription call expects.
pub fn decode_vapid_key(key: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(key.trim())
        .map_err(|err| FestError::Serialization {
            format: "base64".to_string(),
            message: format!("invalid VAPID key: {err}"),
        })
}
