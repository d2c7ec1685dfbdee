//! Push-subscription payloads.
//!
//! Delivery semantics belong to the platform Push API and the backend; the
//! client only registers and unregisters subscriptions.

use serde::{Deserialize, Serialize};

/// Key material of a platform push subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// A push subscription as handed over by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscription {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_shape() {
        let raw = r#"{"endpoint": "https://push.example/abc", "keys": {"p256dh": "pk", "auth": "ak"}}"#;
        let sub: PushSubscription = serde_json::from_str(raw).unwrap();
        assert_eq!(sub.endpoint, "https://push.example/abc");
        assert_eq!(sub.keys.p256dh, "pk");
    }
}
