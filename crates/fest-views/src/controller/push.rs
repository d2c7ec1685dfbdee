//! Push-subscription registration.
//!
//! No render region: outcomes are reported through the toast surface only.
//! Creating the platform subscription itself is the frontend's job; this
//! controller supplies the decoded server key and registers the result.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::Result;
use fest_core::model::PushSubscription;

use super::notify_failure;
use crate::backend::Backend;
use crate::surface::{NoticeKind, Notifier};

pub struct PushController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    cancel: CancellationToken,
}

impl PushController {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
        }
    }

    /// The decoded VAPID application-server key for the platform
    /// subscription call.
    pub async fn server_key(&self) -> Result<Vec<u8>> {
        cancellable(&self.cancel, self.backend.vapid_public_key()).await
    }

    /// Registers a platform subscription with the backend.
    pub async fn register(&self, subscription: PushSubscription) -> Result<()> {
        match cancellable(
            &self.cancel,
            self.backend.register_push_subscription(&subscription),
        )
        .await
        {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Benachrichtigungen aktiviert"),
                    NoticeKind::Success,
                );
                Ok(())
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    /// Removes a subscription by its endpoint URL.
    pub async fn unregister(&self, endpoint: &str) -> Result<()> {
        match cancellable(
            &self.cancel,
            self.backend.unregister_push_subscription(endpoint),
        )
        .await
        {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Benachrichtigungen deaktiviert"),
                    NoticeKind::Info,
                );
                Ok(())
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBackend, MockNotifier};
    use fest_core::model::SubscriptionKeys;

    fn subscription() -> PushSubscription {
        PushSubscription {
            endpoint: "https://push.example/abc".to_string(),
            keys: SubscriptionKeys {
                p256dh: "pk".to_string(),
                auth: "ak".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_register_reports_success_via_toast() {
        let backend = Arc::new(MockBackend::default());
        let notifier = Arc::new(MockNotifier::default());
        let controller = PushController::new(backend.clone(), notifier.clone());
        controller.register(subscription()).await.unwrap();
        assert_eq!(backend.subscriptions.lock().unwrap().len(), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[tokio::test]
    async fn test_register_failure_reports_error_via_toast() {
        let backend = Arc::new(MockBackend::default());
        *backend.mutation_error.lock().unwrap() =
            Some(fest_core::FestError::server(Some(500), "kaputt"));
        let notifier = Arc::new(MockNotifier::default());
        let controller = PushController::new(backend, notifier.clone());
        assert!(controller.register(subscription()).await.is_err());
        assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
    }

    #[tokio::test]
    async fn test_server_key_passthrough() {
        let backend = Arc::new(MockBackend::default());
        let controller = PushController::new(backend, Arc::new(MockNotifier::default()));
        assert_eq!(controller.server_key().await.unwrap(), vec![4, 2]);
    }
}
