//! Cancellation-aware request wrapper.
//!
//! Every controller owns a `CancellationToken`; shutting the view down
//! cancels its in-flight fetches so a late response can never be applied to
//! a torn-down view.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use fest_core::{FestError, Result};

/// Runs the request unless/until the token is cancelled.
pub async fn cancellable<T>(
    token: &CancellationToken,
    request: impl Future<Output = Result<T>>,
) -> Result<T> {
    // Biased so an already-cancelled token wins over a ready response.
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(FestError::Cancelled),
        result = request => result,
    }
}
