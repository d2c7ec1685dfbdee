//! HTTP collaborators of the fest client.
//!
//! One [`ApiClient`] per process talks to the backend's JSON endpoints;
//! every failure is mapped into the shared [`fest_core::FestError`]
//! taxonomy at the request layer, so callers never see a transport error
//! type. Fetches run under a view-owned cancellation token via
//! [`cancel::cancellable`].

pub mod cancel;
mod client;
mod contacts;
mod gallery;
mod guests;
mod notes;
mod push;
mod registry;
mod response;
mod schedule;
mod seating;

pub use cancel::cancellable;
pub use client::{ApiClient, IDEMPOTENCY_HEADER};
pub use push::decode_vapid_key;
pub use response::Ack;
