//! Error types for the order API client.
//!
//! # Design
//! A rejected order is not an error: the server's refusal message is data
//! the form shows in its failure banner, so it lives in
//! [`crate::SubmitOutcome::Rejected`]. `ApiError` is reserved for exchanges
//! the client cannot interpret at all, such as a response body without the
//! expected `message` field. The status code and serde detail are kept for
//! debugging.

use thiserror::Error;

/// Errors returned by `OrderClient` build/parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The draft could not be serialized to JSON.
    #[error("failed to serialize order payload: {0}")]
    Serialization(String),

    /// The response body did not carry the expected `message` payload.
    #[error("unusable response from order endpoint (HTTP {status}): {detail}")]
    Deserialization { status: u16, detail: String },
}
