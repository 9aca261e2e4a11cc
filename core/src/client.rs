//! Stateless HTTP request builder and response parser for the order endpoint.
//!
//! # Design
//! `OrderClient` holds only a `base_url` and carries no mutable state
//! between calls. The submit operation is split into `build_submit_order`,
//! which produces an `HttpRequest` from the current draft, and
//! `parse_submit_order`, which consumes the `HttpResponse`. The caller
//! executes the actual round-trip in between, keeping the core free of I/O
//! dependencies.
//!
//! The endpoint speaks one shape in both directions of failure and success:
//! a JSON object carrying a `message` string. Status class alone decides
//! whether that message is a confirmation or a refusal.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{OrderDraft, SubmitOutcome};

/// Response envelope shared by accepted and rejected orders. Servers may
/// attach extra fields (order id, etc.); only `message` is interpreted.
#[derive(Deserialize)]
struct AckBody {
    message: String,
}

/// Stateless client for the order endpoint.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct OrderClient {
    base_url: String,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the `POST /api/order` request carrying `draft` as JSON.
    ///
    /// The draft is serialized as-is; client-side validity is the form's
    /// concern, not the transport's.
    pub fn build_submit_order(&self, draft: &OrderDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/order", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Interpret the order endpoint's response.
    ///
    /// Any 2xx is an acceptance, any other status a rejection; in both
    /// cases the body's `message` is returned verbatim for the banner. A
    /// body without a readable `message` is a protocol breach and comes
    /// back as `ApiError::Deserialization`.
    pub fn parse_submit_order(&self, response: HttpResponse) -> Result<SubmitOutcome, ApiError> {
        let ack: AckBody =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization {
                status: response.status,
                detail: e.to_string(),
            })?;
        if (200..300).contains(&response.status) {
            Ok(SubmitOutcome::Accepted { message: ack.message })
        } else {
            Ok(SubmitOutcome::Rejected { message: ack.message })
        }
    }
}
