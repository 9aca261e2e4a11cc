//! Headless core for the pizza-order form.
//!
//! # Overview
//! Owns the order draft, per-field validation errors, submit enablement and
//! the post-submit banner, and builds/parses the HTTP exchange with the
//! order endpoint without touching the network (host-does-IO pattern). The
//! caller executes the actual round-trip, making the core fully
//! deterministic and testable.
//!
//! # Design
//! - `OrderForm` is the single owner of all form state; anything a renderer
//!   displays derives from a `FormView` snapshot, never from imperative
//!   display manipulation.
//! - Field validation and submission are both asynchronous from the form's
//!   point of view. Each is modelled as a generation-keyed ticket: the form
//!   hands out a ticket when the operation starts and discards resolutions
//!   whose ticket is no longer current, so out-of-order completions cannot
//!   clobber newer state.
//! - Validation rules live in a static per-field table evaluated by a pure
//!   function, with no runtime schema engine.
//! - `OrderClient` is stateless; `build_submit_order` produces an
//!   `HttpRequest` and `parse_submit_order` consumes an `HttpResponse`, so
//!   the I/O boundary is explicit.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod validate;

pub use client::OrderClient;
pub use error::ApiError;
pub use form::{Banner, FormView, OrderForm, SubmitTicket, ValidationTicket};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{OrderDraft, SubmitOutcome, Topping, TOPPINGS};
pub use validate::{Field, FieldErrors};
