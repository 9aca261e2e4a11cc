//! Domain types for the order form.
//!
//! # Design
//! `OrderDraft` is both the form's owned state and the wire payload for
//! `POST /api/order`; it serializes with camelCase keys to match the
//! endpoint's JSON schema. The topping catalog is a static table so the
//! rendered checkbox list and the ids appended to a draft come from the
//! same source. Types use owned `String` / `Vec` fields so snapshots can
//! outlive the form that produced them.

use serde::{Deserialize, Serialize};

/// One entry of the topping catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub label: &'static str,
}

/// The fixed, ordered topping catalog. Never mutated at runtime.
pub const TOPPINGS: [Topping; 5] = [
    Topping { id: "1", label: "Pepperoni" },
    Topping { id: "2", label: "Green Peppers" },
    Topping { id: "3", label: "Pineapple" },
    Topping { id: "4", label: "Mushrooms" },
    Topping { id: "5", label: "Ham" },
];

/// The in-memory, not-yet-submitted order.
///
/// Empty on construction, mutated by the form's change handlers, reset to
/// empty after a successful submission. `toppings` holds catalog ids in
/// check order, duplicates forbidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub full_name: String,
    /// `""` until chosen, then one of `"S"`, `"M"`, `"L"`.
    pub size: String,
    pub toppings: Vec<String>,
}

/// Terminal result of a submit attempt, as read from the server response.
///
/// Both variants carry the server-provided message verbatim; which one the
/// response maps to depends only on its status class. Transport and
/// malformed-payload problems are not outcomes, they surface as
/// [`crate::ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response; the order was taken.
    Accepted { message: String },
    /// Non-2xx response; the order was refused and the draft should be kept
    /// for correction.
    Rejected { message: String },
}
