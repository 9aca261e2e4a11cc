//! Declarative field validation.
//!
//! # Design
//! Each validated field has one statically-typed rule in a fixed table,
//! evaluated by a pure function. Validating a field yields either no error
//! or the first violated rule's message (first-failure-wins), so the UI
//! shows exactly one message per field. Whole-form validity is the
//! conjunction of the `fullName` and `size` rules; toppings carry no rule.

use crate::types::OrderDraft;

pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const SIZE_INCORRECT: &str = "size must be S or M or L";

/// Fields covered by the validation schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Size,
}

/// A single field's rule. Messages are part of the rule so the table is the
/// one place both bounds and wording live.
#[derive(Clone, Copy)]
enum Rule {
    /// Trimmed character count must fall in `[min, max]`. An empty value
    /// trims to length 0 and fails `min`, which subsumes "required".
    TrimmedLength {
        min: usize,
        max: usize,
        too_short: &'static str,
        too_long: &'static str,
    },
    /// Value must be exactly one of `allowed`. The empty string is not a
    /// member, which subsumes "required".
    OneOf {
        allowed: &'static [&'static str],
        message: &'static str,
    },
}

const FULL_NAME_RULE: Rule = Rule::TrimmedLength {
    min: 3,
    max: 20,
    too_short: FULL_NAME_TOO_SHORT,
    too_long: FULL_NAME_TOO_LONG,
};

const SIZE_RULE: Rule = Rule::OneOf {
    allowed: &["S", "M", "L"],
    message: SIZE_INCORRECT,
};

const fn rule(field: Field) -> Rule {
    match field {
        Field::FullName => FULL_NAME_RULE,
        Field::Size => SIZE_RULE,
    }
}

/// Validate one field's raw value against its rule.
///
/// Returns `Err` with the first violated rule's message, or `Ok` when the
/// value satisfies the rule.
pub fn validate_field(field: Field, value: &str) -> Result<(), &'static str> {
    match rule(field) {
        Rule::TrimmedLength {
            min,
            max,
            too_short,
            too_long,
        } => {
            let len = value.trim().chars().count();
            if len < min {
                Err(too_short)
            } else if len > max {
                Err(too_long)
            } else {
                Ok(())
            }
        }
        Rule::OneOf { allowed, message } => {
            if allowed.iter().any(|candidate| *candidate == value) {
                Ok(())
            } else {
                Err(message)
            }
        }
    }
}

/// Whole-form validity: `fullName` and `size` both pass. Toppings never
/// affect this.
pub fn form_is_valid(draft: &OrderDraft) -> bool {
    validate_field(Field::FullName, &draft.full_name).is_ok()
        && validate_field(Field::Size, &draft.size).is_ok()
}

/// Current per-field error messages. `None` means the field has no error.
///
/// Each entry is written only when its own field's validation resolves;
/// changing one field never clears another field's stored error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<&'static str>,
    pub size: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::FullName => self.full_name,
            Field::Size => self.size,
        }
    }

    pub(crate) fn set(&mut self, field: Field, error: Option<&'static str>) {
        match field {
            Field::FullName => self.full_name = error,
            Field::Size => self.size = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.size.is_none()
    }
}
