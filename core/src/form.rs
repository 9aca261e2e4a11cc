//! Form state machine for the order page.
//!
//! # Design
//! `OrderForm` owns the draft, the per-field errors, the submit flag and
//! the banner. Mutations happen through change handlers; everything shown
//! to a user derives from a [`FormView`] snapshot of this state.
//!
//! Per-field validation and submission both complete asynchronously in the
//! embedding host. Rather than letting whichever completion lands last win,
//! the form keys each start with a monotonically increasing generation and
//! hands the caller a ticket. `resolve_*` applies a result only when its
//! ticket is still current, so a stale validation can never overwrite the
//! error for a newer keystroke and a superseded submit can never flip the
//! banner or reset the draft.

use crate::types::{OrderDraft, SubmitOutcome, TOPPINGS};
use crate::validate::{self, Field, FieldErrors};

/// Transient top-level message shown after a submit attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Failure(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Success(message) | Banner::Failure(message) => message,
        }
    }
}

/// Handle for one in-flight field validation.
///
/// Captures the value as it was at the triggering change, so resolution is
/// independent of edits made in between; those edits carry their own,
/// newer tickets.
#[derive(Debug, Clone)]
pub struct ValidationTicket {
    field: Field,
    generation: u64,
    value: String,
}

impl ValidationTicket {
    pub fn field(&self) -> Field {
        self.field
    }
}

/// Handle for one in-flight submit attempt.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    generation: u64,
}

/// Checkbox row of a [`FormView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingView {
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Render-ready snapshot derived entirely from owned form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<ToppingView>,
    pub errors: FieldErrors,
    pub submit_enabled: bool,
    pub banner: Option<Banner>,
}

/// The order form's complete state.
#[derive(Debug, Default)]
pub struct OrderForm {
    draft: OrderDraft,
    errors: FieldErrors,
    submit_enabled: bool,
    banner: Option<Banner>,
    full_name_generation: u64,
    size_generation: u64,
    submit_generation: u64,
}

impl OrderForm {
    /// A fresh form: empty draft, no errors, submit disabled, no banner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether submission is currently permitted: `fullName` and `size`
    /// both satisfy their rules, toppings notwithstanding.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Record a text/select change: write the raw value into the draft and
    /// start validation of that field only.
    ///
    /// Enablement is recomputed immediately from the draft; the field's
    /// stored error changes only once the returned ticket is resolved.
    /// Other fields' errors are untouched.
    pub fn set_field(&mut self, field: Field, value: &str) -> ValidationTicket {
        match field {
            Field::FullName => self.draft.full_name = value.to_string(),
            Field::Size => self.draft.size = value.to_string(),
        }
        let generation = self.bump_field_generation(field);
        self.submit_enabled = validate::form_is_valid(&self.draft);
        ValidationTicket {
            field,
            generation,
            value: value.to_string(),
        }
    }

    /// Complete a field validation started by [`set_field`](Self::set_field).
    ///
    /// Returns `false` and leaves state untouched when the ticket has been
    /// superseded by a later change to the same field.
    pub fn resolve_validation(&mut self, ticket: &ValidationTicket) -> bool {
        if ticket.generation != self.field_generation(ticket.field) {
            return false;
        }
        self.errors
            .set(ticket.field, validate::validate_field(ticket.field, &ticket.value).err());
        true
    }

    /// Record a topping checkbox being checked. Appends the id unless it is
    /// already present; re-checking is a no-op. Unchecking is not wired to
    /// remove an id, so there is no removal path.
    pub fn check_topping(&mut self, id: &str) {
        if !self.draft.toppings.iter().any(|t| t == id) {
            self.draft.toppings.push(id.to_string());
        }
        self.submit_enabled = validate::form_is_valid(&self.draft);
    }

    /// Start a submit attempt.
    ///
    /// Returns `None` while the form is invalid (the submit control is
    /// disabled). Otherwise clears the banner and returns a ticket that a
    /// later [`resolve_submit`](Self::resolve_submit) must present; a
    /// newer `begin_submit` supersedes any ticket still in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.submit_enabled {
            return None;
        }
        self.banner = None;
        self.submit_generation += 1;
        Some(SubmitTicket {
            generation: self.submit_generation,
        })
    }

    /// Complete a submit attempt with the outcome parsed from the server
    /// response.
    ///
    /// An accepted order sets the success banner and resets draft and
    /// errors to empty; a rejected one sets the failure banner and leaves
    /// the draft as entered for correction. A superseded ticket is
    /// discarded and `false` is returned.
    pub fn resolve_submit(&mut self, ticket: &SubmitTicket, outcome: SubmitOutcome) -> bool {
        if ticket.generation != self.submit_generation {
            return false;
        }
        match outcome {
            SubmitOutcome::Accepted { message } => {
                self.banner = Some(Banner::Success(message));
                self.draft = OrderDraft::default();
                self.errors = FieldErrors::default();
                self.submit_enabled = validate::form_is_valid(&self.draft);
            }
            SubmitOutcome::Rejected { message } => {
                self.banner = Some(Banner::Failure(message));
            }
        }
        true
    }

    /// Snapshot the current state for rendering. The checkbox list is the
    /// static catalog joined with the draft's checked ids.
    pub fn view(&self) -> FormView {
        FormView {
            full_name: self.draft.full_name.clone(),
            size: self.draft.size.clone(),
            toppings: TOPPINGS
                .iter()
                .map(|t| ToppingView {
                    id: t.id,
                    label: t.label,
                    checked: self.draft.toppings.iter().any(|id| id == t.id),
                })
                .collect(),
            errors: self.errors,
            submit_enabled: self.submit_enabled,
            banner: self.banner.clone(),
        }
    }

    fn field_generation(&self, field: Field) -> u64 {
        match field {
            Field::FullName => self.full_name_generation,
            Field::Size => self.size_generation,
        }
    }

    fn bump_field_generation(&mut self, field: Field) -> u64 {
        let slot = match field {
            Field::FullName => &mut self.full_name_generation,
            Field::Size => &mut self.size_generation,
        };
        *slot += 1;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{FULL_NAME_TOO_SHORT, SIZE_INCORRECT};

    /// Change a field and resolve its validation in one step, the way a
    /// host with no pending edits would.
    fn set_and_validate(form: &mut OrderForm, field: Field, value: &str) {
        let ticket = form.set_field(field, value);
        assert!(form.resolve_validation(&ticket));
    }

    fn valid_form() -> OrderForm {
        let mut form = OrderForm::new();
        set_and_validate(&mut form, Field::FullName, "Alice");
        set_and_validate(&mut form, Field::Size, "M");
        form
    }

    #[test]
    fn new_form_is_empty_and_disabled() {
        let form = OrderForm::new();
        assert_eq!(form.draft(), &OrderDraft::default());
        assert!(form.errors().is_empty());
        assert!(!form.submit_enabled());
        assert!(form.banner().is_none());
    }

    #[test]
    fn short_name_shows_error_and_keeps_submit_disabled() {
        let mut form = OrderForm::new();
        set_and_validate(&mut form, Field::FullName, "Al");
        set_and_validate(&mut form, Field::Size, "M");
        assert_eq!(form.errors().full_name, Some(FULL_NAME_TOO_SHORT));
        assert_eq!(form.errors().size, None);
        assert!(!form.submit_enabled());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn submit_enables_once_both_fields_valid() {
        let mut form = OrderForm::new();
        set_and_validate(&mut form, Field::FullName, "Alice");
        assert!(!form.submit_enabled());
        set_and_validate(&mut form, Field::Size, "M");
        assert!(form.submit_enabled());
    }

    #[test]
    fn enablement_tracks_draft_not_resolved_errors() {
        // The flag derives from the draft itself, so it updates even while
        // the field's validation is still in flight.
        let mut form = valid_form();
        let _pending = form.set_field(Field::Size, "");
        assert!(!form.submit_enabled());
        assert_eq!(form.errors().size, None);
    }

    #[test]
    fn changing_one_field_keeps_the_others_error() {
        let mut form = OrderForm::new();
        set_and_validate(&mut form, Field::FullName, "Al");
        set_and_validate(&mut form, Field::Size, "M");
        assert_eq!(form.errors().full_name, Some(FULL_NAME_TOO_SHORT));

        set_and_validate(&mut form, Field::Size, "X");
        assert_eq!(form.errors().size, Some(SIZE_INCORRECT));
        assert_eq!(form.errors().full_name, Some(FULL_NAME_TOO_SHORT));
    }

    #[test]
    fn stale_validation_is_discarded_regardless_of_resolution_order() {
        let mut form = OrderForm::new();
        let stale = form.set_field(Field::FullName, "Al");
        let fresh = form.set_field(Field::FullName, "Alice");

        // Stale first: ignored, fresh applies.
        assert!(!form.resolve_validation(&stale));
        assert!(form.resolve_validation(&fresh));
        assert_eq!(form.errors().full_name, None);

        // Fresh first, stale last: the late stale result must not clobber.
        let stale = form.set_field(Field::FullName, "Al");
        let fresh = form.set_field(Field::FullName, "Alice");
        assert!(form.resolve_validation(&fresh));
        assert!(!form.resolve_validation(&stale));
        assert_eq!(form.errors().full_name, None);
    }

    #[test]
    fn tickets_are_scoped_per_field() {
        let mut form = OrderForm::new();
        let name_ticket = form.set_field(Field::FullName, "Al");
        let _size_ticket = form.set_field(Field::Size, "M");
        // A size change must not invalidate the pending fullName ticket.
        assert!(form.resolve_validation(&name_ticket));
        assert_eq!(form.errors().full_name, Some(FULL_NAME_TOO_SHORT));
    }

    #[test]
    fn checking_a_topping_twice_is_idempotent() {
        let mut form = OrderForm::new();
        form.check_topping("1");
        form.check_topping("4");
        form.check_topping("1");
        assert_eq!(form.draft().toppings, vec!["1".to_string(), "4".to_string()]);
    }

    #[test]
    fn toppings_do_not_gate_submission() {
        let mut form = valid_form();
        assert!(form.submit_enabled());
        form.check_topping("3");
        assert!(form.submit_enabled());
    }

    #[test]
    fn accepted_submit_sets_banner_and_resets_state() {
        let mut form = valid_form();
        form.check_topping("2");
        let ticket = form.begin_submit().unwrap();
        assert!(form.resolve_submit(
            &ticket,
            SubmitOutcome::Accepted { message: "ok".to_string() }
        ));
        assert_eq!(form.banner(), Some(&Banner::Success("ok".to_string())));
        assert_eq!(form.draft(), &OrderDraft::default());
        assert!(form.errors().is_empty());
        assert!(!form.submit_enabled());
    }

    #[test]
    fn rejected_submit_sets_banner_and_preserves_draft() {
        let mut form = valid_form();
        form.check_topping("5");
        let before = form.draft().clone();
        let ticket = form.begin_submit().unwrap();
        assert!(form.resolve_submit(
            &ticket,
            SubmitOutcome::Rejected { message: "size is required".to_string() }
        ));
        assert_eq!(
            form.banner(),
            Some(&Banner::Failure("size is required".to_string()))
        );
        assert_eq!(form.draft(), &before);
        assert!(form.submit_enabled());
    }

    #[test]
    fn new_attempt_clears_banner_and_supersedes_old_ticket() {
        let mut form = valid_form();
        let first = form.begin_submit().unwrap();
        let second = form.begin_submit().unwrap();
        assert!(form.banner().is_none());

        // The superseded attempt resolves late; nothing may change.
        assert!(!form.resolve_submit(
            &first,
            SubmitOutcome::Accepted { message: "stale".to_string() }
        ));
        assert!(form.banner().is_none());
        assert_eq!(form.draft().full_name, "Alice");

        assert!(form.resolve_submit(
            &second,
            SubmitOutcome::Accepted { message: "ok".to_string() }
        ));
        assert_eq!(form.banner(), Some(&Banner::Success("ok".to_string())));
    }

    #[test]
    fn view_reflects_state_only() {
        let mut form = OrderForm::new();
        set_and_validate(&mut form, Field::FullName, "Al");
        form.check_topping("3");

        let view = form.view();
        assert_eq!(view.full_name, "Al");
        assert_eq!(view.size, "");
        assert_eq!(view.errors.full_name, Some(FULL_NAME_TOO_SHORT));
        assert!(!view.submit_enabled);
        assert!(view.banner.is_none());

        let checked: Vec<&str> =
            view.toppings.iter().filter(|t| t.checked).map(|t| t.id).collect();
        assert_eq!(checked, vec!["3"]);
        assert_eq!(view.toppings.len(), 5);
        assert_eq!(view.toppings[0].label, "Pepperoni");
    }
}
