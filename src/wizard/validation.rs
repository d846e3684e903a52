//! Per-step validation gates.
//!
//! The gates answer yes/no from a `FormState` snapshot. There are no
//! field-level errors; the controller shows one generic notice.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{FormState, PHONE_AREA_MAX, PHONE_LINE_MAX, PHONE_PREFIX_MAX};

/// "Valid e-mail address" as browsers check `type=email` inputs.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Both step-1 choices are made and the amount mirror is a finite number.
///
/// No magnitude checks: any parseable amount passes.
pub fn can_advance_from_step1(state: &FormState) -> bool {
    let amount = state.amount().trim();
    state.homeowner_ontario().is_some()
        && state.need_help().is_some()
        && !amount.is_empty()
        && amount.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Step-2 required fields are filled and the form's constraint set holds.
///
/// Email shape is left to [`satisfies_constraints`].
pub fn can_submit_step2(state: &FormState) -> bool {
    let required = [
        state.first_name(),
        state.last_name(),
        state.email(),
        state.phone_area(),
        state.phone_prefix(),
        state.phone_line(),
    ];
    required.into_iter().all(filled) && satisfies_constraints(state)
}

/// The whole form's input constraints: every required control filled, phone
/// segments within their maximum lengths, email shaped like an address.
pub fn satisfies_constraints(state: &FormState) -> bool {
    let choices_made = state.homeowner_ontario().is_some() && state.need_help().is_some();

    let text_required = [
        state.amount_display(),
        state.first_name(),
        state.last_name(),
        state.email(),
        state.phone_area(),
        state.phone_prefix(),
        state.phone_line(),
    ]
    .into_iter()
    .all(|v| !v.is_empty());

    let within_max = state.phone_area().chars().count() <= PHONE_AREA_MAX
        && state.phone_prefix().chars().count() <= PHONE_PREFIX_MAX
        && state.phone_line().chars().count() <= PHONE_LINE_MAX;

    choices_made && text_required && within_max && email_shaped(state.email())
}

fn email_shaped(value: &str) -> bool {
    // Browsers strip surrounding whitespace from email inputs before checking.
    EMAIL_SHAPE.is_match(value.trim())
}
