//! Reservation form validation
//!
//! Pure checks over the current field values. No side effects and no
//! field mutation; the caller routes a rejection's fixed message
//! through the notifier.

use crate::{ReservationForm, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

/// Basic local@domain.tld shape
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Digits and hyphens only
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d-]+$").expect("phone pattern"));

/// Validate the six required fields of the reservation form.
///
/// Emptiness is checked after trimming surrounding whitespace; the
/// optional free-text message is not inspected. Checks run in order:
/// completeness, then email shape, then phone charset.
pub fn validate(form: &ReservationForm) -> Result<(), ValidationError> {
    let required = [
        form.name.trim(),
        form.phone.trim(),
        form.email.trim(),
        form.guests.trim(),
        form.date.trim(),
        form.time.trim(),
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingRequired);
    }

    if !EMAIL_RE.is_match(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    if !PHONE_RE.is_match(form.phone.trim()) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}
