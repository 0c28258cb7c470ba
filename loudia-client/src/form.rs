//! Reservation form state
//!
//! The explicit replacement for the page's DOM field lookups: the
//! validator and submitter receive a `ReservationForm` handle instead
//! of querying elements themselves.

use chrono::{Duration, NaiveDate};
use shared::{ReservationRequest, ReservationStatus};

/// Earliest selectable reservation date: two days from today.
///
/// The page applies this as the date input's `min` attribute, so the
/// value never reaches the validator; it is the input-time constraint.
pub fn min_reservation_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(2)
}

/// Current values of the reservation form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    /// Guest's full name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Guest count selection value, e.g. "2"
    pub guests: String,
    /// Selected date, YYYY-MM-DD
    pub date: String,
    /// Selected time slot, e.g. "18:00"
    pub time: String,
    /// Optional free-text request
    pub message: String,
}

impl ReservationForm {
    /// Build the create request for the current values.
    ///
    /// Values are taken as-is; the validator has already vetted them.
    /// Status is always `pending` for client-created records.
    pub fn to_request(&self) -> ReservationRequest {
        ReservationRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            guests: self.guests.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            message: self.message.clone(),
            status: ReservationStatus::Pending,
        }
    }

    /// Clear every field back to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_reservation_date_is_two_days_out() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        assert_eq!(
            min_reservation_date(today),
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
        );
    }

    #[test]
    fn test_min_reservation_date_rolls_over_month() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            min_reservation_date(today),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_to_request_forces_pending_status() {
        let form = ReservationForm {
            name: "Taro".to_string(),
            phone: "090-1234-5678".to_string(),
            email: "taro@example.com".to_string(),
            guests: "2".to_string(),
            date: "2026-09-01".to_string(),
            time: "18:00".to_string(),
            message: "窓際の席を希望します".to_string(),
        };

        let request = form.to_request();
        assert_eq!(request.status, ReservationStatus::Pending);
        assert_eq!(request.name, "Taro");
        assert_eq!(request.message, "窓際の席を希望します");
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut form = ReservationForm {
            name: "Taro".to_string(),
            phone: "090-1234-5678".to_string(),
            email: "taro@example.com".to_string(),
            guests: "4".to_string(),
            date: "2026-09-01".to_string(),
            time: "19:00".to_string(),
            message: "note".to_string(),
        };

        form.reset();
        assert_eq!(form, ReservationForm::default());
    }
}
