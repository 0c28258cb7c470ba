//! Reservation wire types
//!
//! A `ReservationRequest` is built once per submit attempt and posted to
//! the `tables/reservations` collection. It is never mutated after
//! construction: one request, one submission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a reservation record.
///
/// The website only ever creates records in `Pending`; staff move them
/// to `Confirmed` or `Cancelled` on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Create payload for the reservation collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Guest's full name
    pub name: String,
    /// Contact phone, digits and hyphens
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Guest count selection value, e.g. "2"
    pub guests: String,
    /// Reservation date, YYYY-MM-DD
    pub date: String,
    /// Reservation time slot, e.g. "18:00"
    pub time: String,
    /// Optional free-text request
    pub message: String,
    /// Always `Pending` for client-created records
    pub status: ReservationStatus,
}
