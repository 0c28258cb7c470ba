//! Reservation submission
//!
//! Wires the validator, the Table API create call and the notifier into
//! the form's submit handling. One create request per accepted
//! submission; a rejected form never reaches the network.

use crate::messages;
use crate::notify::{NotificationSink, Notifier};
use crate::validate::validate;
use crate::{ClientError, HttpClient, ReservationForm, ValidationError};
use std::sync::Arc;

/// Path of the reservation collection resource
pub const RESERVATIONS_PATH: &str = "tables/reservations";

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The API accepted the request; the form has been reset
    Accepted,
    /// Validation rejected the form; nothing was sent
    Rejected(ValidationError),
    /// The API refused the request or the transport failed; the form
    /// keeps the user's input for correction or retry
    Failed(ClientError),
}

/// Submits validated reservations to the Table API.
pub struct ReservationClient<H, S> {
    http: Arc<H>,
    notifier: Notifier<S>,
}

impl<H: HttpClient, S: NotificationSink> ReservationClient<H, S> {
    pub fn new(http: Arc<H>, notifier: Notifier<S>) -> Self {
        Self { http, notifier }
    }

    /// Handle one submit event.
    ///
    /// No retry and no idempotency key: pressing submit twice creates
    /// two records. The response body is ignored beyond presence.
    pub async fn handle_submit(&self, form: &mut ReservationForm) -> SubmitOutcome {
        if let Err(rejection) = validate(form) {
            tracing::debug!(rejection = %rejection, "reservation form rejected");
            self.notifier.error(rejection.user_message());
            return SubmitOutcome::Rejected(rejection);
        }

        let request = form.to_request();
        match self
            .http
            .post::<serde_json::Value, _>(RESERVATIONS_PATH, &request)
            .await
        {
            Ok(_) => {
                tracing::info!(
                    date = %request.date,
                    time = %request.time,
                    guests = %request.guests,
                    "reservation submitted"
                );
                self.notifier.success(messages::RESERVATION_ACCEPTED);
                form.reset();
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::error!(error = %err, "reservation submission failed");
                self.notifier.error(messages::RESERVATION_FAILED);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
