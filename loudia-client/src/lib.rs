//! Loudia website client
//!
//! Client-side logic of the Loudia restaurant website, decoupled from
//! the page itself: reservation form validation and submission against
//! the remote Table API, transient notification banners, and the
//! front-page news feed.
//!
//! Components receive their collaborators explicitly (transport, form
//! handle, notification sink, news panel) instead of looking anything
//! up globally.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod messages;
pub mod news;
pub mod notify;
pub mod reservation;
pub mod validate;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ValidationError};
pub use form::ReservationForm;
pub use http::{HttpClient, NetworkHttpClient};
pub use news::{NewsLoader, NewsPanel};
pub use notify::{Notification, NotificationKind, NotificationSink, Notifier, TracingSink};
pub use reservation::{ReservationClient, SubmitOutcome};
