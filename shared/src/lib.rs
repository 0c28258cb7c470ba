//! Wire types for the Loudia Table API
//!
//! Request/response types shared between the website client and any
//! other consumer of the restaurant's remote collections.

pub mod news;
pub mod reservation;
pub mod response;

pub use news::NewsItem;
pub use reservation::{ReservationRequest, ReservationStatus};
pub use response::CollectionResponse;
