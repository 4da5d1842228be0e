//! Business logic between the request handlers and the data layer.
//!
//! Services borrow the shared database handle and clients from
//! [`crate::model::app::AppState`] per request. The favorite flow is the
//! only one that retries provider calls; search degrades instead, and
//! everything else answers in a single round trip.

pub mod account;
pub mod admin;
pub mod auth;
pub mod favorite;
pub mod place;
pub mod retry;
