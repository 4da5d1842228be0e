//! Tests for user controller endpoints.
//!
//! Covers profile retrieval, profile updates and the recent-search list.

mod get_profile;
mod update_profile;
