//! Tests for administration controller endpoints.
//!
//! Covers account listing, role, ban and review-permission changes, account
//! deletion, usage statistics and local place creation. The guard rules for
//! administrator targets are exercised per endpoint.

mod create_place;
mod delete_account;
mod get_stats;
mod update_ban;
mod update_review_permission;
mod update_role;
