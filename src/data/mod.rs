//! Data access layer.
//!
//! Repositories wrap the entity queries behind small structs generic over
//! [`sea_orm::ConnectionTrait`], so they run against the live database and
//! the in-memory SQLite used by tests alike. Concurrency-sensitive writes
//! (lockout counters, insert-or-fetch) live here, next to the schema that
//! backs them.

pub mod account;
pub mod favorite;
pub mod place;
pub mod search_history;
