//! Test fixture modules for database and HTTP mock creation.
//!
//! Each submodule provides specialized fixtures for a different aspect of
//! the system:
//!
//! - `account` - accounts in every security state (user, admin, banned, guest)
//! - `catalog` - cached and locally curated place rows
//! - `favorite` - favorite rows linking accounts to places
//! - `places` - mock HTTP endpoints simulating the places provider

pub mod account;
pub mod catalog;
pub mod favorite;
pub mod places;
