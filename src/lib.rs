//! Savora is a restaurant discovery backend. It proxies a places provider
//! behind a catalog cache, lets accounts save favorites, and guards logins
//! with a failed-attempt lockout that is lifted with a recovery PIN.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod places;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
