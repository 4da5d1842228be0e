//! Tests for place controller endpoints.
//!
//! Covers the text-search proxy, per-place details and the local catalog.

mod get_catalog_places;
mod get_local_places;
mod get_place_details;
mod search_places;
