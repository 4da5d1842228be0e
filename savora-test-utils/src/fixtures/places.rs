//! Places provider HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that
//! simulate the places provider API. Detail endpoints are matched on the
//! `place_id` query parameter so multiple places can be mocked side by side;
//! every endpoint verifies it was called the expected number of times.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::TestSetup;

impl TestSetup {
    pub fn places<'a>(&'a mut self) -> PlacesFixtures<'a> {
        PlacesFixtures { setup: self }
    }
}

pub struct PlacesFixtures<'a> {
    setup: &'a mut TestSetup,
}

fn details_ok_body(name: &str) -> serde_json::Value {
    json!({
        "status": "OK",
        "result": {
            "name": name,
            "formatted_address": "Calle Mayor 1, Madrid",
            "geometry": { "location": { "lat": 40.4168, "lng": -3.7038 } },
            "rating": 4.5,
            "user_ratings_total": 120,
            "price_level": 2,
            "types": ["restaurant"],
            "photos": [{ "photo_reference": "photo-ref-1" }]
        }
    })
}

fn search_result(place_id: &str, name: &str, types: &[&str]) -> serde_json::Value {
    json!({
        "place_id": place_id,
        "name": name,
        "formatted_address": "Calle Mayor 1, Madrid",
        "geometry": { "location": { "lat": 40.4168, "lng": -3.7038 } },
        "rating": 4.3,
        "user_ratings_total": 57,
        "price_level": 1,
        "types": types
    })
}

impl<'a> PlacesFixtures<'a> {
    /// Create a mock detail endpoint answering OK for the given place.
    ///
    /// # Arguments
    /// - `place_id` - Provider place id the endpoint is matched on
    /// - `name` - Name returned in the detail payload
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_details_endpoint(
        &mut self,
        place_id: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), place_id.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(details_ok_body(name).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock detail endpoint answering with a provider status such
    /// as `NOT_FOUND` or `OVER_QUERY_LIMIT`.
    pub fn create_details_status_endpoint(
        &mut self,
        place_id: &str,
        status: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), place_id.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": status }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock detail endpoint answering OK with a result that has no
    /// name field.
    pub fn create_details_nameless_endpoint(
        &mut self,
        place_id: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), place_id.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": "OK",
                    "result": { "formatted_address": "Calle Mayor 1, Madrid" }
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// Create a mock detail endpoint that rate-limits the first `failures`
    /// calls and answers OK afterwards.
    ///
    /// # Arguments
    /// - `place_id` - Provider place id the endpoint is matched on
    /// - `failures` - Number of leading calls answered with `OVER_QUERY_LIMIT`
    /// - `name` - Name returned once the endpoint recovers
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_details_flaky_endpoint(
        &mut self,
        place_id: &str,
        failures: usize,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        let calls = Arc::new(AtomicUsize::new(0));
        let ok_body = details_ok_body(name).to_string().into_bytes();
        let limited_body = json!({ "status": "OVER_QUERY_LIMIT" }).to_string().into_bytes();

        self.setup
            .server
            .mock("GET", "/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), place_id.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |_| {
                if calls.fetch_add(1, Ordering::SeqCst) < failures {
                    limited_body.clone()
                } else {
                    ok_body.clone()
                }
            })
            .expect(expected_requests)
            .create()
    }

    /// Create a mock text search endpoint returning the given places, all
    /// typed as restaurants.
    pub fn create_search_endpoint(
        &mut self,
        places: Vec<(&str, &str)>,
        expected_requests: usize,
    ) -> Mock {
        let results: Vec<serde_json::Value> = places
            .into_iter()
            .map(|(place_id, name)| search_result(place_id, name, &["restaurant"]))
            .collect();

        self.setup
            .server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "OK", "results": results }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock text search endpoint with an explicit type list per
    /// place, for exercising the food-category filter.
    pub fn create_search_typed_endpoint(
        &mut self,
        places: Vec<(&str, &str, Vec<&str>)>,
        expected_requests: usize,
    ) -> Mock {
        let results: Vec<serde_json::Value> = places
            .into_iter()
            .map(|(place_id, name, types)| search_result(place_id, name, &types))
            .collect();

        self.setup
            .server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "OK", "results": results }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock text search endpoint answering with a provider status
    /// such as `ZERO_RESULTS` or `REQUEST_DENIED`.
    pub fn create_search_status_endpoint(
        &mut self,
        status: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": status }).to_string())
            .expect(expected_requests)
            .create()
    }
}
