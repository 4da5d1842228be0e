//! Test utilities for building the full application state around the mock provider

use savora::{model::app::AppState, places::PlacesClient, util::jwt::TokenIssuer};
use savora_test_utils::{
    constant::{TEST_API_KEY, TEST_JWT_SECRET},
    TestSetup,
};

/// Extension trait for [`TestSetup`] to derive the state handlers take.
///
/// The places client points at the setup's mockito server, so tests that
/// never register a mock simply get provider errors.
pub trait TestSetupExt {
    fn app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn app_state(&self) -> AppState {
        let places = PlacesClient::builder()
            .base_url(&self.server.url())
            .api_key(TEST_API_KEY)
            .build();

        AppState {
            db: self.state.db.clone(),
            places,
            tokens: TokenIssuer::new(TEST_JWT_SECRET),
        }
    }
}
