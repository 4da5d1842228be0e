//! Test configuration constants shared across all tests.
//!
//! These values are not real credentials but placeholder values for testing
//! purposes. Account fixtures hash [`TEST_PASSWORD`] and [`TEST_PIN`] so that
//! login and unlock flows can be exercised with known inputs.

/// Password every fixture account is created with.
pub static TEST_PASSWORD: &str = "test-password-123";

/// Recovery PIN every fixture account is created with.
pub static TEST_PIN: &str = "1234";

/// Signing secret for test token issuers.
pub static TEST_JWT_SECRET: &str = "test-secret";

/// Placeholder provider API key. Not a real credential.
pub static TEST_API_KEY: &str = "test-key";

/// Bcrypt cost used for fixture hashes; the minimum keeps test setup fast.
pub static TEST_BCRYPT_COST: u32 = 4;
