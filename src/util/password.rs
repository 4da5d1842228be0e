use bcrypt::DEFAULT_COST;

use crate::error::Error;

/// Hashes a password or recovery PIN.
///
/// bcrypt is CPU-bound, so the work runs on the blocking pool instead of
/// stalling the async runtime.
pub async fn hash(plain: &str) -> Result<String, Error> {
    let plain = plain.to_string();

    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, DEFAULT_COST)).await??;

    Ok(hashed)
}

/// Verifies a password or recovery PIN against its stored hash.
pub async fn verify(plain: &str, hashed: &str) -> Result<bool, Error> {
    let plain = plain.to_string();
    let hashed = hashed.to_string();

    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed)).await??;

    Ok(valid)
}
