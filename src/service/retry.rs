//! Retry logic with exponential backoff for service operations.
//!
//! Provides the `RetryContext` used to run operations that depend on the
//! places provider. A cache persists between attempts so work that already
//! succeeded (a completed fetch, a cached row) is not redone, and the error
//! system decides which failures are worth retrying.

use std::time::Duration;

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic and caching.
///
/// Retries transient failures with exponential backoff: 3 attempts by
/// default, sleeping 1s then 2s between them. The generic cache type `T`
/// carries data across attempts; use `()` when there is nothing to cache.
///
/// Only errors whose [`ErrorRetryStrategy`] is `Retry` are attempted again;
/// permanent failures return immediately. The backoff sleep is async, so a
/// waiting request never stalls the runtime for other requests.
pub struct RetryContext<T> {
    /// Cache reused between attempts to skip work that already succeeded
    cache: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in seconds (doubles with each retry)
    initial_backoff_secs: u64,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

    pub fn new() -> Self {
        Self {
            cache: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_secs: Self::DEFAULT_INITIAL_BACKOFF_SECS,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// Runs the operation up to `max_attempts` times, sleeping between
    /// attempts (1s, 2s, ...). The closure receives the cache so a retry can
    /// pick up where the failed attempt left off.
    ///
    /// ```ignore
    /// let mut ctx: RetryContext<Option<PlaceDetails>> = RetryContext::new();
    /// let client = client.clone();
    ///
    /// ctx.execute_with_retry("details fetch for place-1", |cache| {
    ///     let client = client.clone();
    ///
    ///     Box::pin(async move {
    ///         if cache.is_none() {
    ///             *cache = Some(client.place_details("place-1").await?);
    ///         }
    ///         Ok(cache.clone())
    ///     })
    /// })
    /// .await?;
    /// ```
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = operation(&mut self.cache).await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_secs = self.initial_backoff_secs * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_secs(backoff_secs);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T> Default for RetryContext<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
