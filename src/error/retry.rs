use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failure)
    Retry,
    /// Failed permanently (bad request or programming error)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Provider failures are all treated as transient inside the
            // reconciliation loop: timeouts, rate limiting, non-OK statuses,
            // and incomplete payloads can each clear up on a later attempt.
            Self::PlacesError(_) => ErrorRetryStrategy::Retry,

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition and connection drops are transient
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // Everything else (constraint violations, query errors,
                    // conversion failures) will not resolve by retrying
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Domain rejections are deliberate answers, not failures
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::AdminError(_) => ErrorRetryStrategy::Fail,
            Self::FavoriteError(_) => ErrorRetryStrategy::Fail,

            // Configuration and socket problems require operator intervention
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,

            // Token and hashing errors indicate bad input or a bug
            Self::JwtError(_) => ErrorRetryStrategy::Fail,
            Self::HashError(_) => ErrorRetryStrategy::Fail,
            Self::JoinError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
