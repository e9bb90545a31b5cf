//! Bounded race: run an operation concurrently with a deadline and resolve
//! with whichever finishes first.
//!
//! The loser is cancelled by drop. The auth flow uses this with a 30-second
//! limit, but nothing here knows what the operation does; any bounded
//! external call can reuse it.

use std::future::Future;
use std::time::Duration;

use crate::error::Timeout;

/// Race `op` against a timer of `limit`.
///
/// If the timer wins, the operation is dropped and the result is a
/// [`Timeout`] carrying `message`, converted into the caller's error type.
/// If the operation wins, its outcome is returned untouched and the timer
/// is dropped.
pub async fn with_timeout<T, E, F>(limit: Duration, message: &str, op: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<Timeout>,
{
    tokio::select! {
        outcome = op => outcome,
        () = tokio::time::sleep(limit) => {
            tracing::warn!(limit_secs = limit.as_secs(), "operation timed out");
            Err(Timeout::new(message).into())
        }
    }
}
