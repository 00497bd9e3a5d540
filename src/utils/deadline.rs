//! Upper bound on the duration of a single store call.

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Runs a store operation, failing with [`AppError::StoreUnavailable`] if it
/// does not finish within `limit`.
///
/// The inner future is dropped on timeout. Store writes are single atomic
/// statements, so a dropped call either committed fully or not at all.
pub async fn within<T, F>(limit: Duration, operation: &'static str, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_ms = limit.as_millis() as u64, "Store call timed out");
            Err(AppError::store(format!(
                "{} timed out after {}ms",
                operation,
                limit.as_millis()
            )))
        }
    }
}
