//! Timeout wrapper for browser operations
//!
//! Every suspension point of an extraction goes through here so a stalled
//! page cannot hold a browser indefinitely.

use std::future::Future;
use std::time::Duration;

use crate::error::ExtractionError;

/// Run `operation` with an upper bound, mapping both failure modes into
/// [`ExtractionError`].
///
/// * `timed_out` - builds the error when the bound is hit
/// * `failed` - variant constructor for an operation error (cause chain kept)
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout: Duration,
    timed_out: impl FnOnce() -> ExtractionError,
    failed: fn(String) -> ExtractionError,
) -> Result<T, ExtractionError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ExtractionError::from_chain(failed, &e)),
        Err(_) => Err(timed_out()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn elapsed_maps_to_timeout_error() {
        let result: Result<(), _> = with_page_timeout(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            },
            Duration::from_secs(30),
            || ExtractionError::NavigationTimeout(30),
            ExtractionError::Navigation,
        )
        .await;
        assert_eq!(result, Err(ExtractionError::NavigationTimeout(30)));
    }

    #[tokio::test]
    async fn operation_error_keeps_cause() {
        let result: Result<(), _> = with_page_timeout(
            async { Err(anyhow::anyhow!("net::ERR_NAME_NOT_RESOLVED")) },
            Duration::from_secs(30),
            || ExtractionError::NavigationTimeout(30),
            ExtractionError::Navigation,
        )
        .await;
        assert_eq!(
            result,
            Err(ExtractionError::Navigation("net::ERR_NAME_NOT_RESOLVED".into()))
        );
    }

    #[tokio::test]
    async fn success_passes_through() {
        let value = with_page_timeout(
            async { Ok(7) },
            Duration::from_secs(1),
            || ExtractionError::Snapshot("timeout".into()),
            ExtractionError::Snapshot,
        )
        .await;
        assert_eq!(value, Ok(7));
    }
}
