//! Try/recover wrapper.
//!
//! [`catch_error`] is the single recovery point of this crate: it converts a
//! task failure into a substitute success via a caller-supplied async
//! handler. If the handler itself fails, that failure propagates instead.
//! On success the handler is never invoked.

use std::future::Future;

/// Runs `task`, routing any failure through `handler`.
///
/// The handler receives the task's error by value and produces a fallback
/// result of the same type.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let value = async_ease::catch_error(
///     || async { Err("Test error") },
///     |_error| async { Ok("Error handled") },
/// )
/// .await?;
/// assert_eq!(value, "Error handled");
/// # Ok(()) }
/// ```
pub async fn catch_error<F, Fut, H, HFut, T, E>(task: F, handler: H) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E) -> HFut,
    HFut: Future<Output = Result<T, E>>,
{
    match task().await {
        Ok(value) => Ok(value),
        Err(error) => handler(error).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn handles_a_failing_task() {
        let value: Result<&str, &str> = catch_error(
            || async { Err("Test error") },
            |error| async move {
                assert_eq!(error, "Test error");
                Ok("Error handled")
            },
        )
        .await;
        assert_eq!(value.unwrap(), "Error handled");
    }

    #[tokio::test]
    async fn handler_not_invoked_on_success() {
        let handled = AtomicBool::new(false);
        let handled = &handled;
        let value: Result<i32, &str> = catch_error(
            || async { Ok(5) },
            |_error| async move {
                handled.store(true, Ordering::SeqCst);
                Ok(0)
            },
        )
        .await;

        assert_eq!(value.unwrap(), 5);
        assert!(!handled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn failing_handler_propagates_its_own_error() {
        let value: Result<i32, &str> = catch_error(
            || async { Err("original") },
            |_error| async { Err("handler failed too") },
        )
        .await;
        assert_eq!(value.unwrap_err(), "handler failed too");
    }
}
