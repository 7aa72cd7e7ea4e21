//! Timer-based suspend.
//!
//! [`delay`] pauses the current future for at least the given duration. It
//! defers to the host runtime's timer, so precision and minimum granularity
//! are whatever the runtime provides.
//!
//! # Cancel Safety
//!
//! Dropping the returned future simply stops the wait with no side effects;
//! the delay can be recreated with the same or a different duration.

use std::time::Duration;

/// Suspends the current future for at least `duration`.
///
/// A zero duration still yields to the scheduler at least once. Never fails.
///
/// # Example
///
/// ```
/// # async fn demo() {
/// use std::time::Duration;
///
/// async_ease::delay(Duration::from_millis(50)).await;
/// # }
/// ```
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}
