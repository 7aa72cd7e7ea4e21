//! Pass-through awaiter.

use std::future::Future;

/// Invokes a single task and returns its result unchanged.
///
/// Success and failure both pass straight through; this is the identity
/// element of the helpers in this crate, useful where an API expects a task
/// wrapper.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let value = async_ease::run(|| async { Ok("test") }).await?;
/// assert_eq!(value, "test");
/// # Ok(()) }
/// ```
pub async fn run<F, Fut, T, E>(task: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    task().await
}
