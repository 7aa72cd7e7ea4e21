//! Sequential composition of tasks.
//!
//! [`compose`] invokes tasks one at a time, in order, awaiting each before
//! the next is admitted, and collects their results in the same order. There
//! is no concurrency: at most one task is ever in flight.
//!
//! # Semantics
//!
//! ```text
//! compose([f1, f2, ..., fn]):
//!   results ← []
//!   for f in [f1, f2, ..., fn]:
//!     result ← await(f)        // Err stops here; f(k+1..n) never invoked
//!     results.push(result)
//!   return results
//! ```
//!
//! The function form takes a homogeneous list of tasks. For tasks whose
//! result types differ, the [`compose!`](crate::compose!) macro produces a
//! tuple instead.

use std::future::Future;

/// Runs tasks sequentially and returns their results in input order.
///
/// Zero tasks yield an empty `Vec`. On the first task failure the error is
/// returned unchanged and no later task is invoked.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let results = async_ease::compose((1..=3).map(|i| move || async move { Ok(i * 10) })).await?;
/// assert_eq!(results, vec![10, 20, 30]);
/// # Ok(()) }
/// ```
pub async fn compose<F, Fut, T, E>(tasks: impl IntoIterator<Item = F>) -> Result<Vec<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let tasks = tasks.into_iter();
    let mut results = Vec::with_capacity(tasks.size_hint().0);
    for task in tasks {
        results.push(task().await?);
    }
    Ok(results)
}

/// Sequentially composes tasks with differing result types into a tuple.
///
/// Each argument is a zero-argument closure returning a future of
/// `Result<T, E>`; all tasks must share the error type `E`. Tasks run in
/// argument order, and a failure stops the chain before later tasks are
/// invoked.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let composed: Result<(i32, &str), &str> = async_ease::compose!(
///     || async { Ok(42) },
///     || async { Ok("forty-two") },
/// )
/// .await;
/// let (n, s) = composed?;
/// assert_eq!(n, 42);
/// assert_eq!(s, "forty-two");
/// # Ok(()) }
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        ::core::future::ready(::core::result::Result::Ok(()))
    };
    ($($task:expr),+ $(,)?) => {
        async {
            ::core::result::Result::Ok((
                $(
                    match ($task)().await {
                        ::core::result::Result::Ok(value) => value,
                        ::core::result::Result::Err(error) => {
                            return ::core::result::Result::Err(error);
                        }
                    },
                )+
            ))
        }
    };
}
