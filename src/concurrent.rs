//! Bounded-concurrency executor.
//!
//! [`concurrent`] runs many tasks while capping how many are in flight at
//! once, and returns every result in original input order no matter which
//! task finishes first.
//!
//! # Semantics
//!
//! ```text
//! concurrent([f1, ..., fn], limit):
//!   in_flight ← {}
//!   slots ← [empty; n]
//!   loop:
//!     while |in_flight| < limit and tasks remain:
//!       admit next task in input order into in_flight
//!     if in_flight is empty: break
//!     (i, outcome) ← await any one settlement   // settled task leaves in_flight
//!     if outcome is Err: return Err             // still-pending tasks dropped
//!     slots[i] ← outcome
//!   return slots
//! ```
//!
//! # Admission Window
//!
//! A settled task leaves the in-flight set before the next admission is
//! checked against `limit`, so the number of admitted-but-unsettled tasks
//! never exceeds `limit` at any point in the run. `limit >= tasks.len()`
//! degenerates to full parallel execution; an empty task list resolves
//! immediately to an empty `Vec`.
//!
//! # Failure
//!
//! The first error observed resolves the call with that error, unchanged.
//! No further tasks are admitted past that point, and still-pending task
//! futures are dropped; a task that must survive the executor's failure
//! belongs on a spawned handle, not in this window.
//!
//! # Concurrency Model
//!
//! All tasks interleave on the caller's executor as part of this one
//! future; "concurrent" means interleaved, not parallel across cores. All
//! executor state is touched between suspension points of a single future,
//! so there is nothing to lock.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::trace;

/// Runs `tasks` with at most `limit` in flight, returning results in input
/// order.
///
/// `result[i]` is the value produced by `tasks[i]` regardless of completion
/// order. Tasks are admitted (invoked, side effects and all) in input order
/// as the window allows.
///
/// # Panics
///
/// Panics if `limit` is zero; a window that admits nothing can never make
/// progress.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// use std::time::Duration;
///
/// let tasks = [(40u64, 1), (30, 2), (20, 3), (10, 4)].map(|(ms, value)| {
///     move || async move {
///         async_ease::delay(Duration::from_millis(ms)).await;
///         Ok(value)
///     }
/// });
/// let results = async_ease::concurrent(tasks, 2).await?;
/// assert_eq!(results, vec![1, 2, 3, 4]);
/// # Ok(()) }
/// ```
pub async fn concurrent<F, Fut, T, E>(
    tasks: impl IntoIterator<Item = F>,
    limit: usize,
) -> Result<Vec<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    assert!(limit >= 1, "concurrency limit must be at least 1");

    let mut pending = tasks.into_iter().enumerate();
    let mut in_flight = FuturesUnordered::new();
    let mut slots: Vec<Option<T>> = Vec::new();

    loop {
        // Top up the window in input order. Admission invokes the task.
        while in_flight.len() < limit {
            let Some((index, task)) = pending.next() else {
                break;
            };
            slots.push(None);
            in_flight.push(async move { (index, task().await) });
            trace!(index, in_flight = in_flight.len(), "task admitted");
        }

        // Wait for any one settlement; `next` removes it from the window.
        let Some((index, settled)) = in_flight.next().await else {
            break;
        };
        match settled {
            Ok(value) => {
                trace!(index, in_flight = in_flight.len(), "task fulfilled");
                slots[index] = Some(value);
            }
            Err(error) => {
                trace!(index, "task failed; aborting the run");
                return Err(error);
            }
        }
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("admitted task settled exactly once"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn results_follow_input_order_not_completion_order() {
        let tasks = [(100u64, 1), (200, 2), (300, 3), (400, 4)].map(|(ms, value)| {
            move || async move {
                delay(Duration::from_millis(ms)).await;
                Ok::<i32, &str>(value)
            }
        });
        let results = concurrent(tasks, 2).await.unwrap();
        assert_eq!(results, vec![1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn later_tasks_can_finish_first() {
        let tasks = [(400u64, 1), (300, 2), (200, 3), (100, 4)].map(|(ms, value)| {
            move || async move {
                delay(Duration::from_millis(ms)).await;
                Ok::<i32, &str>(value)
            }
        });
        let results = concurrent(tasks, 2).await.unwrap();
        assert_eq!(results, vec![1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn never_exceeds_the_limit() {
        let current = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..10)
            .map(|i| {
                let current = Arc::clone(&current);
                let peak = Arc::clone(&peak);
                move || async move {
                    let now = current.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    delay(Duration::from_millis(10 + i)).await;
                    current.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, &str>(i)
                }
            })
            .collect();

        let results = concurrent(tasks, 3).await.unwrap();
        assert_eq!(results, (0..10).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn empty_input_resolves_immediately() {
        let tasks: Vec<fn() -> std::future::Ready<Result<i32, &'static str>>> = Vec::new();
        let results = concurrent(tasks, 4).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn limit_beyond_task_count_runs_everything_at_once() {
        let current = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..4)
            .map(|i| {
                let current = Arc::clone(&current);
                let peak = Arc::clone(&peak);
                move || async move {
                    let now = current.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    delay(Duration::from_millis(50)).await;
                    current.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, &str>(i)
                }
            })
            .collect();

        let results = concurrent(tasks, 100).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3]);
        assert_eq!(peak.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn first_failure_resolves_the_call() {
        let tasks: Vec<_> = (0..4)
            .map(|i| {
                move || async move {
                    delay(Duration::from_millis(10 * (i + 1))).await;
                    if i == 1 {
                        Err("task 1 failed")
                    } else {
                        Ok(i)
                    }
                }
            })
            .collect();

        let error = concurrent(tasks, 2).await.unwrap_err();
        assert_eq!(error, "task 1 failed");
    }

    #[tokio::test(start_paused = true)]
    async fn no_admissions_after_a_failure() {
        let invoked = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..4)
            .map(|i| {
                let invoked = Arc::clone(&invoked);
                move || async move {
                    invoked.fetch_add(1, Ordering::SeqCst);
                    delay(Duration::from_millis(10)).await;
                    if i == 1 { Err("boom") } else { Ok(i) }
                }
            })
            .collect();

        let error = concurrent(tasks, 1).await.unwrap_err();
        assert_eq!(error, "boom");
        // With a window of one, tasks 2 and 3 were never invoked.
        assert_eq!(invoked.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    #[should_panic(expected = "concurrency limit must be at least 1")]
    async fn zero_limit_panics() {
        let tasks: Vec<fn() -> std::future::Ready<Result<i32, &'static str>>> = Vec::new();
        let _ = concurrent(tasks, 0).await;
    }
}
