//! Sequential async reduce.
//!
//! Folds items left to right through an asynchronous binary reducer,
//! threading an accumulator from an initial value.

use std::future::Future;

/// Folds `items` left to right with the async `reducer`, starting from
/// `initial`.
///
/// The first reducer error halts iteration and is returned unchanged; the
/// partial accumulator is discarded.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let sum = async_ease::reduce(vec![1, 2, 3, 4, 5], |acc, x| async move { Ok(acc + x) }, 0).await?;
/// assert_eq!(sum, 15);
/// # Ok(()) }
/// ```
pub async fn reduce<T, Acc, F, Fut, E>(
    items: impl IntoIterator<Item = T>,
    mut reducer: F,
    initial: Acc,
) -> Result<Acc, E>
where
    F: FnMut(Acc, T) -> Fut,
    Fut: Future<Output = Result<Acc, E>>,
{
    let mut accumulator = initial;
    for item in items {
        accumulator = reducer(accumulator, item).await?;
    }
    Ok(accumulator)
}
