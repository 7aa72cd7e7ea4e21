//! Sequential async map.
//!
//! Applies an asynchronous transform to each item in order, awaiting each
//! before moving to the next. Behaviorally equivalent to a synchronous map
//! applied after resolving every step.

use std::future::Future;

/// Transforms each item through `transform`, in order, collecting the
/// results.
///
/// The output has the same length as the input. The first transform error
/// halts iteration and is returned unchanged.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let doubled = async_ease::map(vec![1, 2, 3, 4, 5], |x| async move { Ok(x * 2) }).await?;
/// assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
/// # Ok(()) }
/// ```
pub async fn map<T, U, F, Fut, E>(
    items: impl IntoIterator<Item = T>,
    mut transform: F,
) -> Result<Vec<U>, E>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let items = items.into_iter();
    let mut mapped = Vec::with_capacity(items.size_hint().0);
    for item in items {
        mapped.push(transform(item).await?);
    }
    Ok(mapped)
}
