//! Sequential async filter.
//!
//! Evaluates an asynchronous predicate against each item in order, keeping
//! items whose predicate resolves `true`. Relative order of kept items is
//! preserved.
//!
//! The predicate borrows the item, matching the shape of the `futures`
//! crate's `try_filter` adapter, so the returned future must not hold the
//! borrow; clone or copy what it needs before going async.

use std::future::Future;

/// Keeps the items whose async `predicate` resolves `true`.
///
/// The first predicate error halts iteration and is returned unchanged.
///
/// # Example
///
/// ```
/// # async fn demo() -> Result<(), &'static str> {
/// let evens = async_ease::filter(vec![1, 2, 3, 4, 5], |x| {
///     let x = *x;
///     async move { Ok(x % 2 == 0) }
/// })
/// .await?;
/// assert_eq!(evens, vec![2, 4]);
/// # Ok(()) }
/// ```
pub async fn filter<T, P, Fut, E>(
    items: impl IntoIterator<Item = T>,
    mut predicate: P,
) -> Result<Vec<T>, E>
where
    P: FnMut(&T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let mut kept = Vec::new();
    for item in items {
        if predicate(&item).await? {
            kept.push(item);
        }
    }
    Ok(kept)
}
