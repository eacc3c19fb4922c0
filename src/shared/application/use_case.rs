use crate::shared::errors::AppResult;
/// Base trait for query handlers following the CQRS split
///
/// Handlers read application state and never mutate it.
///
/// # Example
///
/// ```rust,ignore
/// struct CountItemsQuery;
///
/// struct CountItemsHandler {
///     service: Arc<StorefrontService>,
/// }
///
/// #[async_trait]
/// impl Query<CountItemsQuery, usize> for CountItemsHandler {
///     async fn execute(&self, _query: CountItemsQuery) -> AppResult<usize> {
///         // Query logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
