// ABOUTME: Gateway trait describing the remote contract the cleaner relies on.
// ABOUTME: Turns continuation-token paging into a lazy stream of raw items.

use super::error::GatewayError;
use super::models::{Page, RawItem, Repository};
use crate::types::{AssetId, RepositoryName};
use async_trait::async_trait;
use futures::{Stream, StreamExt, TryStreamExt, stream};

/// Remote repository manager operations: enumerate, search one page, delete.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// List every repository known to the server.
    async fn list_repositories(&self) -> Result<Vec<Repository>, GatewayError>;

    /// Fetch one page of search results. `cursor` is the continuation token
    /// returned with the previous page, `None` for the first page.
    async fn search_page(
        &self,
        repository: &RepositoryName,
        cursor: Option<&str>,
    ) -> Result<Page, GatewayError>;

    /// Delete a single asset by id.
    async fn delete_asset(&self, id: &AssetId) -> Result<(), GatewayError>;
}

enum Cursor {
    Start,
    Next(String),
    Exhausted,
}

/// Every item of `repository`, fetched page by page as the stream is polled.
///
/// The stream ends after the page without a continuation token. A failed page
/// is yielded as an error; nothing after it is fetched.
pub fn items<'a, G>(
    gateway: &'a G,
    repository: &'a RepositoryName,
) -> impl Stream<Item = Result<RawItem, GatewayError>> + Send + 'a
where
    G: Gateway + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let token = match cursor {
            Cursor::Exhausted => return Ok(None),
            Cursor::Start => None,
            Cursor::Next(token) => Some(token),
        };

        let page = gateway.search_page(repository, token.as_deref()).await?;
        tracing::debug!(
            repository = %repository,
            items = page.items.len(),
            more = page.continuation_token.is_some(),
            "fetched search page"
        );

        let next = match page.continuation_token {
            Some(token) if !token.is_empty() => Cursor::Next(token),
            _ => Cursor::Exhausted,
        };
        Ok::<_, GatewayError>(Some((page.items, next)))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, GatewayError>)))
    .try_flatten()
    .boxed()
}

/// Drain [`items`] into memory. Aggregation needs the whole listing, so a
/// partial result is never returned.
pub async fn collect_items<G>(
    gateway: &G,
    repository: &RepositoryName,
) -> Result<Vec<RawItem>, GatewayError>
where
    G: Gateway + ?Sized,
{
    items(gateway, repository).try_collect().await
}
