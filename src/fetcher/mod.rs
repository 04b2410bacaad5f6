pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::FeedDocument;

/// Retrieves a feed by URL and parses it.
///
/// Rejecting malformed URLs is the source's job; callers pass tokens through
/// unchanged.
#[async_trait]
pub trait FeedSource {
    async fn parse(&self, url: &str) -> Result<FeedDocument>;
}
