//! Sequential, fail-fast aggregation of several feeds into one collection.

use std::sync::Arc;

use crate::app::Result;
use crate::domain::FeedCollection;
use crate::fetcher::FeedSource;
use crate::normalizer::normalize;

pub struct Aggregator {
    source: Arc<dyn FeedSource + Send + Sync>,
}

impl Aggregator {
    pub fn new(source: Arc<dyn FeedSource + Send + Sync>) -> Self {
        Self { source }
    }

    /// Fetch every URL in order and merge the entries, newest first.
    ///
    /// The first failing URL aborts the whole run: nothing fetched so far is
    /// returned and later URLs are not requested.
    pub async fn aggregate(&self, urls: &[String]) -> Result<FeedCollection> {
        let mut items = Vec::new();

        for url in urls {
            let document = self.source.parse(url).await.map_err(|e| e.for_feed(url))?;

            tracing::info!(
                url = %url,
                feed = %document.title,
                entries = document.entries.len(),
                "fetched feed"
            );

            let feed_title = document.title;
            items.extend(
                document
                    .entries
                    .into_iter()
                    .map(|entry| normalize(&feed_title, entry)),
            );
        }

        Ok(FeedCollection::from_unsorted(items))
    }
}
