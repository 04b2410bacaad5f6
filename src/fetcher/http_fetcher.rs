use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::domain::FeedDocument;
use crate::fetcher::FeedSource;
use crate::normalizer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("tidings/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn parse(&self, url: &str) -> Result<FeedDocument> {
        let url = Url::parse(url)?;
        tracing::debug!(%url, "fetching feed");

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        normalizer::parse_document(&body)
    }
}
