use std::sync::Arc;

use crate::aggregator::Aggregator;
use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFeedSource;
use crate::fetcher::FeedSource;
use crate::opener::{Opener, SystemOpener};

pub struct AppContext {
    pub config: Config,
    pub aggregator: Aggregator,
    pub opener: Box<dyn Opener>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let source: Arc<dyn FeedSource + Send + Sync> = Arc::new(HttpFeedSource::new()?);
        Ok(Self::with_parts(config, source, Box::new(SystemOpener)))
    }

    pub fn with_parts(
        config: Config,
        source: Arc<dyn FeedSource + Send + Sync>,
        opener: Box<dyn Opener>,
    ) -> Self {
        Self {
            config,
            aggregator: Aggregator::new(source),
            opener,
        }
    }
}
