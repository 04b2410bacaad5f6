use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum TidingsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feed {url} cannot be parsed: {source}")]
    Feed {
        url: String,
        #[source]
        source: Box<TidingsError>,
    },
}

impl TidingsError {
    /// Attach the URL of the feed that produced this error.
    pub fn for_feed(self, url: &str) -> Self {
        TidingsError::Feed {
            url: url.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TidingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_names_url_and_cause() {
        let err = TidingsError::FeedParse("unexpected eof".into()).for_feed("https://example.com/rss");
        let message = err.to_string();
        assert!(message.contains("https://example.com/rss"));
        assert!(message.contains("unexpected eof"));
    }
}
