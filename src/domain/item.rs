use chrono::{DateTime, Utc};

/// A feed entry ready for display, tagged with the title of the feed it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub feed_title: String,
    pub item_title: String,
    pub link: String,
    pub effective_date: Option<DateTime<Utc>>,
}

impl FeedItem {
    pub fn new(
        feed_title: impl Into<String>,
        item_title: impl Into<String>,
        link: impl Into<String>,
        effective_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            feed_title: feed_title.into(),
            item_title: item_title.into(),
            link: link.into(),
            effective_date,
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}
