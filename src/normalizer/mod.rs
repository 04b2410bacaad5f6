//! Turns parsed feed documents into display-ready [`FeedItem`]s.

use feed_rs::model::Link;
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{Result, TidingsError};
use crate::domain::{FeedDocument, FeedItem, RawEntry};

/// Parse an RSS/Atom/JSON Feed body into a [`FeedDocument`].
///
/// Missing titles and links become empty strings; the first link of an entry
/// is the one kept.
pub fn parse_document(body: &[u8]) -> Result<FeedDocument> {
    let feed = parser::parse(body).map_err(|e| TidingsError::FeedParse(e.to_string()))?;

    let title = feed
        .title
        .map(|t| decode_html_entities(&t.content).to_string())
        .unwrap_or_default();

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| RawEntry {
            title: entry
                .title
                .map(|t| decode_html_entities(&t.content).to_string())
                .unwrap_or_default(),
            link: content_link(entry.links),
            published_at: entry.published,
            updated_at: entry.updated,
        })
        .collect();

    Ok(FeedDocument { title, entries })
}

/// The link to the entry itself: the first one without a `rel` or with
/// `rel="alternate"`, else the first link of any kind.
fn content_link(links: Vec<Link>) -> String {
    let alternate = links
        .iter()
        .position(|l| matches!(l.rel.as_deref(), None | Some("alternate")));

    links
        .into_iter()
        .nth(alternate.unwrap_or(0))
        .map(|l| l.href)
        .unwrap_or_default()
}

/// Build a [`FeedItem`] from a raw entry.
///
/// The effective date is the published date, else the updated date, else none.
/// Titles and links are kept verbatim.
pub fn normalize(feed_title: &str, entry: RawEntry) -> FeedItem {
    FeedItem {
        feed_title: feed_title.to_string(),
        item_title: entry.title,
        link: entry.link,
        effective_date: entry.published_at.or(entry.updated_at),
    }
}
