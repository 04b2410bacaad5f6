pub mod collection;
pub mod feed;
pub mod item;

pub use collection::FeedCollection;
pub use feed::{FeedDocument, RawEntry};
pub use item::FeedItem;
