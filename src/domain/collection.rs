use std::cmp::Ordering;
use std::ops::Index;

use crate::domain::FeedItem;

/// All aggregated items, newest first.
///
/// Items without an effective date sort after every dated item. Equal dates
/// keep their input order, so feed order and in-feed order survive ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedCollection {
    items: Vec<FeedItem>,
}

impl FeedCollection {
    pub fn from_unsorted(mut items: Vec<FeedItem>) -> Self {
        // slice::sort_by is stable
        items.sort_by(newest_first);
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FeedItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[FeedItem] {
        &self.items
    }
}

impl Index<usize> for FeedCollection {
    type Output = FeedItem;

    fn index(&self, index: usize) -> &FeedItem {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a FeedCollection {
    type Item = &'a FeedItem;
    type IntoIter = std::slice::Iter<'a, FeedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn newest_first(a: &FeedItem, b: &FeedItem) -> Ordering {
    match (a.effective_date, b.effective_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
