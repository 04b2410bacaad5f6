use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::domain::{FeedCollection, FeedItem};

/// Margin around the list: `(horizontal, vertical)` cells, summed over both sides.
pub const FRAME_INSET: (u16, u16) = (4, 2);

/// Rows per entry: title, description, spacer.
pub const ITEM_HEIGHT: u16 = 3;

/// Title bar, filter line, status line, help line.
pub const LIST_CHROME_ROWS: u16 = 4;

pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// chrono layout equivalent to the C `asctime` format.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub const UNKNOWN_DATE: &str = "unknown date";

/// The three faces an entry shows to the list.
pub trait ListEntry {
    fn title(&self) -> &str;
    fn description(&self) -> String;
    fn filter_value(&self) -> &str;
}

impl ListEntry for FeedItem {
    fn title(&self) -> &str {
        &self.item_title
    }

    fn description(&self) -> String {
        let date = self
            .effective_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());
        format!("[{}] - {}", date, self.feed_title)
    }

    fn filter_value(&self) -> &str {
        &self.item_title
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Unfiltered,
    Editing,
    Applied,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct TuiApp {
    pub title: String,
    items: FeedCollection,
    /// Indices into `items` that pass the current filter.
    visible: Vec<usize>,
    /// Position within `visible`.
    selected: usize,
    width: u16,
    height: u16,
    filter_mode: FilterMode,
    filter_text: String,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(items: FeedCollection, title: impl Into<String>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            title: title.into(),
            items,
            visible,
            selected: 0,
            width: 0,
            height: 0,
            filter_mode: FilterMode::Unfiltered,
            filter_text: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Position of the selection within the visible entries.
    pub fn index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&FeedItem> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.items.get(i))
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &FeedItem> + '_ {
        self.visible.iter().filter_map(|&i| self.items.get(i))
    }

    // -- sizing and pagination --

    /// Apply a terminal size, less the frame inset.
    pub fn resize(&mut self, terminal_width: u16, terminal_height: u16) {
        self.width = terminal_width.saturating_sub(FRAME_INSET.0);
        self.height = terminal_height.saturating_sub(FRAME_INSET.1);
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Where the list is drawn: the inset rectangle, offset by half the margin.
    pub fn list_area(&self) -> Rect {
        Rect::new(FRAME_INSET.0 / 2, FRAME_INSET.1 / 2, self.width, self.height)
    }

    pub fn per_page(&self) -> usize {
        (self.height.saturating_sub(LIST_CHROME_ROWS) / ITEM_HEIGHT).max(1) as usize
    }

    pub fn page(&self) -> usize {
        self.selected / self.per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.per_page()).max(1)
    }

    /// Visible entries on the current page, with the first one's position.
    pub fn page_items(&self) -> (usize, Vec<&FeedItem>) {
        let start = self.page() * self.per_page();
        let items = self
            .visible
            .iter()
            .skip(start)
            .take(self.per_page())
            .filter_map(|&i| self.items.get(i))
            .collect();
        (start, items)
    }

    // -- navigation --

    fn last_index(&self) -> usize {
        self.visible.len().saturating_sub(1)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.last_index());
    }

    pub fn next_page(&mut self) {
        self.selected = (self.selected + self.per_page()).min(self.last_index());
    }

    pub fn prev_page(&mut self) {
        self.selected = self.selected.saturating_sub(self.per_page());
    }

    pub fn go_to_start(&mut self) {
        self.selected = 0;
    }

    pub fn go_to_end(&mut self) {
        self.selected = self.last_index();
    }

    // -- filtering --

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn start_filter(&mut self) {
        self.filter_mode = FilterMode::Editing;
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter_text.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        if self.filter_text.pop().is_some() {
            self.refilter();
        }
    }

    /// Leave filter entry, keeping the filter if it has any text.
    pub fn accept_filter(&mut self) {
        self.filter_mode = if self.filter_text.is_empty() {
            FilterMode::Unfiltered
        } else {
            FilterMode::Applied
        };
    }

    pub fn clear_filter(&mut self) {
        self.filter_mode = FilterMode::Unfiltered;
        if !self.filter_text.is_empty() {
            self.filter_text.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let needle = self.filter_text.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.filter_value().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }

    // -- status line --

    pub fn set_status(&mut self, message: String) {
        self.set_status_at(message, Instant::now());
    }

    pub fn set_status_at(&mut self, message: String, now: Instant) {
        self.status = Some(StatusMessage {
            text: message,
            expires_at: now + STATUS_TTL,
        });
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }
}
