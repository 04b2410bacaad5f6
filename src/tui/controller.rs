//! Applies one event to the view state.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeybindingConfig;
use crate::opener::Opener;
use crate::tui::app::{FilterMode, TuiApp};
use crate::tui::event::{Action, AppEvent};

pub fn handle_event(
    app: &mut TuiApp,
    event: AppEvent,
    keybindings: &KeybindingConfig,
    opener: &dyn Opener,
) {
    match event {
        AppEvent::Key(key) if app.filter_mode() == FilterMode::Editing => {
            handle_filter_key(app, key);
        }
        AppEvent::Key(key) => {
            let action = keybindings.get_action(&key);
            handle_action(app, action, opener);
        }
        AppEvent::Resize(width, height) => {
            app.resize(width, height);
        }
        AppEvent::Tick => {
            app.expire_status(Instant::now());
        }
    }
}

fn handle_filter_key(app: &mut TuiApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Enter => app.accept_filter(),
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.push_filter_char(c);
        }
        _ => {}
    }
}

fn handle_action(app: &mut TuiApp, action: Action, opener: &dyn Opener) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::NextPage => app.next_page(),
        Action::PrevPage => app.prev_page(),
        Action::GoToStart => app.go_to_start(),
        Action::GoToEnd => app.go_to_end(),
        Action::StartFilter => app.start_filter(),
        Action::ClearFilter => app.clear_filter(),
        Action::Open => open_selected(app, opener),
        Action::None => {}
    }
}

fn open_selected(app: &mut TuiApp, opener: &dyn Opener) {
    let Some(item) = app.selected_item() else {
        app.set_status("Nothing selected".to_string());
        return;
    };
    if !item.has_link() {
        let message = format!("\"{}\" has no link", item.item_title);
        app.set_status(message);
        return;
    }

    let link = item.link.clone();
    match opener.open(&link) {
        Ok(()) => tracing::debug!(%link, "opened link"),
        Err(e) => {
            tracing::warn!(%link, error = %e, "failed to open link");
            app.set_status(format!("Failed to open {}: {}", link, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{FeedCollection, FeedItem};

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Opener for RecordingOpener {
        fn open(&self, target: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(target.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
            } else {
                Ok(())
            }
        }
    }

    fn app() -> TuiApp {
        let day = |d| Some(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap());
        let items = vec![
            FeedItem::new("Feed", "newest", "https://example.com/x", day(3)),
            FeedItem::new("Feed", "middle", "https://example.com/y", day(2)),
            FeedItem::new("Feed", "linkless", "", day(1)),
        ];
        let mut app = TuiApp::new(FeedCollection::from_unsorted(items), "RSS feeds");
        app.resize(80, 40);
        app
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn send(app: &mut TuiApp, opener: &RecordingOpener, events: &[AppEvent]) {
        let keybindings = KeybindingConfig::default();
        for event in events {
            handle_event(app, *event, &keybindings, opener);
        }
    }

    #[test]
    fn test_enter_opens_selected_link_once() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(&mut app, &opener, &[key(KeyCode::Enter)]);

        assert_eq!(*opener.opened.borrow(), vec!["https://example.com/x".to_string()]);
        assert!(!app.should_quit);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_open_follows_navigation() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(&mut app, &opener, &[key(KeyCode::Char('j')), key(KeyCode::Enter)]);

        assert_eq!(*opener.opened.borrow(), vec!["https://example.com/y".to_string()]);
    }

    #[test]
    fn test_open_failure_becomes_status() {
        let mut app = app();
        let opener = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };

        send(&mut app, &opener, &[key(KeyCode::Enter)]);

        let status = app.status.as_ref().unwrap();
        assert!(status.text.contains("https://example.com/x"));
        assert!(status.text.contains("no handler"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_item_without_link_is_not_opened() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(&mut app, &opener, &[key(KeyCode::End), key(KeyCode::Enter)]);

        assert!(opener.opened.borrow().is_empty());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let opener = RecordingOpener::default();

        let mut by_letter = app();
        send(&mut by_letter, &opener, &[key(KeyCode::Char('q'))]);
        assert!(by_letter.should_quit);

        let mut by_ctrl_c = app();
        send(&mut by_ctrl_c, &opener, &[ctrl('c')]);
        assert!(by_ctrl_c.should_quit);
    }

    #[test]
    fn test_filter_entry_captures_keys() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(
            &mut app,
            &opener,
            &[key(KeyCode::Char('/')), key(KeyCode::Char('q')), key(KeyCode::Char('j'))],
        );

        assert!(!app.should_quit);
        assert_eq!(app.filter_text(), "qj");
        assert_eq!(app.visible_len(), 0);

        send(&mut app, &opener, &[ctrl('c')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_filter_then_open_uses_filtered_selection() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(
            &mut app,
            &opener,
            &[
                key(KeyCode::Char('/')),
                key(KeyCode::Char('m')),
                key(KeyCode::Char('i')),
                key(KeyCode::Enter),
                key(KeyCode::Enter),
            ],
        );

        assert_eq!(app.filter_mode(), FilterMode::Applied);
        assert_eq!(*opener.opened.borrow(), vec!["https://example.com/y".to_string()]);

        send(&mut app, &opener, &[key(KeyCode::Esc)]);
        assert_eq!(app.filter_mode(), FilterMode::Unfiltered);
        assert_eq!(app.visible_len(), 3);
    }

    #[test]
    fn test_escape_cancels_filter_entry() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(
            &mut app,
            &opener,
            &[key(KeyCode::Char('/')), key(KeyCode::Char('x')), key(KeyCode::Esc)],
        );

        assert_eq!(app.filter_mode(), FilterMode::Unfiltered);
        assert_eq!(app.visible_len(), 3);
    }

    #[test]
    fn test_resize_event_updates_size() {
        let mut app = app();
        let opener = RecordingOpener::default();

        send(&mut app, &opener, &[AppEvent::Resize(100, 30)]);

        assert_eq!(app.size(), (96, 28));
    }
}
