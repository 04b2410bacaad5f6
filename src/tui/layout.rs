use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::config::{ColorConfig, Config, KeybindingConfig};
use crate::tui::app::{FilterMode, ListEntry, TuiApp};

const SELECTION_MARK: &str = "│ ";

pub fn render(frame: &mut Frame, app: &TuiApp, config: &Config) {
    let area = app.list_area().intersection(frame.area());
    if area.is_empty() {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Filter
        Constraint::Min(0),    // Entries
        Constraint::Length(1), // Status
        Constraint::Length(1), // Help
    ])
    .split(area);

    render_title(frame, app, chunks[0], &config.colors);
    render_filter(frame, app, chunks[1], &config.colors);
    render_entries(frame, app, chunks[2], &config.colors);
    render_status(frame, app, chunks[3], &config.colors);
    render_help(frame, chunks[4], &config.keybindings, &config.colors);
}

fn render_title(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let title = Span::styled(
        format!(" {} ", app.title),
        Style::default()
            .fg(colors.title_fg)
            .bg(colors.title_bg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(title)), area);
}

fn render_filter(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let prompt = Style::default().fg(colors.filter_prompt);
    let line = match app.filter_mode() {
        FilterMode::Unfiltered => Line::default(),
        FilterMode::Editing => Line::from(vec![
            Span::styled("Filter: ", prompt),
            Span::raw(app.filter_text().to_string()),
            Span::styled("█", prompt),
        ]),
        FilterMode::Applied => Line::from(vec![
            Span::styled("Filter: ", prompt),
            Span::styled(
                app.filter_text().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_entries(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    if app.visible_len() == 0 {
        let message = if app.total_len() == 0 {
            "No items."
        } else {
            "Nothing matched."
        };
        let style = Style::default().fg(colors.status);
        frame.render_widget(Paragraph::new(Span::styled(message, style)), area);
        return;
    }

    let (start, page) = app.page_items();
    let selected_on_page = app.index() - start;

    let items: Vec<ListItem> = page
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let (title_style, description_style) = if i == selected_on_page {
                let selected = Style::default().fg(colors.selection);
                (selected.add_modifier(Modifier::BOLD), selected)
            } else {
                (
                    Style::default().fg(colors.item_title),
                    Style::default().fg(colors.item_description),
                )
            };

            ListItem::new(Text::from(vec![
                Line::from(Span::styled(item.title().to_string(), title_style)),
                Line::from(Span::styled(item.description(), description_style)),
                Line::default(),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected_on_page));

    let list = List::new(items)
        .highlight_symbol(SELECTION_MARK)
        .highlight_style(Style::default().fg(colors.selection));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let text = match &app.status {
        Some(message) => message.text.clone(),
        None => {
            let count = if app.filter_mode() == FilterMode::Unfiltered {
                format!("{} items", app.total_len())
            } else {
                format!("{}/{} items", app.visible_len(), app.total_len())
            };
            format!("{}  •  page {}/{}", count, app.page() + 1, app.total_pages())
        }
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(colors.status)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect, keys: &KeybindingConfig, colors: &ColorConfig) {
    let hints = [
        (&keys.move_up, "up"),
        (&keys.move_down, "down"),
        (&keys.next_page, "next page"),
        (&keys.filter, "filter"),
        (&keys.open, "open"),
        (&keys.quit, "quit"),
    ];
    let text = hints
        .iter()
        .filter_map(|(bindings, label)| bindings.first().map(|key| format!("{} {}", key, label)))
        .collect::<Vec<_>>()
        .join(" • ");

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(colors.help)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::{FeedCollection, FeedItem};

    fn screen(app: &TuiApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let config = Config::default();
        terminal.draw(|frame| render(frame, app, &config)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample() -> TuiApp {
        let items = vec![
            FeedItem::new(
                "Rust Blog",
                "Announcing Rust 1.80",
                "https://blog.example/1.80",
                Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            ),
            FeedItem::new("Go Blog", "Undated post", "https://go.example/u", None),
        ];
        TuiApp::new(FeedCollection::from_unsorted(items), "RSS feeds")
    }

    #[test]
    fn test_renders_title_entries_and_status() {
        let mut app = sample();
        app.resize(60, 16);

        let screen = screen(&app, 60, 16);

        assert!(screen.contains("RSS feeds"));
        assert!(screen.contains("Announcing Rust 1.80"));
        assert!(screen.contains("[Sat Jun  1 00:00:00 2024] - Rust Blog"));
        assert!(screen.contains("[unknown date] - Go Blog"));
        assert!(screen.contains("2 items"));
        assert!(screen.contains("Enter open"));
    }

    #[test]
    fn test_renders_inside_margin() {
        let mut app = sample();
        app.resize(60, 16);

        let screen = screen(&app, 60, 16);
        let lines: Vec<&str> = screen.lines().collect();

        assert_eq!(lines[0].trim(), "");
        assert!(lines[1].starts_with("   RSS feeds"));
    }

    #[test]
    fn test_renders_filter_prompt_and_empty_result() {
        let mut app = sample();
        app.resize(60, 16);
        app.start_filter();
        app.push_filter_char('z');

        let screen = screen(&app, 60, 16);

        assert!(screen.contains("Filter: z"));
        assert!(screen.contains("Nothing matched."));
        assert!(screen.contains("0/2 items"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = sample();
        app.resize(3, 2);
        screen(&app, 3, 2);
    }
}
