pub mod app;
pub mod controller;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::FeedCollection;

use self::app::TuiApp;
use self::event::EventHandler;

type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Show `items` full-screen until the user quits.
pub fn run(ctx: &AppContext, items: FeedCollection) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, items);
    let restored = restore_terminal(&mut terminal);
    loop_error_first(result, restored)
}

/// The loop's own error is reported even when restoring also fails.
fn loop_error_first(result: Result<()>, restored: Result<()>) -> Result<()> {
    result.and(restored)
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    undo_on_error(enter_alternate_screen(), || {
        let _ = disable_raw_mode();
    })
}

/// Runs `undo` when `result` is an error, then passes `result` on.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn enter_alternate_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, ctx: &AppContext, items: FeedCollection) -> Result<()> {
    let mut tui_app = TuiApp::new(items, ctx.config.title.clone());
    let event_handler = EventHandler::new(TICK_RATE);

    // crossterm only reports later resizes
    let (width, height) = terminal_size()?;
    tui_app.resize(width, height);

    loop {
        terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config))?;

        let event = event_handler.next()?;
        controller::handle_event(
            &mut tui_app,
            event,
            &ctx.config.keybindings,
            ctx.opener.as_ref(),
        );

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
