pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers,
};
use event::{Event, EventHandler};

// Tick granularity for polling redirect deadlines. Well under the 700ms
// redirect delay so a due navigation fires on the next tick.
const TICK_RATE_MS: u64 = 50;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    // The board is clickable, so capture mouse events for the session.
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut events = EventHandler::new(TICK_RATE_MS);

    // Main loop
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Click { column, row } => {
                if app.input_mode == app::InputMode::Help {
                    app.dismiss_help();
                } else {
                    app.handle_click(column, row);
                }
            }
            Event::Tick => app.fire_due(),
        }

        if app.should_quit {
            break;
        }
    }

    crossterm::execute!(std::io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

            // Redirect to the selected button
            KeyCode::Enter | KeyCode::Char('o') => app.activate_selected(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Button;
    use crate::redirect::fakes::{FakeClock, RecordingNavigator};
    use std::rc::Rc;

    fn test_app() -> App {
        App::new(
            vec![Button {
                label: Some("Posts".to_string()),
                url: Some("http://localhost:3002/posts".to_string()),
            }],
            Box::new(Rc::new(RecordingNavigator::default())),
            Box::new(Rc::new(FakeClock::new())),
            false,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_activates_selection() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.redirects.pending_count(), 1);
        assert_eq!(
            app.status.text(),
            Some("Redirecting to http://localhost:3002/posts...")
        );
    }

    #[test]
    fn test_any_key_dismisses_help() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.input_mode, app::InputMode::Help);
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.input_mode, app::InputMode::Normal);
    }
}
