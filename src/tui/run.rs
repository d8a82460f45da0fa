//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: the loop blocks on the next terminal event, runs the
//! pure update on it, and redraws. Nothing happens between key presses.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::types::{CalcConfig, Inputs};

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Amount field
        KeyCode::Char(c @ ('0'..='9' | '.')) => Some(Action::Type(c)),
        KeyCode::Char(',') => Some(Action::Type('.')),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::ClearAmount),

        // Split
        KeyCode::Up | KeyCode::Char('+') => Some(Action::AddPerson),
        KeyCode::Down | KeyCode::Char('-') => Some(Action::RemovePerson),

        // Tip slider
        KeyCode::Right => Some(Action::TipUp),
        KeyCode::Left => Some(Action::TipDown),
        KeyCode::Home => Some(Action::TipMin),
        KeyCode::End => Some(Action::TipMax),

        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the calculator screen until the user quits.
///
/// `inputs` is the starting snapshot (usually empty). Returns the final
/// inputs so the caller can print a closing quote.
pub fn run(inputs: Inputs, config: CalcConfig) -> io::Result<Inputs> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::with_inputs(inputs, config);
    info!(?config, "calculator session started");

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let key = match event::read()? {
            // Windows reports releases too; act on presses only
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // resize just redraws
        };

        let Some(action) = map_key(key) else {
            continue;
        };

        match update(app.inputs.clone(), &action, &app.config.slider) {
            Transition::Inputs(next) => {
                app.inputs = next;
            }
            Transition::Quit => {
                app.should_quit = true;
            }
        }
    }

    restore_terminal()?;
    info!("calculator session ended");
    Ok(app.inputs)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Action> {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn esc_and_q_quit() {
        assert_eq!(press(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(press(KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn digits_and_point_type_into_amount() {
        for c in "0123456789.".chars() {
            assert_eq!(press(KeyCode::Char(c)), Some(Action::Type(c)));
        }
    }

    #[test]
    fn comma_types_a_decimal_point() {
        assert_eq!(press(KeyCode::Char(',')), Some(Action::Type('.')));
    }

    #[test]
    fn letters_are_unmapped() {
        assert_eq!(press(KeyCode::Char('z')), None);
        assert_eq!(press(KeyCode::Char('e')), None);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(press(KeyCode::Backspace), Some(Action::Backspace));
        assert_eq!(press(KeyCode::Delete), Some(Action::ClearAmount));
    }

    #[test]
    fn split_keys() {
        assert_eq!(press(KeyCode::Up), Some(Action::AddPerson));
        assert_eq!(press(KeyCode::Char('+')), Some(Action::AddPerson));
        assert_eq!(press(KeyCode::Down), Some(Action::RemovePerson));
        assert_eq!(press(KeyCode::Char('-')), Some(Action::RemovePerson));
    }

    #[test]
    fn slider_keys() {
        assert_eq!(press(KeyCode::Right), Some(Action::TipUp));
        assert_eq!(press(KeyCode::Left), Some(Action::TipDown));
        assert_eq!(press(KeyCode::Home), Some(Action::TipMin));
        assert_eq!(press(KeyCode::End), Some(Action::TipMax));
    }
}
