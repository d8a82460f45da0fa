//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Teal: the per-person total header
//! - Green: computed amounts
//! - Red: amount text that cannot be computed
//! - Cyan: interactive elements (keybinding hints, slider knob)
//! - Dim: de-emphasized (placeholder, unselected slider stops)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Computed amount — green.
pub const STYLE_AMOUNT: Style = Style::new().fg(Color::Green);

/// Invalid input — red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// "Total Per Person" header panel.
pub const STYLE_HEADER: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Rgb(0x03, 0xDA, 0xC5))
    .add_modifier(Modifier::BOLD);

/// Amount field border.
pub const STYLE_INPUT_BORDER: Style = Style::new().fg(Color::Cyan);

/// Slider knob.
pub const STYLE_KNOB: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Filled part of the slider track.
pub const STYLE_TRACK_FILLED: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_AMOUNT.fg, Some(Color::Green));
        assert_eq!(STYLE_DANGER.fg, Some(Color::Red));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn header_is_bold_on_teal() {
        assert!(STYLE_HEADER.add_modifier.contains(Modifier::BOLD));
        assert_eq!(STYLE_HEADER.bg, Some(Color::Rgb(0x03, 0xDA, 0xC5)));
    }

    #[test]
    fn important_style_is_bold() {
        assert!(STYLE_IMPORTANT.add_modifier.contains(Modifier::BOLD));
    }
}
