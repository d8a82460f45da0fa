//! TUI state algebra: pure types, zero effects.
//!
//! The whole screen state is one [`Inputs`] snapshot plus the config it
//! is displayed with. The transition function and the rendering layer
//! both program against these types.

use crate::types::{CalcConfig, Inputs};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The three user-controlled fields.
    pub inputs: Inputs,

    /// Display precision and slider layout. Fixed for the session.
    pub config: CalcConfig,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action does to the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the amount field.
    Type(char),
    /// Delete the last character of the amount field.
    Backspace,
    /// Empty the amount field.
    ClearAmount,
    /// One more person in the split.
    AddPerson,
    /// One fewer person in the split (never below 1).
    RemovePerson,
    /// Move the tip slider one stop up.
    TipUp,
    /// Move the tip slider one stop down.
    TipDown,
    /// Jump the tip slider to its lowest stop.
    TipMin,
    /// Jump the tip slider to its highest stop.
    TipMax,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render next.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render these inputs (may be unchanged).
    Inputs(Inputs),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh session: empty amount, one person, 0 % tip.
    pub fn new(config: CalcConfig) -> Self {
        Self::with_inputs(Inputs::default(), config)
    }

    /// Session starting from the given inputs.
    pub fn with_inputs(inputs: Inputs, config: CalcConfig) -> Self {
        App {
            inputs,
            config,
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersonCount;

    #[test]
    fn new_app_starts_empty() {
        let app = App::new(CalcConfig::default());
        assert!(app.inputs.amount.is_empty());
        assert_eq!(app.inputs.persons, PersonCount::ONE);
        assert_eq!(app.inputs.tip_percent, 0.0);
        assert!(!app.should_quit);
    }

    #[test]
    fn with_inputs_keeps_amount() {
        let app = App::with_inputs(Inputs::with_amount("42"), CalcConfig::default());
        assert_eq!(app.inputs.amount, "42");
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        assert_ne!(Transition::Inputs(Inputs::default()), Transition::Quit);
    }
}
