//! Pure state transitions: (Inputs, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Person and tip controls only exist while an amount is entered, so
//! those actions are no-ops on a blank amount.

use tracing::debug;

use crate::calc::is_amount_entry;
use crate::types::{Inputs, SliderConfig};

use super::state::{Action, Transition};

/// Pure state transition function.
///
/// Takes the current inputs by value and returns the replacement snapshot.
pub fn update(inputs: Inputs, action: &Action, slider: &SliderConfig) -> Transition {
    let next = match action {
        Action::Quit => return Transition::Quit,
        Action::Type(c) => type_char(inputs, *c),
        Action::Backspace => {
            let mut inputs = inputs;
            inputs.amount.pop();
            inputs
        }
        Action::ClearAmount => Inputs {
            amount: String::new(),
            ..inputs
        },
        _ if !inputs.shows_details() => inputs,
        Action::AddPerson => Inputs {
            persons: inputs.persons.increment(),
            ..inputs
        },
        Action::RemovePerson => Inputs {
            persons: inputs.persons.decrement(),
            ..inputs
        },
        Action::TipUp => {
            let stop = (slider.nearest_stop(inputs.tip_percent) + 1).min(slider.last_stop());
            set_tip(inputs, slider.value_at(stop))
        }
        Action::TipDown => {
            let stop = slider.nearest_stop(inputs.tip_percent).saturating_sub(1);
            set_tip(inputs, slider.value_at(stop))
        }
        Action::TipMin => set_tip(inputs, slider.value_at(0)),
        Action::TipMax => set_tip(inputs, slider.value_at(slider.last_stop())),
    };

    debug!(
        ?action,
        amount = %next.amount,
        persons = %next.persons,
        tip_percent = next.tip_percent,
        "inputs updated"
    );
    Transition::Inputs(next)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Append `c` only if the result is still a decimal entry.
fn type_char(inputs: Inputs, c: char) -> Inputs {
    let mut amount = inputs.amount.clone();
    amount.push(c);
    if is_amount_entry(&amount) {
        Inputs { amount, ..inputs }
    } else {
        inputs
    }
}

fn set_tip(inputs: Inputs, tip_percent: f64) -> Inputs {
    Inputs {
        tip_percent,
        ..inputs
    }
}

// ============================================================================
// TESTS
// ============================================================================
