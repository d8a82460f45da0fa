//! Tip and per-person arithmetic.
//!
//! Pure functions — no I/O, easily testable. The amount arrives as the raw
//! text the user typed; an empty string means "nothing entered" and short
//! circuits to the literal `"0"`.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::types::{Inputs, PersonCount, Precision, Quote};

/// Literal shown for every computed value while the amount is empty.
pub const EMPTY_RESULT: &str = "0";

/// Why an amount could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The text is not a floating-point literal at all.
    #[error("not a number: {input:?}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    /// The text parsed, but to a negative or non-finite value.
    #[error("amount must be a finite, non-negative number: {input:?}")]
    OutOfRange { input: String },
    /// Tip outside the slider range (NaN included).
    #[error("tip must be between 0 and 100, got {tip}")]
    TipOutOfRange { tip: f64 },
    /// A party of zero.
    #[error("at least one person is required")]
    NoPersons,
}

/// Lowest and highest tip accepted from outside the slider.
pub const TIP_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Tip on the whole bill: `amount * tip_percent / 100`.
///
/// Returns `"0"` for an empty amount. `tip_percent` is not range-checked;
/// the slider keeps it inside [0, 100].
pub fn tip_amount(amount: &str, tip_percent: f64) -> Result<String, CalcError> {
    tip_amount_with(amount, tip_percent, Precision::Native)
}

/// [`tip_amount`] with an explicit display precision.
pub fn tip_amount_with(
    amount: &str,
    tip_percent: f64,
    precision: Precision,
) -> Result<String, CalcError> {
    match parse_amount(amount)? {
        None => Ok(EMPTY_RESULT.to_string()),
        Some(bill) => Ok(format_value(tip_value(bill, tip_percent), precision)),
    }
}

/// What each person pays: `(amount + tip) / persons`.
///
/// Returns `"0"` for an empty amount.
pub fn total_per_person(
    amount: &str,
    persons: PersonCount,
    tip_percent: f64,
) -> Result<String, CalcError> {
    total_per_person_with(amount, persons, tip_percent, Precision::Native)
}

/// [`total_per_person`] with an explicit display precision.
pub fn total_per_person_with(
    amount: &str,
    persons: PersonCount,
    tip_percent: f64,
    precision: Precision,
) -> Result<String, CalcError> {
    match parse_amount(amount)? {
        None => Ok(EMPTY_RESULT.to_string()),
        Some(bill) => Ok(format_value(
            per_person_value(bill, persons, tip_percent),
            precision,
        )),
    }
}

/// Compute every displayed value for one snapshot.
pub fn quote(inputs: &Inputs, precision: Precision) -> Result<Quote, CalcError> {
    Ok(Quote {
        amount: inputs.amount.clone(),
        persons: inputs.persons,
        tip_percent: format_value(inputs.tip_percent, precision),
        tip: tip_amount_with(&inputs.amount, inputs.tip_percent, precision)?,
        total_per_person: total_per_person_with(
            &inputs.amount,
            inputs.persons,
            inputs.tip_percent,
            precision,
        )?,
    })
}

/// Build inputs from unchecked values (command-line arguments).
///
/// The amount is only parsed later by the calculators; here the tip must
/// lie in [`TIP_RANGE`] and the party must not be empty.
pub fn checked_inputs(
    amount: String,
    persons: u32,
    tip_percent: f64,
) -> Result<Inputs, CalcError> {
    if !TIP_RANGE.contains(&tip_percent) {
        return Err(CalcError::TipOutOfRange { tip: tip_percent });
    }
    let persons = PersonCount::new(persons).ok_or(CalcError::NoPersons)?;

    Ok(Inputs {
        amount,
        persons,
        tip_percent,
    })
}

/// Parse the amount text. `Ok(None)` means the field is empty.
pub fn parse_amount(text: &str) -> Result<Option<f64>, CalcError> {
    if text.is_empty() {
        return Ok(None);
    }

    let value = text.parse::<f64>().map_err(|source| CalcError::Parse {
        input: text.to_string(),
        source,
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::OutOfRange {
            input: text.to_string(),
        });
    }

    // "-0" parses to negative zero; display it as plain zero.
    Ok(Some(value + 0.0))
}

/// Whether `text` may sit in the amount field: digits and at most one `.`.
///
/// Used to filter keystrokes at the input boundary so the field never
/// holds anything but a (possibly incomplete) decimal number.
pub fn is_amount_entry(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().filter(|&c| c == '.').count() <= 1
}

/// Format a computed value for display.
pub fn format_value(value: f64, precision: Precision) -> String {
    match precision {
        // Debug keeps the trailing ".0" on integral values, Display does not.
        Precision::Native => format!("{:?}", value),
        Precision::Fixed(digits) => format!("{:.*}", usize::from(digits), value),
    }
}

// ============================================================================
// INTERNAL: arithmetic
// ============================================================================

fn tip_value(bill: f64, tip_percent: f64) -> f64 {
    bill * (tip_percent / 100.0)
}

fn per_person_value(bill: f64, persons: PersonCount, tip_percent: f64) -> f64 {
    (bill + tip_value(bill, tip_percent)) / f64::from(persons.get())
}

// ============================================================================
// TESTS
// ============================================================================
