//! Domain types for tip-split.
//!
//! Everything here is a plain value: no I/O, no hidden state. The
//! calculator and the TUI both program against these types.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Number of people splitting the bill. Always at least 1.
///
/// There is no way to build a zero count, so the per-person division
/// never degenerates into infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PersonCount(u32);

impl PersonCount {
    /// A party of one — the starting value of every session.
    pub const ONE: PersonCount = PersonCount(1);

    /// Returns `None` for zero.
    pub fn new(count: u32) -> Option<Self> {
        if count == 0 { None } else { Some(PersonCount(count)) }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// One more person. Unbounded in practice (saturates at `u32::MAX`).
    pub fn increment(self) -> Self {
        PersonCount(self.0.saturating_add(1))
    }

    /// One fewer person, floored at 1.
    pub fn decrement(self) -> Self {
        if self.0 == 1 { self } else { PersonCount(self.0 - 1) }
    }
}

impl Default for PersonCount {
    fn default() -> Self {
        PersonCount::ONE
    }
}

impl fmt::Display for PersonCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PersonCount {
    type Error = String;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        PersonCount::new(count).ok_or_else(|| "person count must be at least 1".to_string())
    }
}

impl From<PersonCount> for u32 {
    fn from(count: PersonCount) -> Self {
        count.0
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// How computed amounts are turned into display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Shortest round-trip representation, integral values keep a ".0"
    /// ("10.0", "33.333333333333336").
    #[default]
    Native,
    /// Exactly this many digits after the decimal point.
    Fixed(u8),
}

/// Output format for one-shot quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable labeled block.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// The three user-controlled fields, as one snapshot.
///
/// Replaced wholesale on every edit; never mutated in place by the
/// transition function.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    /// Raw bill amount text. Empty means "not entered yet".
    pub amount: String,
    /// Party size.
    pub persons: PersonCount,
    /// Tip percentage, normally one of the slider stops in [0, 100].
    pub tip_percent: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            amount: String::new(),
            persons: PersonCount::ONE,
            tip_percent: 0.0,
        }
    }
}

impl Inputs {
    /// Start from an already-typed amount, everything else at defaults.
    pub fn with_amount(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            ..Default::default()
        }
    }

    /// The split/tip block is only shown once something non-blank is typed.
    pub fn shows_details(&self) -> bool {
        !self.amount.trim().is_empty()
    }
}

/// Every value the screen displays for one snapshot of [`Inputs`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Bill amount text as entered.
    pub amount: String,
    /// Party size.
    pub persons: PersonCount,
    /// Tip percentage, formatted.
    pub tip_percent: String,
    /// Tip on the whole bill, formatted.
    pub tip: String,
    /// (amount + tip) / persons, formatted.
    pub total_per_person: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Discrete tip slider.
///
/// `steps` counts the intermediate stops, so the slider has `steps + 2`
/// positions evenly spaced over `[min, max]`. With the defaults the
/// spacing is 100/6 ≈ 16.67.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub steps: u8,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            steps: 5,
        }
    }
}

impl SliderConfig {
    /// Number of selectable positions, ends included.
    pub fn stop_count(&self) -> usize {
        usize::from(self.steps) + 2
    }

    /// Index of the last position.
    pub fn last_stop(&self) -> usize {
        usize::from(self.steps) + 1
    }

    /// Value at a position. Indices past the end clamp to `max`.
    pub fn value_at(&self, stop: usize) -> f64 {
        let stop = stop.min(self.last_stop());
        self.min + (self.max - self.min) * stop as f64 / self.last_stop() as f64
    }

    /// Nearest position for an arbitrary value.
    pub fn nearest_stop(&self, value: f64) -> usize {
        let span = self.max - self.min;
        if span <= 0.0 || !value.is_finite() {
            return 0;
        }
        let fraction = ((value - self.min) / span).clamp(0.0, 1.0);
        (fraction * self.last_stop() as f64).round() as usize
    }
}

/// Configuration shared by the TUI and the `quote` command.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalcConfig {
    /// Display formatting for computed amounts.
    pub precision: Precision,
    /// Tip slider layout.
    pub slider: SliderConfig,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_count_starts_at_one() {
        assert_eq!(PersonCount::default(), PersonCount::ONE);
        assert_eq!(Inputs::default().persons.get(), 1);
    }

    #[test]
    fn person_count_rejects_zero() {
        assert_eq!(PersonCount::new(0), None);
        assert_eq!(PersonCount::new(3).map(PersonCount::get), Some(3));
    }

    #[test]
    fn decrement_floors_at_one() {
        let mut count = PersonCount::ONE;
        for _ in 0..10 {
            count = count.decrement();
        }
        assert_eq!(count, PersonCount::ONE);
    }

    #[test]
    fn increment_then_decrement_round_trips() {
        let count = PersonCount::ONE.increment().increment();
        assert_eq!(count.get(), 3);
        assert_eq!(count.decrement().get(), 2);
    }

    #[test]
    fn increment_saturates() {
        let max = PersonCount::new(u32::MAX).unwrap();
        assert_eq!(max.increment(), max);
    }

    #[test]
    fn person_count_serializes_as_number() {
        let json = serde_json::to_string(&PersonCount::new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
        let err = serde_json::from_str::<PersonCount>("0");
        assert!(err.is_err());
    }

    #[test]
    fn details_hidden_for_blank_amount() {
        assert!(!Inputs::default().shows_details());
        assert!(!Inputs::with_amount("   ").shows_details());
        assert!(Inputs::with_amount("0").shows_details());
    }

    #[test]
    fn default_slider_has_seven_positions() {
        let slider = SliderConfig::default();
        assert_eq!(slider.stop_count(), 7);
        assert_eq!(slider.value_at(0), 0.0);
        assert_eq!(slider.value_at(3), 50.0);
        assert_eq!(slider.value_at(6), 100.0);
        assert!((slider.value_at(1) - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn slider_value_clamps_past_end() {
        let slider = SliderConfig::default();
        assert_eq!(slider.value_at(42), 100.0);
    }

    #[test]
    fn nearest_stop_snaps_and_clamps() {
        let slider = SliderConfig::default();
        assert_eq!(slider.nearest_stop(0.0), 0);
        assert_eq!(slider.nearest_stop(17.0), 1);
        assert_eq!(slider.nearest_stop(slider.value_at(4)), 4);
        assert_eq!(slider.nearest_stop(-5.0), 0);
        assert_eq!(slider.nearest_stop(250.0), 6);
        assert_eq!(slider.nearest_stop(f64::NAN), 0);
    }

    #[test]
    fn calc_config_defaults() {
        let config = CalcConfig::default();
        assert_eq!(config.precision, Precision::Native);
        assert_eq!(config.slider, SliderConfig::default());
    }
}
