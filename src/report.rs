//! Quote formatting.
//!
//! Pure functions — (Quote, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, Quote};

/// Currency marker placed before every amount. Not localized.
pub const CURRENCY: &str = "$";

/// Format a quote for output.
pub fn format_quote(quote: &Quote, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(quote),
        OutputFormat::Json => format_json(quote),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(quote: &Quote) -> String {
    let mut out = String::new();

    out.push_str("=== Total Per Person ===\n");
    out.push_str(&format!("{} {}\n", CURRENCY, quote.total_per_person));

    // Same gating as the interactive screen: no breakdown without an amount
    if !quote.amount.trim().is_empty() {
        out.push('\n');
        out.push_str(&format!("Bill:   {} {}\n", CURRENCY, quote.amount));
        out.push_str(&format!("Split:  {}\n", quote.persons));
        out.push_str(&format!("Tip:    {} {}\n", CURRENCY, quote.tip));
        out.push_str(&format!("        {} %\n", quote.tip_percent));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(quote: &Quote) -> String {
    let mut json = serde_json::to_string_pretty(quote)
        .unwrap_or_else(|e| panic!("Failed to serialize quote to JSON: {}", e));
    json.push('\n');
    json
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersonCount;

    fn sample_quote() -> Quote {
        Quote {
            amount: "50".to_string(),
            persons: PersonCount::new(2).unwrap(),
            tip_percent: "20.0".to_string(),
            tip: "10.0".to_string(),
            total_per_person: "30.0".to_string(),
        }
    }

    #[test]
    fn human_shows_total_and_breakdown() {
        let out = format_quote(&sample_quote(), OutputFormat::Human);
        assert!(out.contains("Total Per Person"));
        assert!(out.contains("$ 30.0"));
        assert!(out.contains("Split:  2"));
        assert!(out.contains("Tip:    $ 10.0"));
        assert!(out.contains("20.0 %"));
    }

    #[test]
    fn human_hides_breakdown_without_amount() {
        let quote = Quote {
            amount: String::new(),
            tip: "0".to_string(),
            total_per_person: "0".to_string(),
            ..sample_quote()
        };
        let out = format_quote(&quote, OutputFormat::Human);
        assert!(out.contains("$ 0"));
        assert!(!out.contains("Split"));
        assert!(!out.contains("Tip"));
    }

    #[test]
    fn json_is_valid_and_has_fields() {
        let out = format_quote(&sample_quote(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["persons"], 2);
        assert_eq!(value["tip"], "10.0");
        assert_eq!(value["total_per_person"], "30.0");
        assert_eq!(value["amount"], "50");
    }
}
