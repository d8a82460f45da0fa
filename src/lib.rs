//! tip-split: Split a bill and its tip across a party.

pub mod calc;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
