//! tip-split CLI
//!
//! Split a bill and its tip across a party, interactively or in one shot.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use tip_split::calc::{self, checked_inputs, is_amount_entry};
use tip_split::logging;
use tip_split::report::format_quote;
use tip_split::tui;
use tip_split::types::{CalcConfig, Inputs, OutputFormat, Precision, SliderConfig};

#[derive(Parser)]
#[command(name = "tip-split")]
#[command(about = "Split a bill and its tip across a party")]
#[command(version)]
struct Cli {
    /// Defaults to the interactive calculator
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive calculator
    Tui {
        /// Pre-fill the bill amount
        #[arg(long)]
        amount: Option<String>,

        /// Intermediate stops on the tip slider (spacing is 100 / (steps + 1))
        #[arg(long, default_value_t = SliderConfig::default().steps)]
        tip_steps: u8,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print the tip and per-person total for a bill (no UI)
    Quote {
        /// Bill amount, e.g. 42.50
        amount: String,

        /// Number of people splitting the bill
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        persons: u32,

        /// Tip percentage, 0 to 100
        #[arg(long, short, default_value_t = 0.0)]
        tip: f64,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

/// Options shared by every command that shows amounts.
#[derive(Args)]
struct DisplayArgs {
    /// Show amounts with exactly this many decimals instead of the shortest exact form
    #[arg(long)]
    decimals: Option<u8>,
}

impl From<DisplayArgs> for Precision {
    fn from(args: DisplayArgs) -> Self {
        args.decimals.map_or(Precision::Native, Precision::Fixed)
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(None, CalcConfig::default()),
        Some(Commands::Tui { amount, tip_steps, display }) => {
            let config = CalcConfig {
                precision: display.into(),
                slider: SliderConfig {
                    steps: tip_steps,
                    ..SliderConfig::default()
                },
            };
            cmd_tui(amount, config)
        }
        Some(Commands::Quote { amount, persons, tip, format, display }) => {
            cmd_quote(amount, persons, tip, format.into(), display.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(amount: Option<String>, config: CalcConfig) -> Result<(), String> {
    let amount = amount.unwrap_or_default();
    if !is_amount_entry(&amount) {
        return Err(format!(
            "Invalid amount: {:?} (digits and one decimal point only)",
            amount
        ));
    }

    let last = tui::run(Inputs::with_amount(amount), config).map_err(|e| e.to_string())?;

    // Leave the final numbers on the normal screen
    if last.shows_details() {
        if let Ok(quote) = calc::quote(&last, config.precision) {
            print!("{}", format_quote(&quote, OutputFormat::Human));
        }
    }

    Ok(())
}

fn cmd_quote(
    amount: String,
    persons: u32,
    tip: f64,
    format: OutputFormat,
    precision: Precision,
) -> Result<(), String> {
    let inputs = checked_inputs(amount, persons, tip).map_err(|e| e.to_string())?;
    let quote = calc::quote(&inputs, precision).map_err(|e| e.to_string())?;
    print!("{}", format_quote(&quote, format));

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quote_rejects_tip_steps() {
        let err = Cli::try_parse_from(["tip-split", "quote", "100", "--tip-steps", "200"]);
        assert!(err.is_err());
    }

    #[test]
    fn tui_accepts_tip_steps() {
        let cli = Cli::try_parse_from(["tip-split", "tui", "--tip-steps", "3"]).unwrap();
        match cli.command {
            Some(Commands::Tui { tip_steps, .. }) => assert_eq!(tip_steps, 3),
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn tui_tip_steps_defaults_to_slider_default() {
        let cli = Cli::try_parse_from(["tip-split", "tui"]).unwrap();
        match cli.command {
            Some(Commands::Tui { tip_steps, .. }) => {
                assert_eq!(tip_steps, SliderConfig::default().steps)
            }
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn quote_accepts_decimals() {
        let cli = Cli::try_parse_from(["tip-split", "quote", "100", "--decimals", "2"]).unwrap();
        match cli.command {
            Some(Commands::Quote { display, .. }) => {
                assert_eq!(Precision::from(display), Precision::Fixed(2))
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn quote_rejects_zero_persons() {
        let err = Cli::try_parse_from(["tip-split", "quote", "100", "--persons", "0"]);
        assert!(err.is_err());
    }
}
