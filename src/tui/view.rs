//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.
//! All numbers come from `calc::quote`; nothing is computed here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::calc::{self, CalcError, EMPTY_RESULT};
use crate::report::CURRENCY;
use crate::types::{Precision, Quote, SliderConfig};

use super::state::App;
use super::theme;

/// Placeholder shown in the empty amount field.
const PLACEHOLDER: &str = "Enter your Amount";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the calculator screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(4), // total header
        Constraint::Length(3), // amount input
        Constraint::Min(0),    // details
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_help(app.inputs.shows_details()), chunks[4]);

    let quote = calc::quote(&app.inputs, app.config.precision);

    frame.render_widget(render_total_header(&quote), chunks[1]);
    frame.render_widget(render_amount_input(&app.inputs.amount), chunks[2]);

    if app.inputs.shows_details() {
        match &quote {
            Ok(quote) => {
                render_details(quote, &app.config.slider, app.inputs.tip_percent, frame, chunks[3])
            }
            Err(err) => render_error(err, frame, chunks[3]),
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![Span::styled("Tip Calculator", theme::STYLE_TITLE)]))
}

/// Help line. Person and tip keys are only listed while they do something.
fn render_help(details: bool) -> Paragraph<'static> {
    let help_text = if details {
        "[0-9 .] amount  [Bksp] delete  [+/-] split  [←/→] tip  [Home/End] tip min/max  [Esc] quit"
    } else {
        "[0-9 .] amount  [Esc] quit"
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Teal panel: "Total Per Person" over "$ <total>".
fn render_total_header(quote: &Result<Quote, CalcError>) -> Paragraph<'static> {
    let total = match quote {
        Ok(q) => q.total_per_person.clone(),
        Err(_) => EMPTY_RESULT.to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from("Total Per Person"),
        Line::from(format!("{} {}", CURRENCY, total)),
        Line::from(""),
    ];

    Paragraph::new(lines)
        .style(theme::STYLE_HEADER)
        .alignment(Alignment::Center)
}

fn render_amount_input(amount: &str) -> Paragraph<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::STYLE_INPUT_BORDER)
        .title(" Amount ");

    let content = if amount.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, theme::STYLE_DIM))
    } else {
        Line::from(vec![
            Span::styled(amount, theme::STYLE_IMPORTANT),
            Span::styled("▏", theme::STYLE_INTERACTIVE),
        ])
    };

    Paragraph::new(content).block(block)
}

/// Split counter, tip amount, tip percentage and the slider.
fn render_details(
    quote: &Quote,
    slider: &SliderConfig,
    tip_percent: f64,
    frame: &mut Frame,
    area: Rect,
) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Split      "),
            Span::styled("[+] ", theme::STYLE_INTERACTIVE),
            Span::styled(quote.persons.to_string(), theme::STYLE_IMPORTANT),
            Span::styled(" [-]", theme::STYLE_INTERACTIVE),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Tip        "),
            Span::styled(format!("{} {}", CURRENCY, quote.tip), theme::STYLE_AMOUNT),
        ]),
        Line::from(""),
        Line::from(format!("  {} %", quote.tip_percent)),
        Line::from(""),
        slider_line(slider, tip_percent),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// The amount text is numeric-looking but not a number yet (e.g. ".").
fn render_error(err: &CalcError, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", err), theme::STYLE_DANGER)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Text slider: one cell per stop, knob at the nearest stop.
///
/// `0 ━━━━●───── 100`
fn slider_line(slider: &SliderConfig, tip_percent: f64) -> Line<'static> {
    let knob = slider.nearest_stop(tip_percent);
    let mut spans = vec![Span::styled(
        format!("  {} ", calc::format_value(slider.min, Precision::Fixed(0))),
        theme::STYLE_DIM,
    )];

    for stop in 0..slider.stop_count() {
        let span = if stop == knob {
            Span::styled("●", theme::STYLE_KNOB)
        } else if stop < knob {
            Span::styled("━━", theme::STYLE_TRACK_FILLED)
        } else {
            Span::styled("──", theme::STYLE_DIM)
        };
        spans.push(span);
    }

    spans.push(Span::styled(
        format!(" {}", calc::format_value(slider.max, Precision::Fixed(0))),
        theme::STYLE_DIM,
    ));
    Line::from(spans)
}

// ============================================================================
// TESTS
// ============================================================================
