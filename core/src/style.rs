use colored::{Color, ColoredString, Colorize};
use crossterm::terminal;

use crate::testing::{Check, Status, TestOutcome};

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }
}

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    match v.as_str() {
        "truecolor" | "24bit" => true,
        _ => false,
    }
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for Status {
    fn color(&self) -> Color {
        use Status::*;
        if !self::is_truecolor_supported() {
            return match self {
                Pass => Color::Green,
                Fail => Color::Yellow,
                Error => Color::Magenta,
            };
        }

        match self {
            Pass => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Fail => Color::TrueColor {
                r: 210,
                g: 138,
                b: 4,
            },
            Error => Color::TrueColor {
                r: 171,
                g: 40,
                b: 200,
            },
        }
    }
}

pub fn status_icon(status: Status) -> ColoredString {
    let fg = if is_truecolor_supported() {
        Color::TrueColor {
            r: 255,
            g: 255,
            b: 255,
        }
    } else {
        Color::BrightBlack
    };
    format!(" {} ", status)
        .on_color(status.color())
        .bold()
        .color(fg)
}

fn term_cols() -> usize {
    let (cols, _) = terminal::size().unwrap_or((80, 24));
    (cols as usize).min(80)
}

pub fn print_case_banner(id: &str, description: &str) {
    let bar = "=".repeat(term_cols()).blue().bold();
    println!("\n{}", bar);
    println!(
        "{} {}",
        format!("TEST {}:", id).bright_yellow().bold(),
        description.bold()
    );
    println!("{}", bar);
}

/// Field roster dumped for every reachable response, in the order the
/// extraction service documents them. Absent fields print as null.
pub const KNOWN_FIELDS: [&str; 17] = [
    "isEvent",
    "eventDate",
    "eventEndDate",
    "eventTime",
    "endTime",
    "locationName",
    "isFree",
    "price",
    "priceMin",
    "priceMax",
    "confidence",
    "isRecurring",
    "recurrencePattern",
    "isUpdate",
    "updateType",
    "availabilityStatus",
    "locationStatus",
];

pub fn print_extraction(extraction: &evx_webclient::Extraction) {
    use crate::testing::validate::fmt_value;

    println!("\n{}", "Extracted Data:".cyan().bold());
    for field in KNOWN_FIELDS {
        let rendered = fmt_value(extraction.get(field));
        let rendered = if extraction.get(field).is_none() {
            rendered.dimmed().to_string()
        } else {
            rendered
        };
        println!("  {}: {}", field, rendered);
    }
    println!(
        "\n{} {}",
        "Reasoning:".cyan().bold(),
        extraction.reasoning().unwrap_or("(none)")
    );
}

pub fn print_checks(checks: &[Check]) {
    use crate::testing::validate::fmt_value;
    use crate::testing::Expectation;

    let thin_bar = "─".repeat(term_cols()).bright_black();
    println!("\n{}", thin_bar);
    println!("{}", "Validation:".cyan().bold());

    for c in checks {
        let actual = fmt_value(c.actual.as_ref());
        match (&c.expectation, c.passed) {
            (Expectation::ReasoningContains(text), true) => {
                println!("  {} reasoning contains {:?}", "✓".green(), text);
            }
            (Expectation::ReasoningContains(text), false) => {
                println!("  {} reasoning does NOT contain {:?}", "✗".red(), text);
            }
            (Expectation::Equals(_), true) => {
                println!("  {} {}: {}", "✓".green(), c.key, actual);
            }
            (e, true) => {
                println!("  {} {}: {} (expected {})", "✓".green(), c.key, actual, e);
            }
            (e, false) => {
                println!("  {} {}: {} (expected {})", "✗".red(), c.key, actual, e);
            }
        }
    }
}

pub fn print_case_status(outcome: &TestOutcome) {
    println!("\nStatus: {}", status_icon(outcome.status));
    if !outcome.issues.is_empty() {
        println!("Issues: {}", outcome.issues.join(", ").yellow());
    }
}

pub fn print_summary(outcomes: &[TestOutcome]) {
    let bar = "=".repeat(term_cols()).blue().bold();
    println!("\n{}", bar);
    println!("{}", "TEST SUMMARY".bold());
    println!("{}", bar);

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let failed = total - passed;
    let rate = if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64 * 100.0
    };

    println!("Total Tests: {}", total);
    println!("Passed: {}", passed.to_string().green());
    println!("Failed: {}", failed.to_string().bright_red());
    println!("Success Rate: {:.1}%", rate);

    if passed == total && total > 0 {
        println!("{}", format!("All {} tests passed ✨", total).green());
    }

    if failed > 0 {
        let thin_bar = "─".repeat(term_cols()).bright_black();
        println!("\n{}", thin_bar);
        println!("{}", "FAILED TESTS:".bright_red().bold());
        for o in outcomes.iter().filter(|o| !o.passed()) {
            println!(
                "  Test {} {}: {}",
                o.test_id,
                status_icon(o.status),
                o.issues.join(", "),
            );
        }
    }
}
