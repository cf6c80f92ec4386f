//! Command-line argument parsing using clap.
//!
//! Arguments are positional: `[outputPath] [startDay] [title...]`

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::types::{CalContext, CalError, DAYS_PER_WEEK, Result, WEEKDAYS};

// The built-in help flag is disabled: help is only recognized as the
// first argument (see `is_help_arg`), and a later "-h" is a title word.
#[derive(Parser, Debug)]
#[command(name = "calimg")]
#[command(about = "Renders a 9-day-week, 37-day calendar month as a PNG image", long_about = None)]
#[command(disable_help_flag = true)]
#[command(after_help = USAGE)]
pub struct Args {
    /// Output image path.
    #[arg(index = 1, value_name = "outputPath", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Start day: index 0-8, weekday name, or abbreviation (mon..sun).
    /// Hyphen values pass through so "-1" gets a proper range error.
    #[arg(index = 2, value_name = "startDay", value_hint = ValueHint::Other, allow_hyphen_values = true)]
    pub start_day: Option<String>,

    /// Title text; all remaining arguments are joined with spaces.
    #[arg(index = 3, value_name = "title", allow_hyphen_values = true)]
    pub title: Vec<String>,
}

pub const DEFAULT_OUTPUT: &str = "calendar.png";
pub const DEFAULT_TITLE: &str = "Custom Calendar Month (37 days)";

/// Usage text displayed with --help and after argument errors.
pub const USAGE: &str = "Usage:
  calimg [outputPath] [startDay] [title...]

  outputPath (optional): default 'calendar.png'
  startDay   (optional): 0..8 or weekday name (default Monday)
     0=Monday, 1=Tuesday, 2=Wednesday, 3=Thursday, 4=Friday, 5=Saturday, 6=Sunday, 7=codexday, 8=claudexday
  title      (optional): default 'Custom Calendar Month (37 days)'";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Check whether the first raw argument requests the usage text.
///
/// Clap handles `-h`/`--help` on its own, but the `/?` form and
/// case-insensitive variants have to be caught before parsing.
pub fn is_help_arg(s: &str) -> bool {
    let v = s.trim().to_lowercase();
    v == "-h" || v == "--help" || v == "/?"
}

/// Convert a start-day argument into a weekday table index 0..8.
///
/// Accepted forms, tried in order:
/// - integer "0".."8"
/// - weekday name (case-insensitive), including "codexday" and "claudexday"
/// - abbreviation for the standard 7 days (mon, tue, tues, wed, ...)
pub fn parse_start_day(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalError::InvalidArgument(
            "startDay cannot be empty.".to_string(),
        ));
    }

    // Integer form first; a numeric string never falls through to name matching.
    if let Ok(idx) = trimmed.parse::<i64>() {
        if (0..DAYS_PER_WEEK as i64).contains(&idx) {
            return Ok(idx as u32);
        }
        return Err(CalError::InvalidArgument(
            "startDay index must be between 0 and 8 (inclusive).".to_string(),
        ));
    }

    let key = trimmed.to_lowercase();
    if let Some(idx) = WEEKDAYS.iter().position(|name| name.to_lowercase() == key) {
        return Ok(idx as u32);
    }

    // Abbreviations exist only for the standard 7 days; the two extra
    // days have none.
    match key.as_str() {
        "mon" => Ok(0),
        "tue" | "tues" => Ok(1),
        "wed" => Ok(2),
        "thu" | "thur" | "thurs" => Ok(3),
        "fri" => Ok(4),
        "sat" => Ok(5),
        "sun" => Ok(6),
        _ => Err(CalError::InvalidArgument(format!(
            "Invalid startDay: '{raw}'. Use 0..8 or a weekday name like 'Monday'/'codexday'."
        ))),
    }
}

impl CalContext {
    pub fn new(args: &Args) -> Result<Self> {
        let start_day = match args.start_day.as_deref() {
            Some(raw) => parse_start_day(raw)?,
            None => 0, // Monday
        };

        // parse_start_day already rejects out-of-range input; re-check at the
        // boundary before the index is used for table lookups.
        if start_day >= DAYS_PER_WEEK {
            return Err(CalError::InvalidArgument(
                "startDay must resolve to an index between 0 and 8.".to_string(),
            ));
        }

        let title = if args.title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            args.title.join(" ")
        };

        Ok(CalContext {
            start_day,
            title,
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}
