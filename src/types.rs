//! Type definitions and constants for the calendar image.

use std::path::PathBuf;

use image::Rgba;
use thiserror::Error;

/// Weekday labels in table order. Indices 0-6 are the standard days,
/// 7 and 8 are the two extra days of the 9-day week.
pub const WEEKDAYS: [&str; 9] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
    "codexday",
    "claudexday",
];

pub const DAYS_PER_WEEK: u32 = 9;
pub const DAYS_PER_MONTH: u32 = 37;

// Pixel layout constants
pub const MARGIN: u32 = 24;
pub const TITLE_HEIGHT: u32 = 44;
pub const HEADER_HEIGHT: u32 = 34;
pub const CELL_WIDTH: u32 = 140;
pub const CELL_HEIGHT: u32 = 84;
pub const FOOTER_SPACE: u32 = 18;

// Font sizes in pixels
pub const TITLE_FONT_SIZE: f32 = 22.0;
pub const HEADER_FONT_SIZE: f32 = 14.0;
pub const DAY_FONT_SIZE: f32 = 16.0;
pub const FOOTER_FONT_SIZE: f32 = 12.0;

/// Inset of the day number from the cell's top-left corner.
pub const DAY_LABEL_INSET: u32 = 10;

// Color palette
pub const COLOR_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const COLOR_TITLE: Rgba<u8> = Rgba([20, 20, 20, 255]);
pub const COLOR_HEADER_FILL: Rgba<u8> = Rgba([245, 247, 250, 255]);
pub const COLOR_HEADER_TEXT: Rgba<u8> = Rgba([50, 50, 50, 255]);
pub const COLOR_GRID_LINE: Rgba<u8> = Rgba([210, 214, 220, 255]);
pub const COLOR_CELL_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const COLOR_OUT_OF_MONTH_FILL: Rgba<u8> = Rgba([252, 252, 252, 255]);
pub const COLOR_DAY_TEXT: Rgba<u8> = Rgba([25, 25, 25, 255]);
pub const COLOR_FOOTER_TEXT: Rgba<u8> = Rgba([120, 120, 120, 255]);

/// Validated run parameters, built once from CLI arguments.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Weekday table index (0-8) holding day 1 of the month.
    pub start_day: u32,
    /// Title drawn centered in the band above the grid.
    pub title: String,
    /// Destination path for the encoded PNG.
    pub output: PathBuf,
}

impl CalContext {
    /// Label of the configured start day.
    pub fn start_day_label(&self) -> &'static str {
        WEEKDAYS[self.start_day as usize]
    }
}

/// Failure classes, each mapped to a distinct process exit code.
#[derive(Error, Debug)]
pub enum CalError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No PNG encoder available: {0}")]
    EncoderUnavailable(String),

    #[error("I/O error: {0}")]
    Write(#[from] std::io::Error),
}

impl CalError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalError::InvalidArgument(_) => 2,
            CalError::DirectoryCreation { .. } => 3,
            CalError::EncoderUnavailable(_) => 4,
            CalError::Write(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalError>;
