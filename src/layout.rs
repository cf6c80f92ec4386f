//! Grid geometry computed from the start-day index and the fixed
//! layout constants.

use crate::types::{
    CELL_HEIGHT, CELL_WIDTH, DAYS_PER_MONTH, DAYS_PER_WEEK, FOOTER_SPACE, HEADER_HEIGHT, MARGIN,
    TITLE_HEIGHT,
};

/// Pixel geometry of the rendered image. Pure function of the start day;
/// all positions are absolute canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Weekday index (0-8) holding day 1.
    pub start_day: u32,
    /// Number of grid rows, always the minimum with rows * 9 >= start_day + 37.
    pub rows: u32,
    /// Overall canvas width in pixels.
    pub width: u32,
    /// Overall canvas height in pixels.
    pub height: u32,
    /// Left edge of the grid (and of the title/header bands).
    pub grid_left: u32,
    /// Top edge of the title band.
    pub title_top: u32,
    /// Top edge of the weekday header band.
    pub header_top: u32,
    /// Top edge of the day-cell grid.
    pub grid_top: u32,
    /// Width of the grid (9 cells).
    pub grid_width: u32,
    /// Height of the grid (rows cells).
    pub grid_height: u32,
}

impl Layout {
    pub fn new(start_day: u32) -> Self {
        let rows = (start_day + DAYS_PER_MONTH).div_ceil(DAYS_PER_WEEK);

        let grid_width = DAYS_PER_WEEK * CELL_WIDTH;
        let grid_height = rows * CELL_HEIGHT;

        let grid_left = MARGIN;
        let title_top = MARGIN;
        let header_top = title_top + TITLE_HEIGHT;
        let grid_top = header_top + HEADER_HEIGHT;

        Layout {
            start_day,
            rows,
            width: MARGIN * 2 + grid_width,
            height: MARGIN * 2 + TITLE_HEIGHT + HEADER_HEIGHT + grid_height + FOOTER_SPACE,
            grid_left,
            title_top,
            header_top,
            grid_top,
            grid_width,
            grid_height,
        }
    }

    /// Total number of day cells in the grid.
    pub fn cell_count(&self) -> u32 {
        self.rows * DAYS_PER_WEEK
    }

    /// Top-left corner of the cell at the given row-major index.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let col = index % DAYS_PER_WEEK;
        let row = index / DAYS_PER_WEEK;
        (
            self.grid_left + col * CELL_WIDTH,
            self.grid_top + row * CELL_HEIGHT,
        )
    }

    /// Day number shown in the cell at the given row-major index.
    /// Values outside 1..=37 mean the cell is out of the month.
    pub fn day_number(&self, index: u32) -> i32 {
        index as i32 - self.start_day as i32 + 1
    }

    /// Whether a computed day number falls within the month.
    pub fn is_in_month(day: i32) -> bool {
        (1..=DAYS_PER_MONTH as i32).contains(&day)
    }
}
