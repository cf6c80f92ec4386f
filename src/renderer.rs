//! Raster rendering of the calendar onto an RGBA canvas.
//!
//! Drawing is a fixed sequence: background, title, header band, grid
//! lines, day cells, footer. Later draws occlude earlier ones.

use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};

use crate::layout::Layout;
use crate::types::{
    CELL_HEIGHT, CELL_WIDTH, COLOR_BACKGROUND, COLOR_CELL_FILL, COLOR_DAY_TEXT, COLOR_FOOTER_TEXT,
    COLOR_GRID_LINE, COLOR_HEADER_FILL, COLOR_HEADER_TEXT, COLOR_OUT_OF_MONTH_FILL, COLOR_TITLE,
    CalContext, DAYS_PER_MONTH, DAYS_PER_WEEK, DAY_FONT_SIZE, DAY_LABEL_INSET, FOOTER_FONT_SIZE,
    HEADER_FONT_SIZE, HEADER_HEIGHT, MARGIN, TITLE_FONT_SIZE, TITLE_HEIGHT, WEEKDAYS,
};

static REGULAR_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static BOLD_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Regular and bold typefaces, parsed once from the embedded font data.
pub struct Fonts {
    pub regular: Font<'static>,
    pub bold: Font<'static>,
}

impl Fonts {
    pub fn load() -> Self {
        Fonts {
            regular: Font::try_from_bytes(REGULAR_FONT_DATA).expect("embedded regular font"),
            bold: Font::try_from_bytes(BOLD_FONT_DATA).expect("embedded bold font"),
        }
    }
}

/// Axis-aligned pixel rectangle used for text centering.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Total advance width of a line of text at the given scale.
pub fn text_width(font: &Font, scale: Scale, text: &str) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Baseline origin that centers `text` in `rect`, by bounding box with
/// the baseline corrected by the font ascent.
pub fn centered_baseline(font: &Font, scale: Scale, text: &str, rect: Rect) -> (f32, f32) {
    let metrics = font.v_metrics(scale);
    let text_height = metrics.ascent - metrics.descent;
    let x = rect.x as f32 + (rect.width as f32 - text_width(font, scale, text)) / 2.0;
    let y = rect.y as f32 + (rect.height as f32 - text_height) / 2.0 + metrics.ascent;
    (x, y)
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = (x + width).min(img.width());
    let y_end = (y + height).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Horizontal 1px line, both endpoints inclusive.
fn draw_hline(img: &mut RgbaImage, x0: u32, x1: u32, y: u32, color: Rgba<u8>) {
    if y >= img.height() {
        return;
    }
    for x in x0..=x1.min(img.width() - 1) {
        img.put_pixel(x, y, color);
    }
}

/// Vertical 1px line, both endpoints inclusive.
fn draw_vline(img: &mut RgbaImage, x: u32, y0: u32, y1: u32, color: Rgba<u8>) {
    if x >= img.width() {
        return;
    }
    for y in y0..=y1.min(img.height() - 1) {
        img.put_pixel(x, y, color);
    }
}

/// Draw a line of text with its baseline starting at (x, y), alpha-blending
/// glyph coverage over whatever is already on the canvas.
fn draw_text(img: &mut RgbaImage, font: &Font, scale: Scale, x: f32, y: f32, color: Rgba<u8>, text: &str) {
    for glyph in font.layout(text, scale, point(x, y)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                    return;
                }
                let dst = *img.get_pixel(px as u32, py as u32);
                let a = coverage.clamp(0.0, 1.0);
                let blend =
                    |src: u8, dst: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
                img.put_pixel(
                    px as u32,
                    py as u32,
                    Rgba([
                        blend(color[0], dst[0]),
                        blend(color[1], dst[1]),
                        blend(color[2], dst[2]),
                        255,
                    ]),
                );
            });
        }
    }
}

fn draw_centered(
    img: &mut RgbaImage,
    font: &Font,
    scale: Scale,
    text: &str,
    rect: Rect,
    color: Rgba<u8>,
) {
    let (x, y) = centered_baseline(font, scale, text, rect);
    draw_text(img, font, scale, x, y, color, text);
}

/// Render the full month view for the given context and layout.
pub fn render_month(ctx: &CalContext, layout: &Layout, fonts: &Fonts) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(layout.width, layout.height, COLOR_BACKGROUND);

    // Title, centered in the band above the header.
    draw_centered(
        &mut img,
        &fonts.bold,
        Scale::uniform(TITLE_FONT_SIZE),
        &ctx.title,
        Rect {
            x: layout.grid_left,
            y: layout.title_top,
            width: layout.grid_width,
            height: TITLE_HEIGHT,
        },
        COLOR_TITLE,
    );

    // Header band background and weekday labels.
    fill_rect(
        &mut img,
        layout.grid_left,
        layout.header_top,
        layout.grid_width,
        HEADER_HEIGHT,
        COLOR_HEADER_FILL,
    );
    let header_scale = Scale::uniform(HEADER_FONT_SIZE);
    for col in 0..DAYS_PER_WEEK {
        draw_centered(
            &mut img,
            &fonts.bold,
            header_scale,
            WEEKDAYS[col as usize],
            Rect {
                x: layout.grid_left + col * CELL_WIDTH,
                y: layout.header_top,
                width: CELL_WIDTH,
                height: HEADER_HEIGHT,
            },
            COLOR_HEADER_TEXT,
        );
    }

    // Grid lines: verticals span header and grid, horizontals sit at the
    // header top, the header/grid boundary, and every row boundary.
    let grid_bottom = layout.grid_top + layout.grid_height;
    let grid_right = layout.grid_left + layout.grid_width;
    for col in 0..=DAYS_PER_WEEK {
        let x = layout.grid_left + col * CELL_WIDTH;
        draw_vline(&mut img, x, layout.header_top, grid_bottom, COLOR_GRID_LINE);
    }
    draw_hline(&mut img, layout.grid_left, grid_right, layout.header_top, COLOR_GRID_LINE);
    draw_hline(&mut img, layout.grid_left, grid_right, layout.grid_top, COLOR_GRID_LINE);
    for row in 1..=layout.rows {
        let y = layout.grid_top + row * CELL_HEIGHT;
        draw_hline(&mut img, layout.grid_left, grid_right, y, COLOR_GRID_LINE);
    }

    // Day cells. Fills start one pixel inside the cell so the separator
    // lines stay visible.
    let day_scale = Scale::uniform(DAY_FONT_SIZE);
    let day_ascent = fonts.regular.v_metrics(day_scale).ascent;
    for index in 0..layout.cell_count() {
        let (x, y) = layout.cell_origin(index);
        let day = layout.day_number(index);

        if !Layout::is_in_month(day) {
            fill_rect(
                &mut img,
                x + 1,
                y + 1,
                CELL_WIDTH - 1,
                CELL_HEIGHT - 1,
                COLOR_OUT_OF_MONTH_FILL,
            );
            continue;
        }

        fill_rect(&mut img, x + 1, y + 1, CELL_WIDTH - 1, CELL_HEIGHT - 1, COLOR_CELL_FILL);
        draw_text(
            &mut img,
            &fonts.regular,
            day_scale,
            (x + DAY_LABEL_INSET) as f32,
            (y + DAY_LABEL_INSET) as f32 + day_ascent,
            COLOR_DAY_TEXT,
            &day.to_string(),
        );
    }

    // Footer caption below the grid.
    let footer = format!(
        "{DAYS_PER_WEEK} days/week \u{2022} {DAYS_PER_MONTH} days/month \u{2022} start={}",
        ctx.start_day_label()
    );
    draw_text(
        &mut img,
        &fonts.regular,
        Scale::uniform(FOOTER_FONT_SIZE),
        MARGIN as f32,
        (layout.height - MARGIN) as f32,
        COLOR_FOOTER_TEXT,
        &footer,
    );

    img
}
