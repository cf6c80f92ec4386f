//! Renders a stylized calendar month with a 9-day week and a 37-day month
//! to a PNG image.
//!
//! Features:
//! - Start day selectable by index (0-8), full name, or abbreviation
//! - Grid row count derived from the start offset, never hardcoded
//! - Embedded fonts for deterministic output across machines

pub mod args;
pub mod layout;
pub mod output;
pub mod renderer;
pub mod types;
