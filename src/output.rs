//! PNG encoding and output-path handling.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, RgbaImage};

use crate::types::{CalError, Result};

/// Encode the canvas as PNG at `path`, creating any missing parent
/// directories. Returns the absolute path that was written.
///
/// The format is always PNG, regardless of the path's extension.
pub fn write_image(img: &RgbaImage, path: &Path) -> Result<PathBuf> {
    let absolute = absolutize(path)?;

    if let Some(parent) = absolute.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| CalError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    img.save_with_format(&absolute, ImageFormat::Png)
        .map_err(|err| match err {
            ImageError::Unsupported(e) => CalError::EncoderUnavailable(e.to_string()),
            ImageError::IoError(e) => CalError::Write(e),
            other => CalError::Write(std::io::Error::other(other)),
        })?;

    Ok(absolute)
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
