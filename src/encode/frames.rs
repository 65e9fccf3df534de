//! Numbered per-frame PNG files and their interactive cleanup.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::animation::model::Frame;
use crate::encode::gif::ensure_parent_dir;
use crate::foundation::error::RadarResult;

/// Question printed before deleting the numbered frame files.
pub const CLEANUP_PROMPT: &str = "Delete individual frame files? (y/n): ";

/// `<prefix>_<index>.png` with the index zero padded to two digits.
pub fn frame_file_name(prefix: &str, index: u32) -> String {
    format!("{prefix}_{index:02}.png")
}

/// Save `frame` as an opaque RGB PNG under `dir` and return its path.
pub fn write_frame_file(dir: &Path, prefix: &str, frame: &Frame) -> RadarResult<PathBuf> {
    let path = dir.join(frame_file_name(prefix, frame.index.0));
    ensure_parent_dir(&path)?;
    let rgb = image::DynamicImage::ImageRgba8(frame.image.clone()).into_rgb8();
    rgb.save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("write frame png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote frame");
    Ok(path)
}

/// Remove the listed files that still exist; returns how many were removed.
pub fn remove_frame_files(paths: &[PathBuf]) -> RadarResult<usize> {
    let mut removed = 0;
    for path in paths {
        if path.exists() {
            std::fs::remove_file(path)
                .with_context(|| format!("remove frame file '{}'", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Answer to [`CLEANUP_PROMPT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CleanupChoice {
    /// Remove the frame files.
    Delete,
    /// Leave them on disk.
    Keep,
}

/// Ask whether to delete the frame files.
///
/// Only an answer of `y` (any case) deletes. End of input, a read error, or a failed prompt
/// write all keep the files.
pub fn prompt_cleanup(input: &mut impl BufRead, output: &mut impl Write) -> CleanupChoice {
    if write!(output, "{CLEANUP_PROMPT}")
        .and_then(|()| output.flush())
        .is_err()
    {
        return CleanupChoice::Keep;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => CleanupChoice::Keep,
        Ok(_) => {
            let answer = line.trim_end_matches(['\r', '\n']);
            if answer.eq_ignore_ascii_case("y") {
                CleanupChoice::Delete
            } else {
                CleanupChoice::Keep
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/frames.rs"]
mod tests;
