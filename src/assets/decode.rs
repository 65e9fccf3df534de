use std::{io::Cursor, path::Path};

use image::RgbaImage;

use crate::foundation::error::{RadarError, RadarResult};

/// Decoded source bitmap, normalised to straight RGBA8.
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// Pixels, straight alpha.
    pub rgba: RgbaImage,
    /// Whether the encoded image carried an alpha channel.
    pub has_alpha: bool,
}

impl SourceImage {
    /// Convert to RGBA8, remembering whether the decoded colour type had alpha.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        let has_alpha = img.color().has_alpha();
        Self {
            rgba: img.to_rgba8(),
            has_alpha,
        }
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.rgba.dimensions()
    }
}

/// Read and decode the image at `path`.
///
/// Any failure (missing file, unknown format, corrupt data, zero-sized image) is reported as
/// [`RadarError::Load`] naming the path.
#[tracing::instrument]
pub fn load_source_image(path: &Path) -> RadarResult<SourceImage> {
    let bytes =
        std::fs::read(path).map_err(|e| RadarError::load(format!("{}: {e}", path.display())))?;
    decode_source_image(&bytes).map_err(|e| match e {
        RadarError::Load(msg) => RadarError::load(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Decode an in-memory encoded image, sniffing the format from its magic bytes.
pub fn decode_source_image(bytes: &[u8]) -> RadarResult<SourceImage> {
    let img = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| RadarError::load(e.to_string()))?
        .decode()
        .map_err(|e| RadarError::load(e.to_string()))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(RadarError::load("image has no pixels"));
    }
    let src = SourceImage::from_dynamic(img);
    let (w, h) = src.dimensions();
    tracing::debug!(width = w, height = h, has_alpha = src.has_alpha, "decoded source image");
    Ok(src)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
