use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::{RadarError, RadarResult};

/// Parse SVG markup into a usvg tree.
pub fn parse_svg(markup: &str) -> RadarResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(markup, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize SVG markup into a straight-alpha RGBA8 image of `width` x `height`.
///
/// The document is scaled non-uniformly to fill the target size. CSS animations are not
/// evaluated; the document is rendered at its resting state.
pub fn rasterize_svg(markup: &str, width: u32, height: u32) -> RadarResult<RgbaImage> {
    let tree = parse_svg(markup)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| RadarError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut straight = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        straight.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| RadarError::render("svg raster byte length mismatch"))
}
