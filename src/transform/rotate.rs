use image::RgbaImage;
use resvg::tiny_skia;

use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{RadarError, RadarResult};
use crate::foundation::math::normalize_degrees;
use crate::transform::affine::inverse_rotation_about;

/// How a bitmap is rotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateMethod {
    /// Draw the source under a rotation transform with bilinear filtering (tiny-skia).
    #[default]
    Resample,
    /// Inverse-map every destination pixel through a 2x3 rotation matrix with bilinear
    /// interpolation and a constant border.
    AffineWarp,
}

impl RotateMethod {
    /// File name prefix for numbered frames produced by this method.
    pub fn frame_prefix(self) -> &'static str {
        match self {
            Self::Resample => "rotated_frame",
            Self::AffineWarp => "warp_frame",
        }
    }
}

/// Rotate `img` counter-clockwise by `deg` about its centre, keeping the canvas size.
///
/// Pixels exposed by the rotation are filled with `fill`. Angles are wrapped into
/// `[0, 360)` first; a wrapped angle of zero returns an exact copy.
pub fn rotate_image(
    img: &RgbaImage,
    deg: f64,
    fill: Rgba8,
    method: RotateMethod,
) -> RadarResult<RgbaImage> {
    let (w, h) = img.dimensions();
    let canvas = Canvas::new(w, h)?;
    let deg = normalize_degrees(deg);
    if deg == 0.0 {
        return Ok(img.clone());
    }

    match method {
        RotateMethod::Resample => rotate_resample(img, canvas, deg, fill),
        RotateMethod::AffineWarp => Ok(rotate_warp(img, canvas, deg, fill)),
    }
}

fn rotate_resample(img: &RgbaImage, canvas: Canvas, deg: f64, fill: Rgba8) -> RadarResult<RgbaImage> {
    let mut src = tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| RadarError::render("failed to allocate source pixmap"))?;
    for (dst, px) in src.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = px.0;
        *dst = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    let mut out = tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| RadarError::render("failed to allocate rotation pixmap"))?;
    out.fill(tiny_skia::Color::from_rgba8(fill.r, fill.g, fill.b, fill.a));

    let c = canvas.center();
    let paint = tiny_skia::PixmapPaint {
        quality: tiny_skia::FilterQuality::Bilinear,
        ..tiny_skia::PixmapPaint::default()
    };
    let xform = tiny_skia::Transform::from_rotate_at(-deg as f32, c.x as f32, c.y as f32);
    out.draw_pixmap(0, 0, src.as_ref(), &paint, xform, None);

    let mut straight = Vec::with_capacity(canvas.width as usize * canvas.height as usize * 4);
    for px in out.pixels() {
        let c = px.demultiply();
        straight.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(canvas.width, canvas.height, straight)
        .ok_or_else(|| RadarError::render("rotated pixmap byte length mismatch"))
}

fn rotate_warp(img: &RgbaImage, canvas: Canvas, deg: f64, fill: Rgba8) -> RgbaImage {
    let inv = inverse_rotation_about(canvas.center(), deg);
    let mut out = RgbaImage::new(canvas.width, canvas.height);

    for (x, y, px) in out.enumerate_pixels_mut() {
        let p = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        px.0 = sample_bilinear(img, p.x - 0.5, p.y - 0.5, fill);
    }
    out
}

/// Bilinear sample at pixel-centre coordinates `(fx, fy)`, weighting colour by alpha so
/// transparent neighbours do not bleed their colour channels.
fn sample_bilinear(img: &RgbaImage, fx: f64, fy: f64, border: Rgba8) -> [u8; 4] {
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;

    let fetch = |x: f64, y: f64| -> [u8; 4] {
        if x < 0.0 || y < 0.0 || x >= f64::from(img.width()) || y >= f64::from(img.height()) {
            return border.to_array();
        }
        img.get_pixel(x as u32, y as u32).0
    };

    let taps = [
        (fetch(x0, y0), (1.0 - tx) * (1.0 - ty)),
        (fetch(x0 + 1.0, y0), tx * (1.0 - ty)),
        (fetch(x0, y0 + 1.0), (1.0 - tx) * ty),
        (fetch(x0 + 1.0, y0 + 1.0), tx * ty),
    ];

    let mut alpha = 0.0f64;
    let mut rgb = [0.0f64; 3];
    for (px, weight) in taps {
        let wa = weight * f64::from(px[3]);
        alpha += wa;
        for (acc, c) in rgb.iter_mut().zip(px) {
            *acc += wa * f64::from(c);
        }
    }

    if alpha <= 0.0 {
        return [0, 0, 0, 0];
    }
    let to_u8 = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    [
        to_u8(rgb[0] / alpha),
        to_u8(rgb[1] / alpha),
        to_u8(rgb[2] / alpha),
        to_u8(alpha),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
