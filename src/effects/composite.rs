use image::RgbaImage;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{RadarError, RadarResult};
use crate::foundation::math::mul_div255_u16;

/// Composite straight-alpha RGBA8 pixels over an opaque background, using each pixel's
/// alpha as the blend mask. Every output pixel has alpha 255.
pub fn flatten_to_opaque_rgba8(dst: &mut [u8], src: &[u8], bg: Rgba8) -> RadarResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RadarError::render(
            "flatten_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }
    if !bg.is_opaque() {
        return Err(RadarError::validation("flatten background must be opaque"));
    }

    let bg_r = u16::from(bg.r);
    let bg_g = u16::from(bg.g);
    let bg_b = u16::from(bg.b);

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        let r = mul_div255_u16(u16::from(s[0]), a) + mul_div255_u16(bg_r, inv);
        let g = mul_div255_u16(u16::from(s[1]), a) + mul_div255_u16(bg_g, inv);
        let b = mul_div255_u16(u16::from(s[2]), a) + mul_div255_u16(bg_b, inv);

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(())
}

/// Flatten an image onto `bg`, returning a new opaque image.
pub fn flatten_image(img: &RgbaImage, bg: Rgba8) -> RadarResult<RgbaImage> {
    let (w, h) = img.dimensions();
    let mut out = RgbaImage::new(w, h);
    flatten_to_opaque_rgba8(&mut out, img.as_raw(), bg)?;
    Ok(out)
}

/// Whether any pixel is not fully opaque.
pub fn has_transparency(img: &RgbaImage) -> bool {
    img.pixels().any(|p| p.0[3] != 255)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
