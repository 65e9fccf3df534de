use image::RgbaImage;
use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{RadarError, RadarResult};
use crate::render::radar::RadarOp;

const PATH_TOLERANCE: f64 = 0.1;

/// Rasterize a radar draw list with vello_cpu into a straight-alpha RGBA8 image.
pub fn render_ops(canvas: Canvas, ops: &[RadarOp]) -> RadarResult<RgbaImage> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| RadarError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| RadarError::render("canvas height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    for op in ops {
        draw_op(&mut ctx, canvas, op);
    }
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let mut data = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    RgbaImage::from_raw(canvas.width, canvas.height, data)
        .ok_or_else(|| RadarError::render("pixmap byte length mismatch"))
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, canvas: Canvas, op: &RadarOp) {
    match op {
        RadarOp::Background { color } => {
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));
        }
        RadarOp::RingOutline {
            center,
            radius,
            width,
            color,
        } => {
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            let path = kurbo::Circle::new(*center, *radius).to_path(PATH_TOLERANCE);
            ctx.stroke_path(&bezpath_to_cpu(&path));
        }
        RadarOp::Sector {
            center,
            radius,
            start_deg,
            end_deg,
            color,
        } => {
            ctx.set_paint(color_to_cpu(*color));
            let path = sector_path(*center, *radius, *start_deg, *end_deg);
            ctx.fill_path(&bezpath_to_cpu(&path));
        }
        RadarOp::Dot {
            center,
            radius,
            color,
        } => {
            ctx.set_paint(color_to_cpu(*color));
            let path = kurbo::Circle::new(*center, *radius).to_path(PATH_TOLERANCE);
            ctx.fill_path(&bezpath_to_cpu(&path));
        }
        RadarOp::Line {
            from,
            to,
            width,
            color,
        } => {
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(*width).with_caps(vello_cpu::kurbo::Cap::Round),
            );
            let mut path = BezPath::new();
            path.move_to(*from);
            path.line_to(*to);
            ctx.stroke_path(&bezpath_to_cpu(&path));
        }
    }
}

/// Closed pie slice from `start_deg` to `end_deg` (clockwise in screen space).
pub fn sector_path(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> BezPath {
    kurbo::CircleSegment::new(
        center,
        radius,
        0.0,
        start_deg.to_radians(),
        (end_deg - start_deg).to_radians(),
    )
    .to_path(PATH_TOLERANCE)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
