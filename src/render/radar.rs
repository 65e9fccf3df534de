//! Procedural radar glyph: style constants and the per-angle draw list.
//!
//! Angles are in degrees, measured clockwise from 3 o'clock in screen space (y down).

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Point, Rgba8, Vec2};
use crate::foundation::error::{RadarError, RadarResult};

/// Arc covered by the filled sweep sector, trailing the pointer.
pub const SWEEP_SPAN_DEG: f64 = 90.0;

/// Fixed drawing constants of the radar glyph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    /// Square canvas edge in pixels.
    pub size: u32,
    /// Radius of the outer ring.
    pub outer_radius: f64,
    /// Radius of the inner ring, smaller than `outer_radius`.
    pub inner_radius: f64,
    /// Stroke width of both rings.
    pub ring_width: f64,
    /// Stroke width of the radial pointer.
    pub pointer_width: f64,
    /// Radius of the solid centre dot.
    pub center_dot_radius: f64,
    /// Radius of the trailing blip.
    pub blip_radius: f64,
    /// Blip distance from the centre as a fraction of `outer_radius`.
    pub blip_distance: f64,
    /// How far the blip trails the pointer.
    pub blip_lag_deg: f64,
    /// Canvas fill; must be opaque.
    pub background: Rgba8,
    /// Colour of both rings.
    pub ring_color: Rgba8,
    /// Sector fill, usually translucent.
    pub sweep_color: Rgba8,
    /// Colour of the radial pointer.
    pub pointer_color: Rgba8,
    /// Centre dot and blip.
    pub dot_color: Rgba8,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            size: 200,
            outer_radius: 90.0,
            inner_radius: 55.0,
            ring_width: 3.0,
            pointer_width: 3.0,
            center_dot_radius: 6.0,
            blip_radius: 5.0,
            blip_distance: 0.7,
            blip_lag_deg: 45.0,
            background: Rgba8::WHITE,
            ring_color: Rgba8::rgb(0x16, 0xa3, 0x4a),
            sweep_color: Rgba8::new(0x22, 0xc5, 0x5e, 0x66),
            pointer_color: Rgba8::rgb(0x15, 0x80, 0x3d),
            dot_color: Rgba8::rgb(0x15, 0x80, 0x3d),
        }
    }
}

impl RadarStyle {
    /// Check sizes are positive and finite, the rings are ordered, and the background is opaque.
    pub fn validate(&self) -> RadarResult<()> {
        Canvas::new(self.size, self.size)?;
        if self.size > u32::from(u16::MAX) {
            return Err(RadarError::validation(format!(
                "radar size {} exceeds {}",
                self.size,
                u16::MAX
            )));
        }
        let finite_positive = |name: &str, v: f64| -> RadarResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(RadarError::validation(format!("{name} must be > 0, got {v}")));
            }
            Ok(())
        };
        finite_positive("outer_radius", self.outer_radius)?;
        finite_positive("inner_radius", self.inner_radius)?;
        finite_positive("ring_width", self.ring_width)?;
        finite_positive("pointer_width", self.pointer_width)?;
        finite_positive("center_dot_radius", self.center_dot_radius)?;
        finite_positive("blip_radius", self.blip_radius)?;
        if self.inner_radius >= self.outer_radius {
            return Err(RadarError::validation(
                "inner_radius must be smaller than outer_radius",
            ));
        }
        if !(0.0..=1.0).contains(&self.blip_distance) {
            return Err(RadarError::validation("blip_distance must be within [0, 1]"));
        }
        if !self.background.is_opaque() {
            return Err(RadarError::validation("radar background must be opaque"));
        }
        Ok(())
    }

    /// Square canvas of `size` pixels.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.size,
            height: self.size,
        }
    }

    /// Centre of the glyph.
    pub fn center(&self) -> Point {
        self.canvas().center()
    }

    /// Load a style from JSON; missing fields keep their defaults.
    pub fn from_json_path(path: &Path) -> RadarResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read radar style '{}'", path.display()))?;
        let style: Self = serde_json::from_str(&text)
            .map_err(|e| RadarError::serde(format!("{}: {e}", path.display())))?;
        style.validate()?;
        Ok(style)
    }
}

/// Point at `radius` from `center` in direction `deg`.
pub fn polar(center: Point, radius: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * radius
}

/// Start and end angles of the sweep sector for pointer angle `deg`.
pub fn sweep_span(deg: f64) -> (f64, f64) {
    (deg - SWEEP_SPAN_DEG, deg)
}

/// One drawing primitive of the radar glyph.
#[derive(Clone, Debug, PartialEq)]
pub enum RadarOp {
    /// Solid fill of the whole canvas.
    Background {
        /// Fill colour.
        color: Rgba8,
    },
    /// Stroked circle.
    RingOutline {
        /// Circle centre.
        center: Point,
        /// Radius to the middle of the stroke.
        radius: f64,
        /// Stroke width.
        width: f64,
        /// Stroke colour.
        color: Rgba8,
    },
    /// Filled pie slice from `start_deg` to `end_deg`, clockwise.
    Sector {
        /// Apex of the slice.
        center: Point,
        /// Slice radius.
        radius: f64,
        /// Leading edge angle in degrees.
        start_deg: f64,
        /// Trailing edge angle in degrees.
        end_deg: f64,
        /// Fill colour, usually translucent.
        color: Rgba8,
    },
    /// Filled disc.
    Dot {
        /// Disc centre.
        center: Point,
        /// Disc radius.
        radius: f64,
        /// Fill colour.
        color: Rgba8,
    },
    /// Straight stroke with round caps.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width.
        width: f64,
        /// Stroke colour.
        color: Rgba8,
    },
}

/// Draw list for one frame at pointer angle `deg`, in paint order.
pub fn radar_ops(style: &RadarStyle, deg: f64) -> Vec<RadarOp> {
    let c = style.center();
    let rings = [style.outer_radius, style.inner_radius].map(|radius| RadarOp::RingOutline {
        center: c,
        radius,
        width: style.ring_width,
        color: style.ring_color,
    });
    let (start_deg, end_deg) = sweep_span(deg);

    let mut ops = Vec::with_capacity(9);
    ops.push(RadarOp::Background {
        color: style.background,
    });
    ops.extend(rings.iter().cloned());
    ops.push(RadarOp::Sector {
        center: c,
        radius: style.outer_radius,
        start_deg,
        end_deg,
        color: style.sweep_color,
    });
    // Rings again so they sit above the sweep fill.
    ops.extend(rings);
    ops.push(RadarOp::Dot {
        center: c,
        radius: style.center_dot_radius,
        color: style.dot_color,
    });
    ops.push(RadarOp::Line {
        from: c,
        to: polar(c, style.outer_radius, deg),
        width: style.pointer_width,
        color: style.pointer_color,
    });
    ops.push(RadarOp::Dot {
        center: polar(
            c,
            style.outer_radius * style.blip_distance,
            deg - style.blip_lag_deg,
        ),
        radius: style.blip_radius,
        color: style.dot_color,
    });
    ops
}

#[cfg(test)]
#[path = "../../tests/unit/render/radar.rs"]
mod tests;
