//! Vector renditions of the radar glyph.
//!
//! The rotating parts (sweep sector, pointer, blip) are drawn once at angle 0 and placed in
//! groups that are rotated about the centre, either statically or by a CSS keyframe rule.

use std::fmt::Write as _;
use std::time::Duration;

use crate::foundation::core::{Point, Rgba8};
use crate::render::radar::{RadarStyle, SWEEP_SPAN_DEG, polar, sweep_span};

/// Default period of one full turn in the animated document.
pub const DEFAULT_SPIN_PERIOD: Duration = Duration::from_secs(2);

const SWEEP_CLASS: &str = "radar-sweep";

/// Single-frame SVG with the sweep rotated to `deg`.
pub fn static_svg(style: &RadarStyle, deg: f64) -> String {
    let c = style.center();
    let rotate = format!(r#" transform="rotate({} {} {})""#, fmt_num(deg), fmt_num(c.x), fmt_num(c.y));
    document(style, "", &rotate)
}

/// Self-contained SVG whose sweep rotates continuously, one turn per `period`, via CSS.
pub fn animated_svg(style: &RadarStyle, period: Duration) -> String {
    let c = style.center();
    let css = format!(
        r#"  <style>
    @keyframes {SWEEP_CLASS} {{
      from {{ transform: rotate(0deg); }}
      to {{ transform: rotate(360deg); }}
    }}
    .{SWEEP_CLASS} {{
      transform-origin: {}px {}px;
      animation: {SWEEP_CLASS} {}s linear infinite;
    }}
  </style>
"#,
        fmt_num(c.x),
        fmt_num(c.y),
        fmt_num(period.as_secs_f64()),
    );
    document(style, &css, &format!(r#" class="{SWEEP_CLASS}""#))
}

fn document(style: &RadarStyle, head: &str, group_attrs: &str) -> String {
    let size = style.size;
    let c = style.center();
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    out.push_str(head);
    let _ = writeln!(
        out,
        r#"  <rect width="{size}" height="{size}"{}/>"#,
        fill_attrs(style.background)
    );
    push_rings(&mut out, style, c);

    let (start_deg, end_deg) = sweep_span(0.0);
    let from = polar(c, style.outer_radius, start_deg);
    let to = polar(c, style.outer_radius, end_deg);
    let large_arc = u8::from(SWEEP_SPAN_DEG > 180.0);
    let _ = writeln!(out, "  <g{group_attrs}>");
    let _ = writeln!(
        out,
        r#"    <path d="M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z"{}/>"#,
        fmt_num(c.x),
        fmt_num(c.y),
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(to.x),
        fmt_num(to.y),
        fill_attrs(style.sweep_color),
        r = fmt_num(style.outer_radius),
    );
    out.push_str("  </g>\n");

    push_rings(&mut out, style, c);
    push_dot(&mut out, c, style.center_dot_radius, style.dot_color, "  ");

    let tip = polar(c, style.outer_radius, 0.0);
    let blip = polar(c, style.outer_radius * style.blip_distance, -style.blip_lag_deg);
    let _ = writeln!(out, "  <g{group_attrs}>");
    let _ = writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}" stroke-linecap="round"{}/>"#,
        fmt_num(c.x),
        fmt_num(c.y),
        fmt_num(tip.x),
        fmt_num(tip.y),
        fmt_num(style.pointer_width),
        stroke_attrs(style.pointer_color),
    );
    push_dot(&mut out, blip, style.blip_radius, style.dot_color, "    ");
    out.push_str("  </g>\n");

    out.push_str("</svg>\n");
    out
}

fn push_rings(out: &mut String, style: &RadarStyle, c: Point) {
    for r in [style.outer_radius, style.inner_radius] {
        let _ = writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke-width="{}"{}/>"#,
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(r),
            fmt_num(style.ring_width),
            stroke_attrs(style.ring_color),
        );
    }
}

fn push_dot(out: &mut String, center: Point, r: f64, color: Rgba8, indent: &str) {
    let _ = writeln!(
        out,
        r#"{indent}<circle cx="{}" cy="{}" r="{}"{}/>"#,
        fmt_num(center.x),
        fmt_num(center.y),
        fmt_num(r),
        fill_attrs(color),
    );
}

fn fill_attrs(c: Rgba8) -> String {
    paint_attrs("fill", c)
}

fn stroke_attrs(c: Rgba8) -> String {
    paint_attrs("stroke", c)
}

fn paint_attrs(kind: &str, c: Rgba8) -> String {
    let hex = Rgba8::rgb(c.r, c.g, c.b).to_hex();
    if c.is_opaque() {
        format!(r#" {kind}="{hex}""#)
    } else {
        let opacity = f64::from(c.a) / 255.0;
        format!(r#" {kind}="{hex}" {kind}-opacity="{}""#, fmt_num(opacity))
    }
}

/// Compact decimal: at most 3 fractional digits, trailing zeros dropped.
fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 5e-4 { 0.0 } else { v };
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
