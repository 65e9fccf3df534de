use super::*;
use crate::assets::svg_raster::{parse_svg, rasterize_svg};

#[test]
fn fmt_num_is_compact() {
    assert_eq!(fmt_num(100.0), "100");
    assert_eq!(fmt_num(0.0), "0");
    assert_eq!(fmt_num(-1e-12), "0");
    assert_eq!(fmt_num(12.5), "12.5");
    assert_eq!(fmt_num(0.4), "0.4");
    assert_eq!(fmt_num(2.0 / 3.0), "0.667");
}

#[test]
fn static_svg_rotates_sweep_groups() {
    let svg = static_svg(&RadarStyle::default(), 45.0);
    assert_eq!(svg.matches(r#"transform="rotate(45 100 100)""#).count(), 2);
    assert!(svg.contains(r#"fill-opacity="0.4""#));
    assert!(!svg.contains("@keyframes"));
    parse_svg(&svg).unwrap();
}

#[test]
fn static_svg_rasterizes_like_the_bitmap_renderer() {
    let style = RadarStyle::default();
    let img = rasterize_svg(&static_svg(&style, 0.0), 200, 200).unwrap();

    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(70, 130).0, [255, 255, 255, 255]);
    let [r, g, _, a] = img.get_pixel(130, 70).0;
    assert_eq!(a, 255);
    assert!(r < 250 && g > r);

    let rotated = rasterize_svg(&static_svg(&style, 180.0), 200, 200).unwrap();
    assert_ne!(rotated.get_pixel(70, 130).0, [255, 255, 255, 255]);
    assert_eq!(rotated.get_pixel(130, 70).0, [255, 255, 255, 255]);
}

#[test]
fn animated_svg_has_keyframes_and_period() {
    let svg = animated_svg(&RadarStyle::default(), DEFAULT_SPIN_PERIOD);
    assert!(svg.contains("@keyframes radar-sweep"));
    assert!(svg.contains("to { transform: rotate(360deg); }"));
    assert!(svg.contains("animation: radar-sweep 2s linear infinite;"));
    assert!(svg.contains("transform-origin: 100px 100px;"));
    assert_eq!(svg.matches(r#"class="radar-sweep""#).count(), 2);
    assert!(!svg.contains("rotate(0 "));

    let slow = animated_svg(&RadarStyle::default(), Duration::from_millis(3500));
    assert!(slow.contains("radar-sweep 3.5s linear infinite"));
}
