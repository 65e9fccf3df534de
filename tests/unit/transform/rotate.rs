use super::*;

const METHODS: [RotateMethod; 2] = [RotateMethod::Resample, RotateMethod::AffineWarp];

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x * 30) as u8, (y * 30) as u8, ((x + y) * 10) as u8, 255])
    })
}

/// 8x8 image with four solid quadrants: TL red, TR green, BL blue, BR yellow.
fn quadrants() -> RgbaImage {
    RgbaImage::from_fn(8, 8, |x, y| match (x < 4, y < 4) {
        (true, true) => image::Rgba([255, 0, 0, 255]),
        (false, true) => image::Rgba([0, 255, 0, 255]),
        (true, false) => image::Rgba([0, 0, 255, 255]),
        (false, false) => image::Rgba([255, 255, 0, 255]),
    })
}

fn assert_close(a: [u8; 4], b: [u8; 4], tol: u8) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert!(x.abs_diff(*y) <= tol, "{a:?} vs {b:?}");
    }
}

#[test]
fn zero_and_full_turn_reproduce_input() {
    let img = gradient(7, 5);
    for method in METHODS {
        for deg in [0.0, 360.0, -360.0, 720.0] {
            let out = rotate_image(&img, deg, Rgba8::WHITE, method).unwrap();
            assert_eq!(out, img, "{method:?} at {deg}");
        }
    }
}

#[test]
fn canvas_size_is_preserved() {
    let img = gradient(9, 4);
    for method in METHODS {
        let out = rotate_image(&img, 33.0, Rgba8::WHITE, method).unwrap();
        assert_eq!(out.dimensions(), (9, 4));
    }
}

#[test]
fn quarter_turn_is_counter_clockwise() {
    let img = quadrants();
    for method in METHODS {
        let out = rotate_image(&img, 90.0, Rgba8::WHITE, method).unwrap();
        // The top-right quadrant moves to the top-left.
        assert_close(out.get_pixel(1, 1).0, [0, 255, 0, 255], 4);
        // The bottom-left quadrant moves to the bottom-right.
        assert_close(out.get_pixel(6, 6).0, [0, 0, 255, 255], 4);
    }
}

#[test]
fn warp_half_turn_is_a_pixel_permutation() {
    let img = gradient(6, 4);
    let out = rotate_image(&img, 180.0, Rgba8::WHITE, RotateMethod::AffineWarp).unwrap();
    for (x, y, px) in out.enumerate_pixels() {
        assert_eq!(px.0, img.get_pixel(5 - x, 3 - y).0);
    }
}

#[test]
fn exposed_corners_use_the_fill_colour() {
    let img = RgbaImage::from_pixel(8, 8, image::Rgba([255, 0, 0, 255]));
    for method in METHODS {
        let out = rotate_image(&img, 45.0, Rgba8::WHITE, method).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255], "{method:?}");
        assert_close(out.get_pixel(4, 4).0, [255, 0, 0, 255], 1);

        let out = rotate_image(&img, 45.0, Rgba8::TRANSPARENT, method).unwrap();
        assert_eq!(out.get_pixel(0, 0).0[3], 0, "{method:?}");
    }
}

#[test]
fn frame_prefixes_differ_per_method() {
    assert_eq!(RotateMethod::Resample.frame_prefix(), "rotated_frame");
    assert_eq!(RotateMethod::AffineWarp.frame_prefix(), "warp_frame");
}
