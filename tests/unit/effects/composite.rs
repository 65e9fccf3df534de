use super::*;

#[test]
fn straight_half_red_over_white() {
    let src = vec![255u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, Rgba8::WHITE).unwrap();
    assert_eq!(dst, vec![255u8, 127, 127, 255]);
}

#[test]
fn straight_half_red_over_black() {
    let src = vec![255u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, Rgba8::rgb(0, 0, 0)).unwrap();
    assert_eq!(dst, vec![128u8, 0, 0, 255]);
}

#[test]
fn transparent_pixels_become_background_and_opaque_pass_through() {
    let src = vec![10u8, 20, 30, 0, 40, 50, 60, 255];
    let mut dst = vec![0u8; 8];
    flatten_to_opaque_rgba8(&mut dst, &src, Rgba8::WHITE).unwrap();
    assert_eq!(dst, vec![255u8, 255, 255, 255, 40, 50, 60, 255]);
}

#[test]
fn rejects_bad_buffers_and_translucent_background() {
    let mut dst = vec![0u8; 4];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 8], Rgba8::WHITE).is_err());
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 4], Rgba8::TRANSPARENT).is_err());
}

#[test]
fn flatten_image_removes_all_transparency() {
    let img = RgbaImage::from_raw(2, 1, vec![0, 0, 0, 0, 9, 9, 9, 100]).unwrap();
    assert!(has_transparency(&img));
    let flat = flatten_image(&img, Rgba8::WHITE).unwrap();
    assert!(!has_transparency(&flat));
}
