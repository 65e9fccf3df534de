use super::*;

fn frame(i: u32, w: u32, h: u32) -> Frame {
    Frame {
        index: FrameIndex(i),
        angle_deg: 0.0,
        image: RgbaImage::new(w, h),
    }
}

#[test]
fn twenty_five_frames_at_100ms_loop_in_two_and_a_half_seconds() {
    let mut anim = Animation::new(100, LoopMode::Infinite).unwrap();
    for i in 0..25 {
        anim.push(frame(i, 4, 4)).unwrap();
    }
    assert_eq!(anim.len(), 25);
    assert_eq!(anim.loop_duration(), Duration::from_millis(2500));
    assert_eq!(anim.fps(), 10.0);
    assert_eq!(anim.dimensions(), Some((4, 4)));
}

#[test]
fn mismatched_frame_sizes_are_rejected() {
    let mut anim = Animation::new(100, LoopMode::Infinite).unwrap();
    anim.push(frame(0, 4, 4)).unwrap();
    let err = anim.push(frame(1, 5, 4)).unwrap_err();
    assert!(err.to_string().contains("frame size mismatch"));
    assert_eq!(anim.len(), 1);
}

#[test]
fn zero_delay_is_rejected() {
    assert!(Animation::new(0, LoopMode::Infinite).is_err());
}

#[test]
fn empty_animation_has_no_dimensions() {
    let anim = Animation::new(100, LoopMode::Repeat(2)).unwrap();
    assert!(anim.is_empty());
    assert_eq!(anim.dimensions(), None);
    assert_eq!(anim.loop_duration(), Duration::ZERO);
}
