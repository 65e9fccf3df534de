use std::{io::BufReader, time::Duration};

use image::AnimationDecoder as _;

use super::*;
use crate::animation::model::Frame;
use crate::foundation::core::FrameIndex;

fn solid_anim(n: u32, loop_mode: LoopMode) -> Animation {
    let mut anim = Animation::new(100, loop_mode).unwrap();
    for i in 0..n {
        let shade = (i * 40) as u8;
        anim.push(Frame {
            index: FrameIndex(i),
            angle_deg: 0.0,
            image: image::RgbaImage::from_pixel(8, 8, image::Rgba([shade, 0, 255 - shade, 255])),
        })
        .unwrap();
    }
    anim
}

fn decode(path: &Path) -> Vec<image::Frame> {
    let file = File::open(path).unwrap();
    image::codecs::gif::GifDecoder::new(BufReader::new(file))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

#[test]
fn gif_has_every_frame_at_100ms_and_loops_forever() {
    let dir = PathBuf::from("target").join("unit_gif");
    let cfg = GifConfig::new(dir.join("loop.gif"));
    let _ = std::fs::remove_file(&cfg.out_path);

    write_gif(&solid_anim(5, LoopMode::Infinite), &cfg).unwrap();

    let frames = decode(&cfg.out_path);
    assert_eq!(frames.len(), 5);
    let total: Duration = frames.iter().map(|f| Duration::from(f.delay())).sum();
    assert_eq!(total, Duration::from_millis(500));
    assert!(
        frames
            .iter()
            .all(|f| f.delay().numer_denom_ms() == (100, 1))
    );

    let bytes = std::fs::read(&cfg.out_path).unwrap();
    let netscape: &[u8] = b"NETSCAPE2.0\x03\x01\x00\x00";
    assert!(bytes.windows(netscape.len()).any(|w| w == netscape));
}

#[test]
fn finite_repeat_is_written() {
    let dir = PathBuf::from("target").join("unit_gif");
    let cfg = GifConfig::new(dir.join("repeat.gif"));
    write_gif(&solid_anim(2, LoopMode::Repeat(3)), &cfg).unwrap();

    let bytes = std::fs::read(&cfg.out_path).unwrap();
    let netscape: &[u8] = b"NETSCAPE2.0\x03\x01\x03\x00";
    assert!(bytes.windows(netscape.len()).any(|w| w == netscape));
}

#[test]
fn empty_animation_and_bad_speed_are_rejected() {
    let cfg = GifConfig::new("target/unit_gif/empty.gif");
    let anim = Animation::new(100, LoopMode::Infinite).unwrap();
    assert!(matches!(write_gif(&anim, &cfg), Err(RadarError::Encode(_))));

    let cfg = GifConfig {
        speed: 0,
        ..GifConfig::new("target/unit_gif/bad.gif")
    };
    assert!(write_gif(&solid_anim(1, LoopMode::Infinite), &cfg).is_err());
}

#[cfg(target_os = "linux")]
#[test]
fn write_failures_on_a_full_device_are_reported() {
    let cfg = GifConfig::new("/dev/full");
    let res = write_gif(&solid_anim(3, LoopMode::Infinite), &cfg);
    assert!(res.is_err());
}
