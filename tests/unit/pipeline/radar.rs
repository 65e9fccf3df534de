use std::io::BufReader;

use image::AnimationDecoder as _;

use super::*;
use crate::assets::svg_raster::parse_svg;

#[test]
fn frames_follow_the_sweep_angles() {
    let anim = render_radar_frames(&RadarStyle::default(), 4, 100, LoopMode::Infinite).unwrap();
    assert_eq!(anim.len(), 4);
    let angles: Vec<f64> = anim.frames().iter().map(|f| f.angle_deg).collect();
    assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
    assert_eq!(anim.dimensions(), Some((200, 200)));
    // Successive frames differ because the sweep moves.
    assert_ne!(anim.frames()[0].image, anim.frames()[1].image);
}

#[test]
fn default_radar_gif_has_36_frames() {
    let out = PathBuf::from("target").join("unit_radar").join("radar.gif");
    let _ = std::fs::remove_file(&out);
    let report = render_radar_gif(&RadarConfig::new(&out)).unwrap();
    assert_eq!(report.frame_count, 36);
    assert_eq!(report.loop_duration, Duration::from_millis(3600));

    let file = std::fs::File::open(&out).unwrap();
    let frames = image::codecs::gif::GifDecoder::new(BufReader::new(file))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 36);
    assert_eq!(frames[0].buffer().dimensions(), (200, 200));
}

#[test]
fn invalid_style_or_frame_count_is_rejected() {
    let style = RadarStyle {
        outer_radius: -1.0,
        ..RadarStyle::default()
    };
    assert!(render_radar_frames(&style, 4, 100, LoopMode::Infinite).is_err());
    assert!(render_radar_frames(&RadarStyle::default(), 0, 100, LoopMode::Infinite).is_err());
    assert!(svg_markup(&style, SvgKind::default()).is_err());
}

#[test]
fn svg_files_are_written_and_parse() {
    let dir = PathBuf::from("target").join("unit_radar");
    let animated = dir.join("radar.svg");
    write_svg(&RadarStyle::default(), SvgKind::default(), &animated).unwrap();
    let text = std::fs::read_to_string(&animated).unwrap();
    assert!(text.contains("2s linear infinite"));

    let still = dir.join("radar_still.svg");
    write_svg(
        &RadarStyle::default(),
        SvgKind::Static { angle_deg: 120.0 },
        &still,
    )
    .unwrap();
    parse_svg(&std::fs::read_to_string(&still).unwrap()).unwrap();
}
