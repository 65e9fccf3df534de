use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

const INPUT_IMAGE: &str = "public/images/radar.png";
const OUTPUT_GIF: &str = "public/images/rotating_radar.gif";
const OUTPUT_WARP_GIF: &str = "public/images/rotating_radar_warp.gif";
const NUM_FRAMES: u32 = 25;
const RADAR_GIF: &str = "public/images/radar_sweep.gif";
const RADAR_SVG: &str = "public/images/radar.svg";

#[derive(Parser, Debug)]
#[command(name = "radar-anim", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spin a bitmap into a looping GIF.
    Spin(SpinArgs),
    /// Draw the procedural radar sweep as a looping GIF.
    Radar(RadarArgs),
    /// Emit the procedural radar as SVG (CSS-animated unless --angle is given).
    Svg(SvgArgs),
    /// Write the bitmap rotated at eight fixed angles for visual checks.
    TestRotation(TestRotationArgs),
}

#[derive(Parser, Debug)]
struct SpinArgs {
    /// Source image.
    #[arg(long = "in", default_value = INPUT_IMAGE)]
    in_path: PathBuf,

    /// Output GIF path [default: public/images/rotating_radar.gif, or
    /// public/images/rotating_radar_warp.gif with --method warp].
    #[arg(long)]
    out: Option<PathBuf>,

    /// Number of rotation frames.
    #[arg(long, default_value_t = NUM_FRAMES)]
    frames: u32,

    /// Rotation method.
    #[arg(long, value_enum, default_value_t = MethodChoice::Resample)]
    method: MethodChoice,

    /// Directory for the numbered frame PNGs.
    #[arg(long, default_value = ".")]
    frame_dir: PathBuf,

    /// Per-frame delay in milliseconds.
    #[arg(long, default_value_t = radar_anim::Animation::DEFAULT_DELAY_MS)]
    delay_ms: u32,

    /// GIF quantizer speed (1 = best palette, 30 = fastest).
    #[arg(long, default_value_t = radar_anim::GifConfig::DEFAULT_SPEED)]
    speed: i32,
}

#[derive(Parser, Debug)]
struct RadarArgs {
    /// Output GIF path.
    #[arg(long, default_value = RADAR_GIF)]
    out: PathBuf,

    /// Number of sweep frames.
    #[arg(long, default_value_t = radar_anim::RadarConfig::DEFAULT_FRAME_COUNT)]
    frames: u32,

    /// Radar style JSON overriding the built-in constants.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Per-frame delay in milliseconds.
    #[arg(long, default_value_t = radar_anim::Animation::DEFAULT_DELAY_MS)]
    delay_ms: u32,

    /// GIF quantizer speed (1 = best palette, 30 = fastest).
    #[arg(long, default_value_t = radar_anim::GifConfig::DEFAULT_SPEED)]
    speed: i32,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Output SVG path.
    #[arg(long, default_value = RADAR_SVG)]
    out: PathBuf,

    /// Emit a static frame with the sweep at this angle (degrees).
    #[arg(long)]
    angle: Option<f64>,

    /// Seconds per full turn for the animated document.
    #[arg(long, default_value_t = 2.0)]
    period_secs: f64,

    /// Also rasterize a static frame (at --angle, or 0) to this PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Radar style JSON overriding the built-in constants.
    #[arg(long)]
    style: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TestRotationArgs {
    /// Source image.
    #[arg(long = "in", default_value = INPUT_IMAGE)]
    in_path: PathBuf,

    /// Directory for the test PNGs.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodChoice {
    Resample,
    Warp,
}

impl MethodChoice {
    fn default_output(self) -> &'static str {
        match self {
            Self::Resample => OUTPUT_GIF,
            Self::Warp => OUTPUT_WARP_GIF,
        }
    }
}

impl From<MethodChoice> for radar_anim::RotateMethod {
    fn from(m: MethodChoice) -> Self {
        match m {
            MethodChoice::Resample => Self::Resample,
            MethodChoice::Warp => Self::AffineWarp,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let res = match cli.cmd {
        Command::Spin(args) => cmd_spin(args),
        Command::Radar(args) => cmd_radar(args),
        Command::Svg(args) => cmd_svg(args),
        Command::TestRotation(args) => cmd_test_rotation(args),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("❌ Error: {e:#}");
            println!("\nTroubleshooting tips:");
            println!("1. Make sure your image file exists and the path is correct");
            println!("2. Ensure your image is in a supported format (PNG, JPG, etc.)");
            println!("3. Check that the output directory is writable");
            println!("4. Re-run with RUST_LOG=debug for more detail");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_style(path: Option<&Path>) -> anyhow::Result<radar_anim::RadarStyle> {
    match path {
        Some(p) => Ok(radar_anim::RadarStyle::from_json_path(p)?),
        None => Ok(radar_anim::RadarStyle::default()),
    }
}

fn cmd_spin(args: SpinArgs) -> anyhow::Result<()> {
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(args.method.default_output()));
    println!("Starting image rotation animation...");
    println!("Input: {}", args.in_path.display());
    println!("Output: {}", out.display());
    println!("Frames: {}", args.frames);
    println!("{}", "-".repeat(50));

    let cfg = radar_anim::RotateConfig {
        frame_count: args.frames,
        method: args.method.into(),
        frame_dir: args.frame_dir,
        delay_ms: args.delay_ms,
        gif_speed: args.speed,
        ..radar_anim::RotateConfig::new(args.in_path, out)
    };
    let report = radar_anim::render_rotation(&cfg)?;
    println!("Rotating animation saved as {}", report.output.display());

    let choice = {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        radar_anim::prompt_cleanup(&mut stdin.lock(), &mut stdout)
    };
    println!();
    match report.cleanup(choice) {
        Ok(_) if choice == radar_anim::CleanupChoice::Delete => {
            println!("Individual frames cleaned up.")
        }
        Ok(_) => println!("Individual frames kept for reference."),
        Err(e) => {
            tracing::warn!(error = %e, "frame cleanup failed");
            println!("Individual frames kept for reference.");
        }
    }

    println!(
        "\n✅ Success! Rotating radar animation saved as '{}'",
        report.output.display()
    );
    print_details(
        report.frame_count,
        report.step_deg,
        report.loop_duration,
        report.fps,
    );
    Ok(())
}

fn cmd_radar(args: RadarArgs) -> anyhow::Result<()> {
    let cfg = radar_anim::RadarConfig {
        style: load_style(args.style.as_deref())?,
        frame_count: args.frames,
        delay_ms: args.delay_ms,
        gif_speed: args.speed,
        ..radar_anim::RadarConfig::new(args.out)
    };
    let report = radar_anim::render_radar_gif(&cfg)?;

    println!(
        "✅ Success! Radar sweep animation saved as '{}'",
        report.output.display()
    );
    let fps = 1000.0 / f64::from(cfg.delay_ms);
    print_details(
        report.frame_count,
        radar_anim::step_deg(report.frame_count),
        report.loop_duration,
        fps,
    );
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let style = load_style(args.style.as_deref())?;
    let kind = match args.angle {
        Some(angle_deg) => radar_anim::SvgKind::Static { angle_deg },
        None => {
            let period = Duration::try_from_secs_f64(args.period_secs)
                .ok()
                .filter(|d| !d.is_zero())
                .with_context(|| {
                    format!("--period-secs must be positive, got {}", args.period_secs)
                })?;
            radar_anim::SvgKind::Animated { period }
        }
    };
    radar_anim::write_svg(&style, kind, &args.out)?;
    println!("✅ SVG saved as '{}'", args.out.display());

    if let Some(png) = args.png {
        let markup = radar_anim::static_svg(&style, args.angle.unwrap_or(0.0));
        let img = radar_anim::rasterize_svg(&markup, style.size, style.size)?;
        radar_anim::ensure_parent_dir(&png)?;
        img.save_with_format(&png, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", png.display()))?;
        println!("Preview saved as '{}'", png.display());
    }
    Ok(())
}

fn cmd_test_rotation(args: TestRotationArgs) -> anyhow::Result<()> {
    println!("Testing rotation...");
    let written = radar_anim::write_test_rotations(&args.in_path, &args.out_dir)?;
    for path in written {
        println!("Saved test rotation: {}", path.display());
    }
    Ok(())
}

fn print_details(frames: u32, step_deg: f64, loop_duration: Duration, fps: f64) {
    println!("📊 Animation details:");
    println!("   - Total frames: {frames}");
    println!("   - Rotation per frame: {step_deg:.1}°");
    println!(
        "   - Total duration: {:.1} seconds per loop",
        loop_duration.as_secs_f64()
    );
    println!("   - Frame rate: {fps:.0} FPS");
}
