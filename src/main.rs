use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rocket_launch::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Headless playback of the rocket launch demo
#[derive(Parser, Debug)]
#[command(name = "rocket-launch")]
#[command(version, about = "Plays a scripted rocket launch without a window", long_about = None)]
struct Cli {
    /// TOML file overriding the flight tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = DEMO_FRAMES)]
    frames: u32,

    /// Seconds per frame
    #[arg(short, long, default_value_t = DEMO_DELTA_TIME)]
    delta_time: f64,

    /// Random frame time jitter, as a fraction of the delta time
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,

    /// Seed for the frame time jitter
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Frame at which the launch key is pressed
    #[arg(long, default_value_t = 10)]
    launch_at: u32,

    /// Frame at which the parachute key is pressed
    #[arg(long)]
    parachute_at: Option<u32>,

    /// Frame at which the camera switches to chase view
    #[arg(long)]
    chase_at: Option<u32>,

    /// Frame at which the launch key is pressed again
    #[arg(long)]
    relaunch_at: Option<u32>,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => FlightConfig::from_file(path)?,
        None => FlightConfig::default(),
    };
    info!(?config, "Flight configuration loaded");

    let mut script = ControlScript::new()
        .press(Control::Launch, cli.launch_at, 1)
        .press(Control::Exit, cli.frames, 1);
    if let Some(frame) = cli.parachute_at {
        script = script.press(Control::Parachute, frame, 1);
    }
    if let Some(frame) = cli.chase_at {
        script = script.press(Control::Camera, frame, 1);
    }
    if let Some(frame) = cli.relaunch_at {
        script = script.press(Control::Launch, frame, 1);
    }

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut demo = LaunchDemo::new(config);
    let mut frame: u32 = 0;

    loop {
        let delta_time = if cli.jitter > 0.0 {
            cli.delta_time * (1.0 + rng.gen_range(-cli.jitter..=cli.jitter))
        } else {
            cli.delta_time
        };

        let Some(output) = demo.step(delta_time, script.keys_at(frame)) else {
            break;
        };
        if frame % 600 == 0 {
            info!(
                frame,
                phase = ?demo.flight.phase(),
                x = output.position.x,
                y = output.position.y,
                camera = ?output.view.mode,
                "Frame"
            );
        }
        frame = frame.saturating_add(1);
    }

    demo.telemetry.display_data();

    Ok(())
}
