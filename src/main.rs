//! Face sampler application for capturing eye-aligned training samples.

use anyhow::Result;
use clap::Parser;
use face_sampler::app::{AppConfig, FaceSamplerApp, GuiMode, VideoSource};
use face_sampler::config::Config;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<String>,

    /// Path to the face cascade XML
    #[arg(long)]
    face_cascade: Option<PathBuf>,

    /// Path to the eye cascade XML
    #[arg(long)]
    eye_cascade: Option<PathBuf>,

    /// Sample CSV output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// GUI display mode (all, camera, none)
    #[arg(short, long, default_value = "all")]
    gui: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Face Sampler");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line arguments override the config file
    if let Some(face_cascade) = args.face_cascade {
        config.cascades.face = face_cascade;
    }
    if let Some(eye_cascade) = args.eye_cascade {
        config.cascades.eye = eye_cascade;
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }
    config.display.gui_mode = args.gui;

    config.validate()?;

    // Build application configuration
    let app_config = AppConfig {
        video_source: if let Some(video_path) = args.video {
            VideoSource::File(video_path)
        } else {
            VideoSource::Camera(args.cam)
        },
        face_cascade: config.cascades.face,
        eye_cascade: config.cascades.eye,
        output: config.output.path,
        gui_mode: match config.display.gui_mode.as_str() {
            "camera" => GuiMode::Camera,
            "none" => GuiMode::None,
            _ => GuiMode::All,
        },
        detection: config.detection,
        sampling: config.sampling,
    };

    // Create and run application
    let mut app = FaceSamplerApp::new(app_config)?;
    app.run()?;

    Ok(())
}
