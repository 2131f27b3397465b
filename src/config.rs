//! Configuration management for the face sampler application

use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cascade classifier file paths
    pub cascades: CascadeConfig,

    /// Cascade detection parameters
    pub detection: DetectionConfig,

    /// Crop geometry and outlier filtering
    pub sampling: SamplingConfig,

    /// Preview window configuration
    pub display: DisplayConfig,

    /// Sample file output
    pub output: OutputConfig,
}

/// Cascade classifier file paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeConfig {
    /// Path to the frontal face cascade XML
    pub face: PathBuf,

    /// Path to the eye cascade XML
    pub eye: PathBuf,
}

/// Cascade detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Image pyramid scale step for the face pass
    pub face_scale_factor: f64,

    /// Minimum neighbor count for the face pass
    pub face_min_neighbors: i32,

    /// Image pyramid scale step for the eye pass
    pub eye_scale_factor: f64,

    /// Minimum neighbor count for the eye pass
    pub eye_min_neighbors: i32,
}

/// Crop geometry and outlier filtering parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Crop side length as a multiple of the inter-eye distance
    pub crop_scale: f64,

    /// Upward shift of the crop top edge, as a multiple of the inter-eye distance
    pub eye_level_offset: f64,

    /// Number of recent inter-eye distances in the rolling window
    pub window_size: usize,

    /// Relative deviation from the rolling average beyond which a frame is rejected
    pub scale_tolerance: f64,

    /// Side length of the emitted square sample in pixels
    pub sample_size: i32,

    /// Disarm recording after each sample while the window is still filling
    pub single_shot_warmup: bool,
}

/// Preview window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// GUI mode: "all", "camera", or "none"
    pub gui_mode: String,
}

/// Sample file output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the sample CSV file, created at session start
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cascades: CascadeConfig::default(),
            detection: DetectionConfig::default(),
            sampling: SamplingConfig::default(),
            display: DisplayConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            face: PathBuf::from("assets/haarcascade_frontalface_default.xml"),
            eye: PathBuf::from("assets/haarcascade_eye.xml"),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            face_scale_factor: constants::DEFAULT_FACE_SCALE_FACTOR,
            face_min_neighbors: constants::DEFAULT_FACE_MIN_NEIGHBORS,
            eye_scale_factor: constants::DEFAULT_EYE_SCALE_FACTOR,
            eye_min_neighbors: constants::DEFAULT_EYE_MIN_NEIGHBORS,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            crop_scale: constants::DEFAULT_CROP_SCALE,
            eye_level_offset: constants::DEFAULT_EYE_LEVEL_OFFSET,
            window_size: constants::DEFAULT_DISTANCE_WINDOW,
            scale_tolerance: constants::DEFAULT_SCALE_TOLERANCE,
            sample_size: constants::DEFAULT_SAMPLE_SIZE,
            single_shot_warmup: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            gui_mode: "all".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("samples.csv"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.sampling.crop_scale <= 0.0 {
            return Err(Error::Config("Crop scale must be positive".to_string()));
        }
        if self.sampling.eye_level_offset < 0.0 {
            return Err(Error::Config("Eye level offset must not be negative".to_string()));
        }
        if self.sampling.window_size == 0 {
            return Err(Error::Config(
                "Distance window size must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.sampling.scale_tolerance) || self.sampling.scale_tolerance == 0.0 {
            return Err(Error::Config(
                "Scale tolerance must be between 0.0 (exclusive) and 1.0".to_string(),
            ));
        }
        if self.sampling.sample_size <= 0 {
            return Err(Error::Config("Sample size must be positive".to_string()));
        }

        if self.detection.face_scale_factor <= 1.0 || self.detection.eye_scale_factor <= 1.0 {
            return Err(Error::Config(
                "Cascade scale factors must be greater than 1.0".to_string(),
            ));
        }
        if self.detection.face_min_neighbors < 0 || self.detection.eye_min_neighbors < 0 {
            return Err(Error::Config(
                "Minimum neighbor counts must not be negative".to_string(),
            ));
        }

        if !matches!(self.display.gui_mode.as_str(), "all" | "camera" | "none") {
            return Err(Error::Config(format!(
                "Unknown GUI mode: {}",
                self.display.gui_mode
            )));
        }

        // Cascade files must exist up front; a bad path is startup-fatal
        if !self.cascades.face.exists() {
            return Err(Error::Config(format!(
                "Face cascade not found: {}",
                self.cascades.face.display()
            )));
        }
        if !self.cascades.eye.exists() {
            return Err(Error::Config(format!(
                "Eye cascade not found: {}",
                self.cascades.eye.display()
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Sampler Configuration

# Cascade classifier paths
cascades:
  face: "assets/haarcascade_frontalface_default.xml"
  eye: "assets/haarcascade_eye.xml"

# Cascade detection parameters
detection:
  face_scale_factor: 1.1
  face_min_neighbors: 5
  eye_scale_factor: 1.1
  eye_min_neighbors: 3

# Crop geometry and outlier filtering
sampling:
  crop_scale: 1.6
  eye_level_offset: 0.2
  window_size: 5
  scale_tolerance: 0.2
  sample_size: 64
  single_shot_warmup: true

# Preview windows
display:
  gui_mode: "all"

# Sample output
output:
  path: "samples.csv"
"#;
