//! Eye-normalized face sampling library for training-data capture.
//!
//! This library captures live video, detects a face and a pair of eyes with
//! Haar cascade classifiers, derives a square crop region normalized by the
//! inter-eye distance, and appends flattened 64×64 grayscale samples of
//! that crop to a CSV file:
//! 1. Face detection picks the detector's first reported rectangle
//! 2. Eye detection runs inside the face region; the first two eyes are used
//! 3. The crop is a square of `1.6 × inter-eye distance`, centered on the
//!    eye midpoint and shifted slightly above the eye line
//! 4. A rolling average of recent inter-eye distances rejects frames whose
//!    scale deviates more than 20% from the recent mean
//!
//! # Examples
//!
//! ## Computing crop geometry
//!
//! ```
//! use face_sampler::geometry::EyePairGeometry;
//! use opencv::core::Rect;
//!
//! let left = Rect::new(90, 40, 20, 20);
//! let right = Rect::new(130, 40, 20, 20);
//!
//! let geometry = EyePairGeometry::new(left, right);
//! assert_eq!(geometry.distance(), 40.0);
//!
//! let region = geometry.crop_region(1.6, 0.2);
//! assert_eq!(region.width, region.height);
//! ```
//!
//! ## Filtering by scale
//!
//! ```
//! use face_sampler::distance_filter::{Acceptance, DistanceFilter};
//!
//! let mut filter = DistanceFilter::new(5, 0.2);
//!
//! // The window fills with the first five distances
//! for d in [40.0, 41.0, 39.0, 40.0, 42.0] {
//!     assert_eq!(filter.offer(d), Acceptance::Warmup);
//! }
//!
//! // A far-off distance is rejected against the rolling average
//! assert_eq!(filter.offer(60.0), Acceptance::Rejected);
//! assert_eq!(filter.offer(38.0), Acceptance::Accepted);
//! ```
//!
//! ## Running a capture session
//!
//! ```no_run
//! use face_sampler::app::{AppConfig, FaceSamplerApp, GuiMode, VideoSource};
//! use face_sampler::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut app = FaceSamplerApp::new(AppConfig {
//!     video_source: VideoSource::Camera(0),
//!     face_cascade: config.cascades.face,
//!     eye_cascade: config.cascades.eye,
//!     output: config.output.path,
//!     gui_mode: GuiMode::All,
//!     detection: config.detection,
//!     sampling: config.sampling,
//! })?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Haar cascade detection for faces and eyes
pub mod detection;

/// Eye-pair geometry and crop region computation
pub mod geometry;

/// Rolling-average outlier filter over inter-eye distances
pub mod distance_filter;

/// Session state threaded through frame processing
pub mod session;

/// Sample extraction, serialization, and the sample file writer
pub mod sampler;

/// Rectangle helpers
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
