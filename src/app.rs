//! Main application module for eye-normalized face sampling.

use crate::{
    config::{DetectionConfig, SamplingConfig},
    detection::{CascadeDetector, DetectionParams},
    distance_filter::{Acceptance, DistanceFilter},
    error::{Error, Result},
    geometry::EyePairGeometry,
    sampler::{scale_sample, SampleWriter},
    session::{SessionState, SkipReason},
    utils::{clamp_rect, has_area, offset_rect},
};
use log::{info, warn};
use opencv::{
    core::{Mat, Point, Rect, Scalar},
    highgui::{self, WINDOW_AUTOSIZE},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE},
};
use std::path::PathBuf;

/// Annotated camera window
const WINDOW_FRAME: &str = "frame";
/// Raw crop preview window
const WINDOW_CROP: &str = "face";
/// Scaled sample preview window
const WINDOW_SAMPLE: &str = "face_scaled";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// Path to the face cascade XML
    pub face_cascade: PathBuf,
    /// Path to the eye cascade XML
    pub eye_cascade: PathBuf,
    /// Path of the sample CSV file
    pub output: PathBuf,
    /// GUI display mode
    pub gui_mode: GuiMode,
    /// Cascade detection parameters
    pub detection: DetectionConfig,
    /// Crop geometry and filtering parameters
    pub sampling: SamplingConfig,
}

/// Video source type
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// GUI display mode
#[derive(Debug, Clone, PartialEq)]
pub enum GuiMode {
    /// Annotated frame plus crop and sample previews
    All,
    /// Annotated frame only
    Camera,
    /// No GUI (headless)
    None,
}

/// Detections of one frame, in full-frame coordinates
pub struct FrameDetection {
    /// First face rectangle reported by the detector
    pub face: Rect,
    /// First two eye rectangles reported inside the face
    pub eyes: [Rect; 2],
    /// Eye-aligned crop region (may extend beyond the face region)
    pub region: Rect,
    /// Grayscale crop clamped to the face region, when it has area
    pub crop: Option<Mat>,
}

/// Result of processing a single frame
pub struct FrameOutcome {
    /// Face, eyes, and crop region when a pair of eyes was found
    pub detection: Option<FrameDetection>,
    /// Scaled sample written to the output file this frame
    pub sample: Option<Mat>,
    /// Why no sample was emitted, if any stage bailed out
    pub skip: Option<SkipReason>,
}

impl FrameOutcome {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            detection: None,
            sample: None,
            skip: Some(reason),
        }
    }
}

/// Main application struct
pub struct FaceSamplerApp {
    config: AppConfig,
    face_detector: CascadeDetector,
    eye_detector: CascadeDetector,
    video_capture: VideoCapture,
    writer: SampleWriter,
}

impl FaceSamplerApp {
    /// Create a new face sampler application.
    ///
    /// Fails fast on an unopenable video source or a missing cascade file;
    /// no partial state survives a failed construction.
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing face sampler");

        let video_capture = match &config.video_source {
            VideoSource::Camera(index) => {
                info!("Opening camera {}", index);
                let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;

                // Reduce buffer size for lower latency (webcam only)
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;

                cap
            }
            VideoSource::File(path) => {
                info!("Opening video file: {}", path);
                VideoCapture::from_file(path, videoio::CAP_ANY)?
            }
        };

        if !video_capture.is_opened()? {
            return Err(Error::Camera(format!(
                "Unable to open video source {:?}",
                config.video_source
            )));
        }

        let face_detector = CascadeDetector::from_file(
            &config.face_cascade,
            DetectionParams {
                scale_factor: config.detection.face_scale_factor,
                min_neighbors: config.detection.face_min_neighbors,
            },
        )?;
        let eye_detector = CascadeDetector::from_file(
            &config.eye_cascade,
            DetectionParams {
                scale_factor: config.detection.eye_scale_factor,
                min_neighbors: config.detection.eye_min_neighbors,
            },
        )?;

        let writer = SampleWriter::create(&config.output)?;

        if config.gui_mode != GuiMode::None {
            highgui::named_window(WINDOW_FRAME, WINDOW_AUTOSIZE)?;
            if config.gui_mode == GuiMode::All {
                highgui::named_window(WINDOW_CROP, WINDOW_AUTOSIZE)?;
                highgui::named_window(WINDOW_SAMPLE, WINDOW_AUTOSIZE)?;
            }
        }

        Ok(Self {
            config,
            face_detector,
            eye_detector,
            video_capture,
            writer,
        })
    }

    /// Run the capture loop until the user quits or the video ends
    pub fn run(&mut self) -> Result<()> {
        info!("Starting capture loop");

        let mut session = SessionState::new(
            DistanceFilter::new(self.config.sampling.window_size, self.config.sampling.scale_tolerance),
            self.config.sampling.single_shot_warmup,
        );

        loop {
            let mut frame = Mat::default();
            if !self.video_capture.read(&mut frame)? || frame.empty() {
                if matches!(self.config.video_source, VideoSource::File(_)) {
                    info!("End of video file reached");
                    break;
                }
                warn!("Failed to read frame, retrying...");
                continue;
            }

            let mut gray = Mat::default();
            imgproc::cvt_color(&frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;

            let outcome = self.process_frame(&gray, &mut session)?;

            if self.config.gui_mode != GuiMode::None {
                self.render(&frame, &outcome, &session)?;

                let key = highgui::wait_key(1)?;
                if key == 27 || key == b'q' as i32 {
                    info!("Exit requested by user");
                    break;
                }
                if key == b'a' as i32 {
                    let recording = session.toggle_recording();
                    info!("Recording {}", if recording { "armed" } else { "disarmed" });
                }
            }
        }

        info!(
            "Session finished: {} samples written, {} frames skipped (no face: {}, too few eyes: {}, degenerate crop: {}, rejected scale: {})",
            self.writer.count(),
            session.skips.total(),
            session.skips.no_face,
            session.skips.too_few_eyes,
            session.skips.degenerate_crop,
            session.skips.rejected_scale,
        );

        if self.config.gui_mode != GuiMode::None {
            highgui::destroy_all_windows()?;
        }

        Ok(())
    }

    /// Process a single grayscale frame against the current session state.
    ///
    /// Every bail-out path is a silent skip; the session's skip counters are
    /// the only trace. A sample is emitted only while recording is armed and
    /// the inter-eye distance passes the rolling-average filter.
    fn process_frame(&mut self, gray: &Mat, session: &mut SessionState) -> Result<FrameOutcome> {
        let faces = self.face_detector.detect(gray)?;
        let Some(&face) = faces.first() else {
            session.skips.record(SkipReason::NoFace);
            return Ok(FrameOutcome::skipped(SkipReason::NoFace));
        };

        // Eye detection runs on the face sub-image only
        let face_roi = Mat::roi(gray, face)?;
        let face_roi = face_roi.try_clone()?;

        let eyes = self.eye_detector.detect(&face_roi)?;
        if eyes.len() < 2 {
            session.skips.record(SkipReason::TooFewEyes);
            return Ok(FrameOutcome::skipped(SkipReason::TooFewEyes));
        }

        // First two reported eyes, no left/right disambiguation
        let (first, second) = (eyes[0], eyes[1]);
        let geometry = EyePairGeometry::new(first, second);
        let region = geometry.crop_region(self.config.sampling.crop_scale, self.config.sampling.eye_level_offset);

        let mut detection = FrameDetection {
            face,
            eyes: [
                offset_rect(first, face.x, face.y),
                offset_rect(second, face.x, face.y),
            ],
            region: offset_rect(region, face.x, face.y),
            crop: None,
        };

        if !has_area(region) {
            session.skips.record(SkipReason::DegenerateCrop);
            return Ok(FrameOutcome {
                detection: Some(detection),
                sample: None,
                skip: Some(SkipReason::DegenerateCrop),
            });
        }

        // The region may reach past the face boundary; cut what overlaps
        let clamped = clamp_rect(region, face_roi.cols(), face_roi.rows());
        if !has_area(clamped) {
            session.skips.record(SkipReason::DegenerateCrop);
            return Ok(FrameOutcome {
                detection: Some(detection),
                sample: None,
                skip: Some(SkipReason::DegenerateCrop),
            });
        }

        let crop = Mat::roi(&face_roi, clamped)?;
        let crop = crop.try_clone()?;

        if !session.recording {
            detection.crop = Some(crop);
            return Ok(FrameOutcome {
                detection: Some(detection),
                sample: None,
                skip: None,
            });
        }

        let acceptance = session.distance_filter.offer(geometry.distance());
        if acceptance == Acceptance::Rejected {
            session.skips.record(SkipReason::RejectedScale);
            detection.crop = Some(crop);
            return Ok(FrameOutcome {
                detection: Some(detection),
                sample: None,
                skip: Some(SkipReason::RejectedScale),
            });
        }

        let sample = scale_sample(&crop, self.config.sampling.sample_size)?;
        self.writer.append(&sample)?;
        if acceptance == Acceptance::Warmup {
            session.finish_warmup_sample();
        }

        detection.crop = Some(crop);
        Ok(FrameOutcome {
            detection: Some(detection),
            sample: Some(sample),
            skip: None,
        })
    }

    /// Draw annotations and update the preview windows
    fn render(&self, frame: &Mat, outcome: &FrameOutcome, session: &SessionState) -> Result<()> {
        let mut display_frame = frame.clone();

        if let Some(detection) = &outcome.detection {
            // Green while armed, blue while disarmed
            let region_color = if session.recording {
                Scalar::new(0.0, 255.0, 0.0, 0.0)
            } else {
                Scalar::new(255.0, 0.0, 0.0, 0.0)
            };
            imgproc::rectangle(&mut display_frame, detection.region, region_color, 4, LINE_8, 0)?;

            for eye in &detection.eyes {
                imgproc::rectangle(
                    &mut display_frame,
                    *eye,
                    Scalar::new(0.0, 0.0, 255.0, 0.0),
                    2,
                    LINE_8,
                    0,
                )?;
            }
        }

        let counter_text = format!("Number of samples {}", self.writer.count());
        imgproc::put_text(
            &mut display_frame,
            &counter_text,
            Point::new(40, 40),
            FONT_HERSHEY_SIMPLEX,
            1.0,
            Scalar::new(0.0, 0.0, 255.0, 0.0),
            2,
            LINE_8,
            false,
        )?;

        highgui::imshow(WINDOW_FRAME, &display_frame)?;

        if self.config.gui_mode == GuiMode::All {
            if let Some(crop) = outcome.detection.as_ref().and_then(|d| d.crop.as_ref()) {
                highgui::imshow(WINDOW_CROP, crop)?;
            }
            if let Some(sample) = &outcome.sample {
                highgui::imshow(WINDOW_SAMPLE, sample)?;
            }
        }

        Ok(())
    }

    /// Number of samples written so far
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.writer.count()
    }
}
