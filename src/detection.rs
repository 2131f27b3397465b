//! Haar cascade detection for faces and eyes.

use crate::{Error, Result};
use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use std::path::Path;

/// Parameters for a `detect_multi_scale` pass
#[derive(Debug, Clone, Copy)]
pub struct DetectionParams {
    /// Image pyramid scale step
    pub scale_factor: f64,
    /// Minimum neighboring detections required to keep a rectangle
    pub min_neighbors: i32,
}

/// Cascade classifier wrapper returning detection rectangles.
///
/// Loading is fail-fast: a missing or unparsable cascade file aborts
/// startup. Detection itself treats the classifier as a black box and
/// reports rectangles in the classifier's own order; callers rely on that
/// order (the first result is authoritative).
pub struct CascadeDetector {
    classifier: CascadeClassifier,
    params: DetectionParams,
}

impl CascadeDetector {
    /// Load a cascade from an XML file
    pub fn from_file<P: AsRef<Path>>(path: P, params: DetectionParams) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Cascade(format!(
                "Cascade file not found: {}",
                path.display()
            )));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| Error::Cascade(format!("Cascade path is not valid UTF-8: {}", path.display())))?;

        let classifier = CascadeClassifier::new(path_str)?;
        if classifier.empty()? {
            return Err(Error::Cascade(format!(
                "Cascade file contains no classifier data: {}",
                path.display()
            )));
        }

        Ok(Self { classifier, params })
    }

    /// Detect objects in a grayscale image.
    ///
    /// Returns rectangles in the classifier's reporting order; an empty
    /// vector means nothing was found.
    pub fn detect(&mut self, image: &Mat) -> Result<Vec<Rect>> {
        let mut objects = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            image,
            &mut objects,
            self.params.scale_factor,
            self.params.min_neighbors,
            0,
            Size::new(0, 0),
            Size::new(0, 0),
        )?;

        Ok(objects.to_vec())
    }
}
