//! Sample extraction and the append-only sample file.
//!
//! An accepted crop is resized to a fixed square and written as one text
//! line of decimal pixel values in row-major order. The file is created
//! once at session start and appended to synchronously for the rest of the
//! session.

use crate::{Error, Result};
use log::{debug, info};
use opencv::core::{Mat, Size, CV_8UC1};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Resize a grayscale crop to `side × side` with cubic interpolation
pub fn scale_sample(crop: &Mat, side: i32) -> Result<Mat> {
    if side <= 0 {
        return Err(Error::InvalidInput(format!("Sample side must be positive, got {side}")));
    }

    let mut scaled = Mat::default();
    imgproc::resize(
        crop,
        &mut scaled,
        Size::new(side, side),
        0.0,
        0.0,
        InterpolationFlags::INTER_CUBIC as i32,
    )?;

    Ok(scaled)
}

/// Serialize a grayscale sample as one text line.
///
/// Pixels are traversed row-major; every value is followed by `", "`,
/// including the last one, and the line ends with a newline.
pub fn serialize_sample(sample: &Mat) -> Result<String> {
    if sample.typ() != CV_8UC1 {
        return Err(Error::InvalidInput(
            "Sample serialization expects a single-channel 8-bit image".to_string(),
        ));
    }

    let rows = sample.rows();
    let cols = sample.cols();
    let mut line = String::with_capacity((rows * cols) as usize * 5 + 1);

    for row in 0..rows {
        for col in 0..cols {
            let value = *sample.at_2d::<u8>(row, col)?;
            line.push_str(&value.to_string());
            line.push_str(", ");
        }
    }
    line.push('\n');

    Ok(line)
}

/// Append-only writer for serialized samples.
///
/// The file is truncated when the writer is created and stays open for the
/// whole session; each sample is written synchronously in one call.
pub struct SampleWriter {
    file: File,
    path: PathBuf,
    count: usize,
}

impl SampleWriter {
    /// Create the sample file, truncating any previous content
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        info!("Writing samples to {}", path.display());

        Ok(Self { file, path, count: 0 })
    }

    /// Serialize and append one sample, incrementing the counter
    pub fn append(&mut self, sample: &Mat) -> Result<()> {
        let line = serialize_sample(sample)?;
        self.file.write_all(line.as_bytes())?;
        self.count += 1;
        debug!("Sample {} written to {}", self.count, self.path.display());

        Ok(())
    }

    /// Number of samples written so far
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Path of the sample file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
