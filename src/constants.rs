//! Constants used throughout the application

/// Crop side length as a multiple of the inter-eye distance
pub const DEFAULT_CROP_SCALE: f64 = 1.6;

/// Upward shift of the crop top edge, as a multiple of the inter-eye distance
pub const DEFAULT_EYE_LEVEL_OFFSET: f64 = 0.2;

/// Number of recent inter-eye distances kept for outlier filtering
pub const DEFAULT_DISTANCE_WINDOW: usize = 5;

/// Relative deviation from the rolling average beyond which a frame is rejected
pub const DEFAULT_SCALE_TOLERANCE: f64 = 0.2;

/// Side length of an emitted sample in pixels
pub const DEFAULT_SAMPLE_SIZE: i32 = 64;

/// Pixel values per serialized sample line (64 × 64)
pub const SAMPLE_VALUES_PER_LINE: usize = 4096;

/// Default cascade detection parameters for faces
pub const DEFAULT_FACE_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_FACE_MIN_NEIGHBORS: i32 = 5;

/// Default cascade detection parameters for eyes
pub const DEFAULT_EYE_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_EYE_MIN_NEIGHBORS: i32 = 3;
