//! Error type shared by all kernels.
//!
//! The kernels sit in a performance-critical path and validate only at the
//! call boundary: range parameters and buffer-length relationships are checked
//! once per call, never per element. Numeric saturation is *not* an error;
//! values clamping at a representation boundary is specified behavior.

use thiserror::Error;

/// Input-validation and resource failures reported by the kernels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendError {
    /// A `(min, max)` range parameter was inverted or degenerate.
    ///
    /// Clip requires `min <= max`; rescale and bounded display conversion
    /// require `min < max` (equal bounds would divide by zero).
    #[error("invalid range: min {min} is not below max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Paired buffers do not have the required length relationship
    /// (e.g. an RGB accumulator must hold exactly 3 samples per source pixel).
    #[error("buffer length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A channel list or sample buffer was empty where at least one
    /// element is required.
    #[error("empty input: at least one channel or sample is required")]
    EmptyChannels,

    /// The output buffer for an allocating kernel could not be reserved.
    #[error("failed to allocate output buffer of {len} elements")]
    Allocation { len: usize },
}
