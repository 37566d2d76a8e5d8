//! Saturating clip.
//!
//! The leaf kernel of the rendering pipeline: every other kernel that promises
//! "saturate, never wrap" builds on this. Single pass, branchless-friendly,
//! and idempotent: clipping an already-clipped buffer with the same bounds is
//! a no-op.

use crate::error::BlendError;
use crate::sample::Sample;

/// Clamp every element of `target` into `[min, max]`, in place.
///
/// Defined for all supported representations (u8/u16/u32/u64 and f32).
/// Requires `min <= max`; an inverted range is rejected rather than producing
/// the unspecified result the comparison chain would otherwise compute. NaN
/// bounds fail the `min <= max` check and are rejected the same way.
#[inline]
pub fn clip<T: Sample>(target: &mut [T], min: T, max: T) -> Result<(), BlendError> {
    if !(min <= max) {
        return Err(BlendError::InvalidRange {
            min: min.as_f64(),
            max: max.as_f64(),
        });
    }
    clip_unchecked(target, min, max);
    Ok(())
}

/// Clip without the range check, for callers that have already validated.
#[inline]
pub(crate) fn clip_unchecked<T: Sample>(target: &mut [T], min: T, max: T) {
    for v in target.iter_mut() {
        let t = if *v < min { min } else { *v };
        *v = if t > max { max } else { t };
    }
}
