//! Representation conversions: integer → unit-range float, and wide
//! accumulator → 8-bit display.
//!
//! The display conversion is the last observable step of the pipeline, so it
//! carries the strictest bit-exactness requirement. Two clip policies exist in
//! the wild (convert-after-clip and convert-assuming-full-range) and both
//! are exposed explicitly ([`to_display_bounded`] vs [`to_display_fixed`])
//! rather than silently picking one.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::BlendError;
use crate::sample::IntSample;

/// Convert an integer buffer to a newly allocated f32 buffer in `[0, 1]`.
///
/// `out[i] = src[i] / MAX`. Integer inputs are already bounded, so no clip is
/// needed. The allocation is the only one this crate's in-place kernels do not
/// make; failure to reserve it is reported as [`BlendError::Allocation`]
/// instead of aborting.
///
/// The caller owns the returned buffer. For u32/u64 sources the f32 result
/// quantizes (24-bit mantissa); that is inherent to the representation, not a
/// kernel defect.
pub fn as_float<T: IntSample>(source: &[T]) -> Result<Vec<f32>, BlendError> {
    let mut out: Vec<f32> = Vec::new();
    out.try_reserve_exact(source.len())
        .map_err(|_| BlendError::Allocation { len: source.len() })?;

    let max = T::MAX.as_f32();
    out.extend(source.iter().map(|v| v.as_f32() / max));
    Ok(out)
}

/// Downscale a wide accumulation buffer into an 8-bit display buffer,
/// clipping to `[min, max]` first.
///
/// `output[i] = (clip(v, min, max) - min) * 256 / (max - min + 1)`, computed
/// in exact integer arithmetic: `min` maps to 0, `max` maps to 255, and
/// values above `max` saturate to 255, never wrapping. For the common
/// `(0, 65535)` range this is exactly `clip(v) / 256`.
///
/// Requires `min < max` and `output.len() == accum.len()`. The element count
/// is whatever the accumulator holds: `3 * pixels` for interleaved RGB.
pub fn to_display_bounded<T: IntSample>(
    accum: &[T],
    output: &mut [u8],
    min: T,
    max: T,
) -> Result<(), BlendError> {
    if min >= max {
        return Err(BlendError::InvalidRange {
            min: min.as_f64(),
            max: max.as_f64(),
        });
    }
    if output.len() != accum.len() {
        return Err(BlendError::LengthMismatch {
            expected: accum.len(),
            actual: output.len(),
        });
    }

    let lo = min.as_u128();
    let span = max.as_u128() - lo + 1;
    for (v, o) in accum.iter().zip(output.iter_mut()) {
        let t = if *v > max {
            max
        } else if *v < min {
            min
        } else {
            *v
        };
        *o = ((t.as_u128() - lo) * 256 / span) as u8;
    }
    Ok(())
}

/// Downscale a wide accumulation buffer into an 8-bit display buffer,
/// mapping the representation's full range onto `[0, 255]`.
///
/// No clip is needed: every value is in range by construction, so this is a
/// pure shift by `BITS - 8`. Use this when the accumulator was sized so that
/// saturated sums occupy its whole range; use [`to_display_bounded`] when the
/// accumulator holds source-width sums with headroom above them.
pub fn to_display_fixed<T: IntSample>(accum: &[T], output: &mut [u8]) -> Result<(), BlendError> {
    if output.len() != accum.len() {
        return Err(BlendError::LengthMismatch {
            expected: accum.len(),
            actual: output.len(),
        });
    }

    let shift = (T::BITS - 8) as usize;
    for (v, o) in accum.iter().zip(output.iter_mut()) {
        *o = (*v >> shift).as_u128() as u8;
    }
    Ok(())
}

/// Allocating variant of [`to_display_bounded`]: returns a fresh display
/// buffer instead of writing into a caller-supplied one.
pub fn to_display_vec<T: IntSample>(accum: &[T], min: T, max: T) -> Result<Vec<u8>, BlendError> {
    let mut out: Vec<u8> = Vec::new();
    out.try_reserve_exact(accum.len())
        .map_err(|_| BlendError::Allocation { len: accum.len() })?;
    out.resize(accum.len(), 0);
    to_display_bounded(accum, &mut out, min, max)?;
    Ok(out)
}
