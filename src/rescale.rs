//! Intensity rescale (contrast stretch).
//!
//! Stretches `[imin, imax]` linearly onto the full range of the
//! representation: values at `imin` map to 0, values at `imax` map to `MAX`,
//! everything outside the input range is clipped first. Clipping before
//! scaling is what guarantees the multiply cannot overflow and the output
//! needs no second clamp.
//!
//! The integer variants **truncate** when casting the scaled float back;
//! they do not round. That asymmetry is contractual: downstream callers
//! compare rendered tiles bit-for-bit against output produced this way, so a
//! "fix" to round-to-nearest would be a compatibility break, not an
//! improvement. The scale factor is likewise computed once per call in the
//! representation's historical float width (see [`IntSample::Factor`]).

use crate::clip::clip_unchecked;
use crate::error::BlendError;
use crate::sample::IntSample;

/// Contrast-stretch an integer buffer in place so that `imin -> 0` and
/// `imax -> MAX`.
///
/// Requires `imin < imax`; equal bounds would divide by zero and are rejected.
///
/// # Example
/// ```
/// use channel_blend::rescale_intensity;
///
/// let mut tile = [0u16, 2000, 19000, 36000, 48000];
/// rescale_intensity(&mut tile, 2000, 36000).unwrap();
/// assert_eq!(tile[0], 0);
/// assert_eq!(tile[4], 65535);
/// ```
pub fn rescale_intensity<T: IntSample>(
    target: &mut [T],
    imin: T,
    imax: T,
) -> Result<(), BlendError> {
    if imax <= imin {
        return Err(BlendError::InvalidRange {
            min: imin.as_f64(),
            max: imax.as_f64(),
        });
    }

    clip_unchecked(target, imin, imax);

    // One division per call, not per element.
    let span = imax - imin;
    let factor = T::MAX_FACTOR / span.as_factor();
    for v in target.iter_mut() {
        let d = *v - imin;
        // imax must land exactly on MAX; the rounded factor can sit a hair
        // below MAX/span and truncation would turn that into MAX - 1.
        *v = if d == span {
            T::MAX
        } else {
            T::from_factor_trunc(factor * d.as_factor())
        };
    }
    Ok(())
}

/// Contrast-stretch a float buffer in place so that `imin -> 0.0` and
/// `imax -> 1.0`.
///
/// Requires `imin < imax`. The reciprocal is computed once, so the top of the
/// range can land a rounding step above 1.0; the result is clamped back to
/// keep the unit-range invariant.
pub fn rescale_intensity_f32(target: &mut [f32], imin: f32, imax: f32) -> Result<(), BlendError> {
    if !(imax > imin) {
        return Err(BlendError::InvalidRange {
            min: imin as f64,
            max: imax as f64,
        });
    }

    clip_unchecked(target, imin, imax);

    let factor = 1.0 / (imax - imin);
    for v in target.iter_mut() {
        *v = if *v == imax {
            1.0
        } else {
            ((*v - imin) * factor).min(1.0)
        };
    }
    Ok(())
}
