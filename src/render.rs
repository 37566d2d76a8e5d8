//! Whole-frame rendering: stretch each channel, accumulate it under its
//! color, and fold the result down to 8-bit RGB.
//!
//! This is the convenience layer over the kernels in [`crate::rescale`],
//! [`crate::composite`] and [`crate::convert`]. Callers that manage their own
//! buffers or interleave channels with I/O should call those directly; this
//! entry point owns the intermediate allocations and the fixed kernel order.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::composite::{composite, CompositeExpand};
use crate::convert::to_display_bounded;
use crate::error::BlendError;
use crate::rescale::rescale_intensity;
use crate::sample::Sample;

/// One source channel of a composite: its intensity tile, its display color,
/// and the intensity window to stretch onto full range.
#[derive(Debug, Clone, Copy)]
pub struct Channel<'a, T: CompositeExpand> {
    /// Single-channel intensity samples, row-major.
    pub image: &'a [T],
    /// `[red, green, blue]` weights applied after stretching.
    pub color: [f32; 3],
    /// Lower edge of the intensity window (maps to zero).
    pub min: T,
    /// Upper edge of the intensity window (maps to full scale).
    pub max: T,
}

/// Render a set of channels into one interleaved 8-bit RGB buffer.
///
/// Per channel: clip to `[min, max]`, stretch onto the full representation
/// range, then accumulate under the channel color. The widened accumulator
/// is finally folded down to 8 bits with the source maximum as the display
/// ceiling, so channel sums above full scale saturate to white-ish rather
/// than wrapping.
///
/// All channel tiles must have the same length; the output holds
/// `3 * pixels` bytes.
///
/// # Example
/// ```
/// use channel_blend::{composite_channels, Channel};
///
/// let dapi = [100u16, 40_000, 65_535];
/// let gfp = [65_535u16, 0, 30_000];
/// let rgb = composite_channels(&[
///     Channel { image: &dapi, color: [0.0, 0.0, 1.0], min: 0, max: 65_535 },
///     Channel { image: &gfp, color: [0.0, 1.0, 0.0], min: 0, max: 65_535 },
/// ])
/// .unwrap();
/// assert_eq!(rgb.len(), 9);
/// assert_eq!(&rgb[0..3], &[0, 255, 0]);
/// ```
pub fn composite_channels<T: CompositeExpand>(
    channels: &[Channel<'_, T>],
) -> Result<Vec<u8>, BlendError> {
    let first = channels.first().ok_or(BlendError::EmptyChannels)?;
    let pixels = first.image.len();
    for ch in channels {
        if ch.image.len() != pixels {
            return Err(BlendError::LengthMismatch {
                expected: pixels,
                actual: ch.image.len(),
            });
        }
    }

    let accum_len = pixels * 3;
    let mut accum: Vec<T::Accum> = Vec::new();
    accum
        .try_reserve_exact(accum_len)
        .map_err(|_| BlendError::Allocation { len: accum_len })?;
    accum.resize(accum_len, <T::Accum as Sample>::ZERO);

    let mut scratch: Vec<T> = Vec::new();
    scratch
        .try_reserve_exact(pixels)
        .map_err(|_| BlendError::Allocation { len: pixels })?;

    for ch in channels {
        scratch.clear();
        scratch.extend_from_slice(ch.image);
        rescale_intensity(&mut scratch, ch.min, ch.max)?;
        composite(&mut accum, &scratch, ch.color[0], ch.color[1], ch.color[2])?;
    }

    let mut out: Vec<u8> = Vec::new();
    out.try_reserve_exact(accum_len)
        .map_err(|_| BlendError::Allocation { len: accum_len })?;
    out.resize(accum_len, 0);
    to_display_bounded(
        &accum,
        &mut out,
        <T::Accum as Sample>::ZERO,
        T::SRC_MAX_IN_ACCUM,
    )?;
    Ok(out)
}
