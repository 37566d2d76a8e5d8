//! Weighted colorized accumulation.
//!
//! The core rendering operation: repeated calls with different source
//! channels and different `(red, green, blue)` weights build a false-color
//! composite of many measurement channels into one interleaved RGB image.
//! Accumulation is additive and unclipped (the caller picks an accumulator
//! representation wide enough for the channel count), but each channel sum
//! saturates at the accumulator's own maximum rather than wrapping.
//!
//! Weights are plain f32 multipliers. They are not required to sum to 1 or
//! stay inside `[0, 1]`: overdriving a channel is legitimate caller intent.
//!
//! Two integer scaling conventions exist:
//!
//! - **Widening** ([`composite`]): source width feeds an accumulator of twice
//!   the width. The weight is scaled by the *source* maximum and the
//!   per-pixel product is taken modulo the accumulator width, exactly
//!   matching the historical kernels bit for bit, including what overdriven
//!   weights do. Rendered output is compared byte-for-byte against archives
//!   produced by those kernels, so this arithmetic is a compatibility
//!   surface, not an implementation detail.
//! - **Same-width** ([`composite_in_place`]): source and accumulator share a
//!   representation. The weight is scaled to the representation maximum, the
//!   product is taken in the widened intermediate and divided back, and
//!   everything saturates.

use crate::error::BlendError;
use num_traits::Saturating;
use crate::mlaf::mlaf;
use crate::sample::IntSample;

/// A source width paired with its widened accumulator width
/// (u8 → u16, u16 → u32, u32 → u64).
pub trait CompositeExpand: IntSample {
    /// Accumulator representation with headroom for weighted channel sums.
    type Accum: IntSample;

    /// The source maximum expressed in the accumulator representation.
    const SRC_MAX_IN_ACCUM: Self::Accum;

    /// Scale a color weight by the source maximum into the accumulator type.
    /// `1.0` maps to `SRC_MAX_IN_ACCUM`; negative weights clamp to zero.
    fn scale_weight(weight: f32) -> Self::Accum;

    /// `(self * w) / SRC_MAX` with the product taken modulo the accumulator
    /// width (the historical bit-exact arithmetic).
    fn weighted(self, w: Self::Accum) -> Self::Accum;
}

macro_rules! composite_expand {
    ($t:ty, $accum:ty) => {
        impl CompositeExpand for $t {
            type Accum = $accum;
            const SRC_MAX_IN_ACCUM: $accum = <$t>::MAX as $accum;

            #[inline]
            fn scale_weight(weight: f32) -> $accum {
                (weight * <$t>::MAX as f32) as $accum
            }

            #[inline]
            fn weighted(self, w: $accum) -> $accum {
                (self as $accum).wrapping_mul(w) / <$t>::MAX as $accum
            }
        }
    };
}

composite_expand!(u8, u16);
composite_expand!(u16, u32);
composite_expand!(u32, u64);

/// Accumulate a weighted, colorized copy of `image` into a widened
/// interleaved RGB accumulator.
///
/// For every pixel `i`:
/// ```text
/// accum[3i + 0] += image[i] * red
/// accum[3i + 1] += image[i] * green
/// accum[3i + 2] += image[i] * blue
/// ```
/// The accumulator must be zero-initialized by the caller before the first
/// channel and must hold exactly `3 * image.len()` elements. Compositing is
/// commutative and associative as long as no channel sum saturates.
///
/// # Example
/// ```
/// use channel_blend::composite;
///
/// let image = [0u16, 32768, 65535];
/// let mut accum = [0u32; 9];
/// composite(&mut accum, &image, 1.0, 0.5, 0.0).unwrap();
/// assert_eq!(&accum[6..9], &[65535, 32767, 0]);
/// ```
pub fn composite<T: CompositeExpand>(
    accum: &mut [T::Accum],
    image: &[T],
    red: f32,
    green: f32,
    blue: f32,
) -> Result<(), BlendError> {
    let expected = image.len() * 3;
    if accum.len() != expected {
        return Err(BlendError::LengthMismatch {
            expected,
            actual: accum.len(),
        });
    }

    let r = T::scale_weight(red);
    let g = T::scale_weight(green);
    let b = T::scale_weight(blue);

    for (px, acc) in image.iter().zip(accum.chunks_exact_mut(3)) {
        acc[0] = acc[0].saturating_add(px.weighted(r));
        acc[1] = acc[1].saturating_add(px.weighted(g));
        acc[2] = acc[2].saturating_add(px.weighted(b));
    }
    Ok(())
}

/// Accumulate a weighted, colorized copy of `image` into an accumulator of
/// the *same* representation.
///
/// The per-pixel product is taken in the widened intermediate and divided
/// back down, so a weight in `[0, 1]` cannot overflow; overdriven weights
/// saturate at every stage. Use this when the caller keeps source and
/// composite in one width and accepts earlier saturation in exchange.
pub fn composite_in_place<T: IntSample>(
    accum: &mut [T],
    image: &[T],
    red: f32,
    green: f32,
    blue: f32,
) -> Result<(), BlendError> {
    let expected = image.len() * 3;
    if accum.len() != expected {
        return Err(BlendError::LengthMismatch {
            expected,
            actual: accum.len(),
        });
    }

    let r = T::weight_to_wide(red);
    let g = T::weight_to_wide(green);
    let b = T::weight_to_wide(blue);

    for (px, acc) in image.iter().zip(accum.chunks_exact_mut(3)) {
        acc[0] = acc[0].saturating_add(px.weighted_same(r));
        acc[1] = acc[1].saturating_add(px.weighted_same(g));
        acc[2] = acc[2].saturating_add(px.weighted_same(b));
    }
    Ok(())
}

/// Accumulate a weighted copy of a normalized float channel into a float RGB
/// accumulator.
///
/// Plain fused multiply-add per element, completely unclipped: float headroom
/// is the caller's overflow policy. Negative weights are allowed here and
/// subtract, unlike the integer paths.
pub fn composite_f32(
    accum: &mut [f32],
    image: &[f32],
    red: f32,
    green: f32,
    blue: f32,
) -> Result<(), BlendError> {
    let expected = image.len() * 3;
    if accum.len() != expected {
        return Err(BlendError::LengthMismatch {
            expected,
            actual: accum.len(),
        });
    }

    for (px, acc) in image.iter().zip(accum.chunks_exact_mut(3)) {
        acc[0] = mlaf(acc[0], *px, red);
        acc[1] = mlaf(acc[1], *px, green);
        acc[2] = mlaf(acc[2], *px, blue);
    }
    Ok(())
}
