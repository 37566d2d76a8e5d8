//! Pixel representation traits.
//!
//! The kernels are written once, generically, instead of once per bit width.
//! Everything width-specific (the representable maximum, the float type the
//! historical rescale factor is computed in, the widening rule for overflow-free
//! intermediates) lives here as trait-level configuration, so the numeric
//! semantics of each width stay exactly what the per-width originals produced.

use num_traits::{Float, PrimInt};

/// A single pixel sample: one of the unsigned integer widths (8/16/32/64) or
/// normalized f32 in `[0, 1]`.
pub trait Sample: Copy + PartialOrd + Send + Sync + 'static {
    /// Largest representable sample value (`1.0` for f32).
    const MAX: Self;

    /// The zero sample.
    const ZERO: Self;

    /// Lossy view of the value for diagnostics and histogram math.
    ///
    /// Named `as_f64` (not `to_f64`) so it cannot shadow or collide with
    /// `num_traits::ToPrimitive::to_f64` on integer receivers.
    fn as_f64(self) -> f64;
}

/// An unsigned integer sample width.
///
/// `Factor` is the float type the rescale factor is computed in: f32 for the
/// 8/16/32-bit widths (matching the original per-width kernels bit-for-bit,
/// including the f32 rounding of `MAX / (imax - imin)`), f64 for u64, which
/// f32 cannot represent.
pub trait IntSample: Sample + PrimInt {
    /// Number of value bits.
    const BITS: u32;

    /// Float type for the per-call rescale factor.
    type Factor: Float;

    /// Widened intermediate for same-representation weighted products
    /// (`u16 -> u32`, ..., `u64 -> u128`).
    type Wide: PrimInt;

    /// `MAX` converted to the factor float, with that float's rounding.
    const MAX_FACTOR: Self::Factor;

    /// Value converted to the factor float.
    fn as_factor(self) -> Self::Factor;

    /// Truncating (not rounding) cast back from the factor float, saturating
    /// at the representation bounds instead of wrapping.
    fn from_factor_trunc(v: Self::Factor) -> Self;

    /// Value converted losslessly into the wide intermediate.
    fn widen(self) -> Self::Wide;

    /// Narrow a wide intermediate, clamping at `MAX`.
    fn from_wide_saturating(w: Self::Wide) -> Self;

    /// Map a color weight into the wide intermediate, scaled by `MAX`.
    /// Negative weights clamp to zero contribution.
    fn weight_to_wide(weight: f32) -> Self::Wide;

    /// Same-representation weighting: `(self * w) / MAX` in the wide
    /// intermediate, saturating on the way back down.
    fn weighted_same(self, w: Self::Wide) -> Self;

    /// Value converted losslessly to u128 (for exact display math).
    fn as_u128(self) -> u128;

    /// Value converted to f32, with f32 rounding above 24 bits.
    fn as_f32(self) -> f32;
}

macro_rules! int_sample {
    ($t:ty, $bits:expr, $wide:ty, $factor:ty) => {
        impl Sample for $t {
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }

        impl IntSample for $t {
            const BITS: u32 = $bits;
            type Factor = $factor;
            type Wide = $wide;
            const MAX_FACTOR: $factor = <$t>::MAX as $factor;

            #[inline]
            fn as_factor(self) -> $factor {
                self as $factor
            }

            #[inline]
            fn from_factor_trunc(v: $factor) -> Self {
                v as $t
            }

            #[inline]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline]
            fn from_wide_saturating(w: $wide) -> Self {
                if w > <$t>::MAX as $wide {
                    <$t>::MAX
                } else {
                    w as $t
                }
            }

            #[inline]
            fn weight_to_wide(weight: f32) -> $wide {
                (weight * <$t>::MAX as f32) as $wide
            }

            #[inline]
            fn weighted_same(self, w: $wide) -> Self {
                Self::from_wide_saturating(
                    (self as $wide).saturating_mul(w) / (<$t>::MAX as $wide),
                )
            }

            #[inline]
            fn as_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn as_f32(self) -> f32 {
                self as f32
            }
        }
    };
}

int_sample!(u8, 8, u16, f32);
int_sample!(u16, 16, u32, f32);
int_sample!(u32, 32, u64, f32);
int_sample!(u64, 64, u128, f64);

impl Sample for f32 {
    const MAX: Self = 1.0;
    const ZERO: Self = 0.0;

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
