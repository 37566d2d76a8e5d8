//! SIMD-accelerated kernel variants using the `wide` crate.
//!
//! Processes 8 f32 values in parallel (AVX2/SSE or equivalent) with runtime
//! dispatch via the [`crate::simd_multiversion!`] target macros. Every
//! function here
//! carries exactly the same contract as its generic counterpart: vectorized
//! execution is an optimization detail, and the test suite holds these
//! element-for-element equal to the scalar kernels rather than inspecting
//! instruction choice.

use wide::{f32x8, CmpEq};

use crate::error::BlendError;
use crate::mlaf::mlaf;

crate::simd_multiversion! {
    /// Clamp a slice of f32x8 vectors into `[min, max]` in-place.
    ///
    /// The most efficient form when data is already laid out in f32x8.
    pub fn clip_f32_x8_slice(target: &mut [f32x8], min: f32, max: f32) -> Result<(), BlendError> {
        if !(min <= max) {
            return Err(BlendError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        let lo = f32x8::splat(min);
        let hi = f32x8::splat(max);
        for v in target.iter_mut() {
            *v = v.max(lo).min(hi);
        }
        Ok(())
    }
}

crate::simd_multiversion! {
    /// Clamp a f32 slice into `[min, max]` in-place.
    ///
    /// Processes 8 values at a time, with scalar fallback for the remainder.
    pub fn clip_f32_slice(target: &mut [f32], min: f32, max: f32) -> Result<(), BlendError> {
        if !(min <= max) {
            return Err(BlendError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }

        let lo = f32x8::splat(min);
        let hi = f32x8::splat(max);
        let (chunks, remainder) = target.as_chunks_mut::<8>();

        for chunk in chunks {
            let v = f32x8::from(*chunk);
            *chunk = v.max(lo).min(hi).into();
        }

        for v in remainder {
            let t = if *v < min { min } else { *v };
            *v = if t > max { max } else { t };
        }
        Ok(())
    }
}

crate::simd_multiversion! {
    /// Contrast-stretch a f32 slice onto `[0, 1]` in-place.
    ///
    /// Element-for-element equal to [`crate::rescale_intensity_f32`],
    /// including the exact-endpoint pin at `imax`.
    pub fn rescale_f32_slice(target: &mut [f32], imin: f32, imax: f32) -> Result<(), BlendError> {
        if !(imax > imin) {
            return Err(BlendError::InvalidRange {
                min: imin as f64,
                max: imax as f64,
            });
        }

        let factor = 1.0 / (imax - imin);
        let lo = f32x8::splat(imin);
        let hi = f32x8::splat(imax);
        let f = f32x8::splat(factor);
        let one = f32x8::splat(1.0);
        let (chunks, remainder) = target.as_chunks_mut::<8>();

        for chunk in chunks {
            let clipped = f32x8::from(*chunk).max(lo).min(hi);
            let scaled = ((clipped - lo) * f).min(one);
            let at_top = clipped.simd_eq(hi);
            *chunk = at_top.blend(one, scaled).into();
        }

        for v in remainder {
            let t = if *v < imin { imin } else { *v };
            let t = if t > imax { imax } else { t };
            *v = if t == imax {
                1.0
            } else {
                ((t - imin) * factor).min(1.0)
            };
        }
        Ok(())
    }
}

crate::simd_multiversion! {
    /// Clamp a u16 slice into `[min, max]` in-place.
    ///
    /// Plain clamp loop the compiler auto-vectorizes per dispatch target.
    pub fn clip_u16_slice(target: &mut [u16], min: u16, max: u16) -> Result<(), BlendError> {
        if min > max {
            return Err(BlendError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        for v in target.iter_mut() {
            *v = (*v).clamp(min, max);
        }
        Ok(())
    }
}

crate::simd_multiversion! {
    /// Weighted float accumulation, dispatched per target.
    ///
    /// Same contract and arithmetic as [`crate::composite_f32`].
    pub fn composite_f32_slice(
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::clip;
    use crate::rescale::rescale_intensity_f32;

    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    fn ramp(n: usize) -> Vec<f32> {
        (0..n).map(|i| i as f32 / (n - 1) as f32 * 2.0 - 0.5).collect()
    }

    #[test]
    fn test_clip_f32_slice_matches_scalar() {
        // 1003 forces a non-empty remainder.
        let data = ramp(1003);
        let mut simd_buf = data.clone();
        let mut scalar_buf = data;
        clip_f32_slice(&mut simd_buf, 0.0, 1.0).unwrap();
        clip(&mut scalar_buf, 0.0f32, 1.0).unwrap();
        assert_eq!(simd_buf, scalar_buf);
    }

    #[test]
    fn test_clip_f32_x8_slice() {
        let mut buf = vec![f32x8::from([-1.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0]); 4];
        clip_f32_x8_slice(&mut buf, 0.0, 1.0).unwrap();
        let arr: [f32; 8] = buf[0].into();
        assert_eq!(arr, [0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_rescale_f32_slice_matches_scalar() {
        let data = ramp(517);
        let mut simd_buf = data.clone();
        let mut scalar_buf = data;
        rescale_f32_slice(&mut simd_buf, 0.1, 0.9).unwrap();
        rescale_intensity_f32(&mut scalar_buf, 0.1, 0.9).unwrap();
        assert_eq!(simd_buf, scalar_buf);
    }

    #[test]
    fn test_clip_u16_slice_matches_scalar() {
        let data: Vec<u16> = (0..4099).map(|i| (i * 37 % 65536) as u16).collect();
        let mut fast = data.clone();
        let mut reference = data;
        clip_u16_slice(&mut fast, 2000, 36000).unwrap();
        clip(&mut reference, 2000u16, 36000).unwrap();
        assert_eq!(fast, reference);
    }

    #[test]
    fn test_composite_f32_slice_matches_scalar() {
        let image: Vec<f32> = (0..301).map(|i| i as f32 / 300.0).collect();
        let mut fast = vec![0.0f32; 903];
        let mut reference = vec![0.0f32; 903];
        composite_f32_slice(&mut fast, &image, 0.7, 0.2, 1.3).unwrap();
        crate::composite_f32(&mut reference, &image, 0.7, 0.2, 1.3).unwrap();
        assert_eq!(fast, reference);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let mut buf = vec![0.5f32; 16];
        assert!(clip_f32_slice(&mut buf, 1.0, 0.0).is_err());
        assert!(rescale_f32_slice(&mut buf, 0.9, 0.1).is_err());
    }

    #[test]
    fn test_nan_bounds_rejected() {
        let mut buf = vec![0.5f32; 16];
        assert!(clip_f32_slice(&mut buf, f32::NAN, 1.0).is_err());
        assert!(clip_f32_slice(&mut buf, 0.0, f32::NAN).is_err());
        let mut vectors = vec![f32x8::splat(0.5); 2];
        assert!(clip_f32_x8_slice(&mut vectors, f32::NAN, 1.0).is_err());
    }
}
