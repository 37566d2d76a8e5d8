//! Fused multiply-add abstraction with compile-time hardware detection.
//!
//! The float composite path accumulates `acc + pixel * weight` per channel;
//! when FMA is available (x86 with the FMA feature, or ARM64 NEON) this is a
//! single instruction with one rounding, otherwise a separate multiply+add.

#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "fma"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
use num_traits::MulAdd;

/// Computes `acc + a * b` using FMA when available.
#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "fma"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
#[inline(always)]
pub fn mlaf<T: MulAdd<T, Output = T>>(acc: T, a: T, b: T) -> T {
    MulAdd::mul_add(a, b, acc)
}

/// Computes `acc + a * b` (fallback without hardware FMA).
#[cfg(not(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "fma"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
#[inline(always)]
pub fn mlaf<T: core::ops::Add<Output = T> + core::ops::Mul<Output = T>>(acc: T, a: T, b: T) -> T {
    acc + a * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlaf_accumulates() {
        let r = mlaf(1.0f32, 2.0, 3.0);
        assert_eq!(r, 7.0);
    }
}
