//! SIMD target definitions for multiversion dispatch.
//!
//! One macro per architecture so every accelerated kernel advertises the same
//! target set.

// ============================================================================
// x86/x86_64
// ============================================================================

/// Primary SIMD targets for the accelerated kernels (x86_64 version).
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[macro_export]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // x86-64-v3 (Haswell 2013+, Zen 2 2019+)
            "x86_64+sse+sse2+sse3+ssse3+sse4.1+sse4.2+popcnt+cmpxchg16b+avx+avx2+bmi1+bmi2+f16c+fma+lzcnt+movbe+xsave+fxsr",
        ))]
        $($item)*
    };
}

// ============================================================================
// aarch64
// ============================================================================

/// Primary SIMD targets for the accelerated kernels (aarch64 version).
#[cfg(target_arch = "aarch64")]
#[macro_export]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        #[multiversion::multiversion(targets(
            // aarch64 baseline (all ARM64)
            "aarch64+neon+lse+aes+sha2+crc",
        ))]
        $($item)*
    };
}

// ============================================================================
// Fallback for other architectures (wasm32, etc.)
// ============================================================================

/// Primary SIMD targets (fallback - no multiversion).
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
#[macro_export]
macro_rules! simd_multiversion {
    ($($item:tt)*) => {
        $($item)*
    };
}

// Macros are exported at crate root via #[macro_export]
