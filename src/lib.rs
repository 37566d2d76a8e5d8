//! Pixel kernels for false-color compositing of single-channel intensity
//! tiles.
//!
//! Scientific imaging instruments record one grayscale tile per measurement
//! channel, usually at 16 bits. Viewing them means stretching each channel's
//! interesting intensity window onto full range, tinting it with a display
//! color, summing the tinted channels, and folding the sum down to 8-bit RGB.
//! This crate provides those kernels over flat slices, generic over the
//! unsigned sample widths (u8/u16/u32/u64) plus a normalized f32 path.
//!
//! # Module Organization
//!
//! - [`render`] - **Recommended API**: whole-frame channel compositing
//! - [`clip`](fn@clip), [`rescale_intensity`], [`composite`](fn@composite),
//!   [`to_display_bounded`] - the individual kernels, for callers managing
//!   their own buffers
//! - [`simd`] - SIMD-accelerated f32 kernel variants
//! - [`auto_range`] - histogram-based window estimation
//!
//! # Quick Start
//!
//! ```rust
//! use channel_blend::{composite_channels, Channel};
//!
//! let nuclei = [1200u16, 30_000, 64_000];
//! let membrane = [45_000u16, 2_000, 15_000];
//!
//! let rgb = composite_channels(&[
//!     Channel { image: &nuclei, color: [0.0, 0.0, 1.0], min: 1_000, max: 50_000 },
//!     Channel { image: &membrane, color: [1.0, 0.0, 0.0], min: 1_000, max: 50_000 },
//! ])
//! .unwrap();
//!
//! assert_eq!(rgb.len(), 9); // 3 pixels, interleaved RGB
//! ```
//!
//! # Kernel-level Use
//!
//! The same frame, spelled out against the individual kernels:
//!
//! ```rust
//! use channel_blend::{composite, rescale_intensity, to_display_vec};
//!
//! let mut tile = [1200u16, 30_000, 64_000];
//! rescale_intensity(&mut tile, 1_000, 50_000).unwrap();
//!
//! let mut accum = [0u32; 9];
//! composite(&mut accum, &tile, 0.0, 0.0, 1.0).unwrap();
//!
//! let rgb = to_display_vec(&accum, 0, 65_535).unwrap();
//! assert_eq!(rgb[2], 1); // pixel 0, blue lane
//! ```
//!
//! # Integer Semantics
//!
//! The integer kernels reproduce the arithmetic of the C renderers this crate
//! replaces, bit for bit: rescale truncates toward zero, the widening
//! composite takes its per-pixel product modulo the accumulator width, and
//! display conversion for the full u16 range is exactly `/ 256`. Rendered
//! frames are diffed byte-for-byte against archived output, so these are
//! contract, not accident.
//!
//! # Feature Flags
//!
//! - `std` (default): Enable std library support
//!
//! # `no_std` Support
//!
//! This crate is `no_std` compatible (with `alloc`). Disable the `std`
//! feature:
//!
//! ```toml
//! channel-blend = { version = "0.2", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// ============================================================================
// Public modules
// ============================================================================

/// Histogram-based automatic intensity windowing.
pub mod autorange;

/// Range clipping (clamping) kernels.
pub mod clip;

/// Weighted colorized accumulation kernels.
pub mod composite;

/// Integer → float and accumulator → display conversions.
pub mod convert;

/// Error type shared by all kernels.
pub mod error;

/// Whole-frame rendering over the individual kernels.
pub mod render;

/// Contrast-stretch (rescale-intensity) kernels.
pub mod rescale;

/// Sample-representation traits the generic kernels are written against.
pub mod sample;

/// SIMD-accelerated kernel variants.
pub mod simd;

// ============================================================================
// Internal modules
// ============================================================================

mod mlaf;
mod targets;

// ============================================================================
// Re-exports: the whole API is small enough to use from the crate root.
// ============================================================================

pub use autorange::auto_range;
pub use clip::clip;
pub use composite::{composite, composite_f32, composite_in_place, CompositeExpand};
pub use convert::{as_float, to_display_bounded, to_display_fixed, to_display_vec};
pub use error::BlendError;
pub use render::{composite_channels, Channel};
pub use rescale::{rescale_intensity, rescale_intensity_f32};
pub use sample::{IntSample, Sample};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_render_matches_kernel_sequence() {
        // composite_channels must be exactly the documented kernel order,
        // nothing more.
        let image = [500u16, 12_000, 33_000, 64_000];
        let rgb = composite_channels(&[Channel {
            image: &image,
            color: [0.9, 0.4, 0.1],
            min: 1_000,
            max: 40_000,
        }])
        .unwrap();

        let mut tile = image;
        rescale_intensity(&mut tile, 1_000, 40_000).unwrap();
        let mut accum = vec![0u32; 12];
        composite(&mut accum, &tile, 0.9, 0.4, 0.1).unwrap();
        let mut manual = vec![0u8; 12];
        to_display_bounded(&accum, &mut manual, 0, 65_535).unwrap();

        assert_eq!(rgb, manual);
    }

    #[test]
    fn test_float_path_tracks_integer_path() {
        // Normalized float rendering of the same frame should agree with the
        // integer pipeline to within display quantization.
        let image = [500u16, 12_000, 33_000, 64_000];
        let integer = composite_channels(&[Channel {
            image: &image,
            color: [1.0, 0.5, 0.0],
            min: 1_000,
            max: 40_000,
        }])
        .unwrap();

        let mut float = as_float(&image).unwrap();
        rescale_intensity_f32(&mut float, 1_000.0 / 65_535.0, 40_000.0 / 65_535.0).unwrap();
        let mut accum = vec![0.0f32; 12];
        composite_f32(&mut accum, &float, 1.0, 0.5, 0.0).unwrap();

        for (i, (byte, f)) in integer.iter().zip(accum.iter()).enumerate() {
            let expected = (f * 256.0).min(255.0) as i32;
            assert!(
                (*byte as i32 - expected).abs() <= 1,
                "paths diverged at {}: integer {} vs float {}",
                i,
                byte,
                expected
            );
        }
    }
}
