//! Histogram-based automatic intensity windowing.
//!
//! Picks a `(min, max)` display window for a channel from a sample of its
//! pixels, for callers that have no curated per-channel settings. The window
//! is returned normalized to `[0, 1]` of the representation range so it can
//! be stored independently of bit depth and scaled back with `T::MAX` when
//! rendering.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::BlendError;
use crate::sample::IntSample;

/// Estimate a display window from a pixel sample.
///
/// Builds a `num_bins`-bin histogram over the sample's own value range. The
/// lower bound is the upper edge of the first bin, which discards the darkest
/// sliver of background. The upper bound is the left edge of the brightest
/// bin whose population exceeds `threshold`, so isolated hot pixels above it
/// do not blow out the window; when no bin qualifies the upper bound falls
/// back to the full representation maximum.
///
/// Both bounds are rounded to whole sample values (ties to even) and then
/// normalized by `T::MAX`. A constant sample collapses both bounds onto the
/// single value; callers wanting a usable window from such input must widen
/// it themselves. Empty input and `num_bins == 0` are rejected.
pub fn auto_range<T: IntSample>(
    data: &[T],
    threshold: usize,
    num_bins: usize,
) -> Result<(f64, f64), BlendError> {
    if data.is_empty() {
        return Err(BlendError::EmptyChannels);
    }
    if num_bins == 0 {
        return Err(BlendError::InvalidRange { min: 0.0, max: 0.0 });
    }

    let mut lo = data[0];
    let mut hi = data[0];
    for v in &data[1..] {
        if *v < lo {
            lo = *v;
        }
        if *v > hi {
            hi = *v;
        }
    }
    // A constant sample gets a unit-wide range centered on the value.
    let (lo, hi) = if lo == hi {
        (lo.as_f64() - 0.5, hi.as_f64() + 0.5)
    } else {
        (lo.as_f64(), hi.as_f64())
    };
    let width = (hi - lo) / num_bins as f64;

    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(num_bins)
        .map_err(|_| BlendError::Allocation { len: num_bins })?;
    counts.resize(num_bins, 0);
    for v in data {
        let mut idx = ((v.as_f64() - lo) / width) as usize;
        if idx >= num_bins {
            idx = num_bins - 1;
        }
        counts[idx] += 1;
    }

    let min_val = lo + width;
    let max_val = counts
        .iter()
        .rposition(|&c| c > threshold)
        .map(|i| lo + i as f64 * width)
        .unwrap_or_else(|| T::MAX.as_f64());

    let abs_max = T::MAX.as_f64();
    Ok((
        min_val.round_ties_even() / abs_max,
        max_val.round_ties_even() / abs_max,
    ))
}
