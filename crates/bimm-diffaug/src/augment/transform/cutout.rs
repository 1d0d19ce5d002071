//! # Random Cutout
//!
//! Zeroes one rectangular window per sample, across all channels.

use crate::augment::random::{RandomSource, batch_ints, float_tensor};
use burn::prelude::{Backend, Tensor};
use std::ops::Range;

/// Default cutout window size, as a fraction of each spatial extent.
pub const DEFAULT_CUTOUT_RATIO: f64 = 0.5;

/// Window size for an extent: ``trunc(extent * ratio + 0.5)``.
pub fn cutout_size(
    extent: usize,
    ratio: f64,
) -> usize {
    assert!(ratio >= 0.0, "ratio must be non-negative: {ratio}");
    (extent as f64 * ratio + 0.5) as usize
}

/// The largest legal window-center offset: ``extent - (size mod 2)``.
///
/// Offsets are drawn from ``[0, cutout_max_offset]``.
pub fn cutout_max_offset(
    extent: usize,
    size: usize,
) -> i64 {
    extent as i64 - (size % 2) as i64
}

/// The span covered by a window of `size` centered at `offset`.
///
/// The window starts at ``offset - size / 2`` and is clamped to ``[0, extent)``.
/// A zero-sized window covers nothing.
pub fn cutout_span(
    offset: i64,
    size: usize,
    extent: usize,
) -> Range<usize> {
    if size == 0 || extent == 0 {
        return 0..0;
    }
    let last = extent as i64 - 1;
    let start = offset - (size / 2) as i64;
    let end = start + size as i64 - 1;

    let start = start.clamp(0, last) as usize;
    let end = end.clamp(0, last) as usize;
    start..end + 1
}

/// Zero a random window in each sample.
///
/// Window size is [`cutout_size`] on each axis; all row offsets are drawn,
/// then all column offsets. The cut is applied as one multiplicative
/// ``[batch, 1, height, width]`` mask, so gradients through the kept pixels
/// are unchanged.
pub fn rand_cutout<B: Backend>(
    input: Tensor<B, 4>,
    ratio: f64,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let [batch, _, height, width] = input.dims();

    let size_h = cutout_size(height, ratio);
    let size_w = cutout_size(width, ratio);
    let offsets_h = batch_ints(rng, batch, 0, cutout_max_offset(height, size_h));
    let offsets_w = batch_ints(rng, batch, 0, cutout_max_offset(width, size_w));

    let mut mask = vec![1.0; batch * height * width];
    for (b, (&offset_h, &offset_w)) in offsets_h.iter().zip(offsets_w.iter()).enumerate() {
        let rows = cutout_span(offset_h, size_h, height);
        let cols = cutout_span(offset_w, size_w, width);
        for row in rows {
            let base = (b * height + row) * width;
            mask[base + cols.start..base + cols.end].fill(0.0);
        }
    }
    let mask = float_tensor::<B, 4>(mask, [batch, 1, height, width], &input.device());

    input * mask
}
