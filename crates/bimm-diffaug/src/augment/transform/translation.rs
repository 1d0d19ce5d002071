//! # Random Translation
//!
//! Shifts each sample by a random integer offset on both spatial axes.
//! Pixels shifted in from outside the image are zero.

use crate::augment::random::{RandomSource, batch_ints, int_tensor};
use burn::prelude::{Backend, Tensor};

/// Default maximum shift, as a fraction of each spatial extent.
pub const DEFAULT_TRANSLATION_RATIO: f64 = 0.125;

/// Maximum shift for a spatial extent: ``trunc(extent * ratio + 0.5)``.
pub fn translation_shift(
    extent: usize,
    ratio: f64,
) -> i64 {
    assert!(ratio >= 0.0, "ratio must be non-negative: {ratio}");
    (extent as f64 * ratio + 0.5) as i64
}

/// Randomly translate each sample.
///
/// Per sample, shifts ``t_h`` and ``t_w`` are drawn from
/// ``[-shift, shift]`` (see [`translation_shift`]); all height shifts are
/// drawn before all width shifts.
///
/// The batch is zero-padded by one pixel on each spatial border, and output
/// pixel ``(i, j)`` reads padded pixel
/// ``(clamp(i + t_h + 1, 0, height + 1), clamp(j + t_w + 1, 0, width + 1))``;
/// so out-of-bounds reads land on the zero border. The read is a single
/// batched `gather` over the flattened padded image.
pub fn rand_translation<B: Backend>(
    input: Tensor<B, 4>,
    ratio: f64,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let [batch, channels, height, width] = input.dims();
    let device = input.device();

    let shift_h = translation_shift(height, ratio);
    let shift_w = translation_shift(width, ratio);
    let offsets_h = batch_ints(rng, batch, -shift_h, shift_h);
    let offsets_w = batch_ints(rng, batch, -shift_w, shift_w);

    let padded_height = height + 2;
    let padded_width = width + 2;

    let mut indices = Vec::with_capacity(batch * height * width);
    for (&t_h, &t_w) in offsets_h.iter().zip(offsets_w.iter()) {
        for i in 0..height as i64 {
            let src_i = (i + t_h + 1).clamp(0, padded_height as i64 - 1);
            for j in 0..width as i64 {
                let src_j = (j + t_w + 1).clamp(0, padded_width as i64 - 1);
                indices.push(src_i * padded_width as i64 + src_j);
            }
        }
    }
    let indices = int_tensor::<B, 3>(indices, [batch, 1, height * width], &device)
        .repeat_dim(1, channels);

    input
        .pad((1, 1, 1, 1), 0.0)
        .reshape([batch, channels, padded_height * padded_width])
        .gather(2, indices)
        .reshape([batch, channels, height, width])
}
