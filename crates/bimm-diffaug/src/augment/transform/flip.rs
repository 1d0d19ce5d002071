//! # Random Horizontal Flip

use crate::augment::random::RandomSource;
use burn::prelude::{Backend, Tensor};

/// The flip threshold used by the augmentation pipeline.
pub const DEFAULT_FLIP_PROB: f64 = 0.5;

/// Flip the whole batch along the width axis, or pass it through.
///
/// One value ``u`` is drawn; the batch passes through unchanged when
/// ``prob > u`` and is flipped otherwise.
///
/// Note: `prob` is the probability of *keeping* the batch as-is; the inverse
/// of the usual "flip with probability `prob`" reading.
pub fn random_hflip<B: Backend>(
    input: Tensor<B, 4>,
    prob: f64,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let u = rng.uniform();
    if prob > u {
        tracing::trace!(prob, u, "hflip: keep");
        return input;
    }
    tracing::trace!(prob, u, "hflip: flip");
    input.flip([3])
}
