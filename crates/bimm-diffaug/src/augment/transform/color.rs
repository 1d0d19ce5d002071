//! # Color Transforms
//!
//! Per-sample brightness, saturation, and contrast jitter.
//! Each draws one factor per batch item and broadcasts it over the image.

use crate::augment::random::{RandomSource, batch_factors};
use burn::prelude::{Backend, Tensor};

/// Add a per-sample offset drawn from ``U[-0.5, 0.5)``.
pub fn rand_brightness<B: Backend>(
    input: Tensor<B, 4>,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let [batch, ..] = input.dims();
    let offset = batch_factors::<B>(rng, batch, -0.5, 0.5, &input.device());
    input + offset
}

/// Scale each pixel's distance from its channel mean by a factor from ``U[0, 2)``.
pub fn rand_saturation<B: Backend>(
    input: Tensor<B, 4>,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let [batch, ..] = input.dims();
    let factor = batch_factors::<B>(rng, batch, 0.0, 2.0, &input.device());
    blend_around(input.clone().mean_dim(1), input, factor)
}

/// Scale each sample's distance from its global mean by a factor from ``U[0.5, 1.5)``.
pub fn rand_contrast<B: Backend>(
    input: Tensor<B, 4>,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let [batch, ..] = input.dims();
    let factor = batch_factors::<B>(rng, batch, 0.5, 1.5, &input.device());
    let mean = input.clone().mean_dim(1).mean_dim(2).mean_dim(3);
    blend_around(mean, input, factor)
}

/// ``(input - mean) * factor + mean``, broadcasting `mean` and `factor`.
fn blend_around<B: Backend>(
    mean: Tensor<B, 4>,
    input: Tensor<B, 4>,
    factor: Tensor<B, 4>,
) -> Tensor<B, 4> {
    (input - mean.clone()) * factor + mean
}
