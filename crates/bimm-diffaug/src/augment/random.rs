//! # Randomness Sources
//!
//! Every random draw made by the augmentation pipeline goes through a
//! [`RandomSource`]; callers pick the generator, and seed it if they need
//! reproducible augmentation.

use burn::prelude::{Backend, Int, Tensor};
use burn::tensor::TensorData;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform random draws.
pub trait RandomSource {
    /// Draw a value uniformly from ``[0, 1)``.
    fn uniform(&mut self) -> f64;

    /// Draw an integer uniformly from the inclusive range ``[low, high]``.
    ///
    /// Callers must ensure ``low <= high``.
    fn int_inclusive(
        &mut self,
        low: i64,
        high: i64,
    ) -> i64;

    /// Draw a value uniformly from ``[low, high)``.
    fn uniform_range(
        &mut self,
        low: f64,
        high: f64,
    ) -> f64 {
        low + (high - low) * self.uniform()
    }
}

/// [`RandomSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A reproducible source, seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// A source backed by the lazily-initialized thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn int_inclusive(
        &mut self,
        low: i64,
        high: i64,
    ) -> i64 {
        self.rng.random_range(low..=high)
    }
}

/// Draw one ``U[low, high)`` factor per batch item, shaped ``[batch, 1, 1, 1]``.
///
/// The result broadcasts against a ``[batch, channels, height, width]`` image batch.
pub fn batch_factors<B: Backend>(
    rng: &mut dyn RandomSource,
    batch: usize,
    low: f64,
    high: f64,
    device: &B::Device,
) -> Tensor<B, 4> {
    let values: Vec<f64> = (0..batch).map(|_| rng.uniform_range(low, high)).collect();
    float_tensor(values, [batch, 1, 1, 1], device)
}

/// Draw one ``[low, high]`` integer per batch item.
pub fn batch_ints(
    rng: &mut dyn RandomSource,
    batch: usize,
    low: i64,
    high: i64,
) -> Vec<i64> {
    (0..batch).map(|_| rng.int_inclusive(low, high)).collect()
}

/// Upload host values as a float tensor of the backend's element type.
pub fn float_tensor<B: Backend, const D: usize>(
    values: Vec<f64>,
    shape: [usize; D],
    device: &B::Device,
) -> Tensor<B, D> {
    Tensor::from_data(TensorData::new(values, shape), device)
}

/// Upload host values as an int tensor of the backend's element type.
pub fn int_tensor<B: Backend, const D: usize>(
    values: Vec<i64>,
    shape: [usize; D],
    device: &B::Device,
) -> Tensor<B, D, Int> {
    Tensor::from_data(TensorData::new(values, shape), device)
}
