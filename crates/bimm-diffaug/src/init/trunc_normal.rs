//! # Truncated Normal Initialization
//!
//! Samples ``N(mean, std)`` restricted to ``[a, b]`` by inverse-CDF sampling:
//! uniform draws between the bounds' CDF values are mapped back through the
//! normal quantile function.

use crate::augment::random::{RandomSource, float_tensor};
use crate::init::special::{erf, erfinv};
use burn::config::Config;
use burn::prelude::{Backend, Tensor};
use std::f64::consts::SQRT_2;

/// Truncated normal distribution Config.
#[derive(Config, Debug)]
pub struct TruncNormal {
    /// Mean of the untruncated normal.
    #[config(default = 0.0)]
    pub mean: f64,

    /// Standard deviation of the untruncated normal.
    #[config(default = 1.0)]
    pub std: f64,

    /// Lower cutoff.
    #[config(default = -2.0)]
    pub a: f64,

    /// Upper cutoff.
    #[config(default = 2.0)]
    pub b: f64,
}

/// The standard normal CDF.
fn norm_cdf(x: f64) -> f64 {
    (1.0 + erf(x / SQRT_2)) / 2.0
}

impl TruncNormal {
    /// Draw `n` values on the host.
    ///
    /// Sampling is poorly conditioned when `mean` lies more than ``2 * std``
    /// outside ``[a, b]``; that case logs a warning, and the clamp to
    /// ``[a, b]`` still holds.
    pub fn sample_values(
        &self,
        n: usize,
        rng: &mut dyn RandomSource,
    ) -> Vec<f64> {
        assert!(self.std > 0.0, "std must be positive: {}", self.std);
        assert!(self.a <= self.b, "a must not exceed b: [{}, {}]", self.a, self.b);

        if self.mean < self.a - 2.0 * self.std || self.mean > self.b + 2.0 * self.std {
            tracing::warn!(
                mean = self.mean,
                std = self.std,
                a = self.a,
                b = self.b,
                "mean is more than 2 std from [a, b]; the distribution of values may be incorrect"
            );
        }

        let low = 2.0 * norm_cdf((self.a - self.mean) / self.std) - 1.0;
        let high = 2.0 * norm_cdf((self.b - self.mean) / self.std) - 1.0;

        (0..n)
            .map(|_| {
                let u = rng.uniform_range(low, high);
                (erfinv(u) * self.std * SQRT_2 + self.mean).clamp(self.a, self.b)
            })
            .collect()
    }

    /// Sample a new tensor.
    ///
    /// The result is a fresh leaf, outside any autodiff graph.
    pub fn sample<B: Backend, const D: usize>(
        &self,
        shape: [usize; D],
        device: &B::Device,
        rng: &mut dyn RandomSource,
    ) -> Tensor<B, D> {
        let values = self.sample_values(shape.iter().product(), rng);
        float_tensor(values, shape, device)
    }

    /// Sample a tensor with the shape and device of `like`.
    pub fn init_like<B: Backend, const D: usize>(
        &self,
        like: &Tensor<B, D>,
        rng: &mut dyn RandomSource,
    ) -> Tensor<B, D> {
        self.sample(like.dims(), &like.device(), rng)
    }
}

/// Sample a truncated normal tensor; see [`TruncNormal`].
pub fn trunc_normal<B: Backend, const D: usize>(
    shape: [usize; D],
    mean: f64,
    std: f64,
    a: f64,
    b: f64,
    device: &B::Device,
    rng: &mut dyn RandomSource,
) -> Tensor<B, D> {
    TruncNormal::new()
        .with_mean(mean)
        .with_std(std)
        .with_a(a)
        .with_b(b)
        .sample(shape, device, rng)
}
