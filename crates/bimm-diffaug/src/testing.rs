//! Test fixtures.

use crate::augment::random::{RandomSource, float_tensor};
use burn::prelude::{Backend, Tensor};
use std::collections::VecDeque;

/// A [`RandomSource`] which replays scripted draws, in order.
///
/// Panics when a draw of either kind is requested past the end of its script.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    ints: VecDeque<i64>,
    pub uniform_draws: usize,
    pub int_draws: usize,
    pub int_bounds: Vec<(i64, i64)>,
}

impl ScriptedSource {
    pub fn new(
        uniforms: &[f64],
        ints: &[i64],
    ) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
            ints: ints.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn uniforms(uniforms: &[f64]) -> Self {
        Self::new(uniforms, &[])
    }

    pub fn ints(ints: &[i64]) -> Self {
        Self::new(&[], ints)
    }

    pub fn is_exhausted(&self) -> bool {
        self.uniforms.is_empty() && self.ints.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        self.uniform_draws += 1;
        self.uniforms
            .pop_front()
            .expect("scripted uniform draws exhausted")
    }

    fn int_inclusive(
        &mut self,
        low: i64,
        high: i64,
    ) -> i64 {
        self.int_draws += 1;
        self.int_bounds.push((low, high));
        let value = self.ints.pop_front().expect("scripted int draws exhausted");
        assert!(
            (low..=high).contains(&value),
            "scripted int {value} outside [{low}, {high}]"
        );
        value
    }
}

/// A ``[batch, channels, height, width]`` batch with distinct values ``1..=numel``.
pub fn pattern_batch<B: Backend>(
    shape: [usize; 4],
    device: &B::Device,
) -> Tensor<B, 4> {
    let numel: usize = shape.iter().product();
    let values = (1..=numel).map(|v| v as f64).collect();
    float_tensor(values, shape, device)
}

/// Read a ``[batch, channels, height, width]`` tensor back as nested host vectors.
pub fn to_nested<B: Backend>(tensor: Tensor<B, 4>) -> Vec<Vec<Vec<Vec<f32>>>> {
    let [batch, channels, height, width] = tensor.dims();
    let flat = tensor.into_data().convert::<f32>().to_vec::<f32>().unwrap();

    (0..batch)
        .map(|b| {
            (0..channels)
                .map(|c| {
                    (0..height)
                        .map(|h| {
                            let start = ((b * channels + c) * height + h) * width;
                            flat[start..start + width].to_vec()
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}
