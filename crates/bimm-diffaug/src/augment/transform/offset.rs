//! # Random Roll Offset
//!
//! Cyclic shifts; pixels pushed off one edge wrap around to the opposite edge.

use crate::augment::random::RandomSource;
use burn::prelude::{Backend, Tensor};

/// Default maximum roll, as a fraction of the rolled extent.
pub const DEFAULT_OFFSET_RATIO: f64 = 1.0;

/// Maximum roll for an extent: ``trunc(extent * ratio * axis_ratio)``.
pub fn offset_max_shift(
    extent: usize,
    ratio: f64,
    axis_ratio: f64,
) -> i64 {
    assert!(ratio >= 0.0, "ratio must be non-negative: {ratio}");
    assert!(
        axis_ratio >= 0.0,
        "axis_ratio must be non-negative: {axis_ratio}"
    );
    (extent as f64 * ratio * axis_ratio) as i64
}

/// Draw a roll in ``[-max_shift, max_shift]``, in steps of two, centered on zero.
///
/// A `max_shift` of zero always rolls by zero.
pub fn draw_offset(
    rng: &mut dyn RandomSource,
    max_shift: i64,
) -> i64 {
    rng.int_inclusive(0, max_shift) * 2 - max_shift
}

/// Cyclically shift `tensor` by `shift` positions along `dim`.
///
/// Positive shifts move elements towards higher indices:
/// ``out[i] = in[(i - shift) mod n]``.
pub fn roll_along<B: Backend, const D: usize>(
    tensor: Tensor<B, D>,
    shift: i64,
    dim: usize,
) -> Tensor<B, D> {
    // burn's `roll_dim` moves elements towards lower indices for positive shifts.
    tensor.roll_dim(-shift, dim)
}

/// Randomly roll each sample horizontally and/or vertically.
///
/// Samples are rolled one at a time, as each takes its own shift. For each
/// sample the horizontal (width) shift is drawn, then the vertical (height)
/// shift; see [`draw_offset`]. Each bound is the *other* axis's extent,
/// scaled by `ratio` and the rolled axis's ratio: the width roll is bounded
/// by the height, and the height roll by the width. An axis ratio of zero
/// disables the axis.
pub fn rand_offset<B: Backend>(
    input: Tensor<B, 4>,
    ratio: f64,
    ratio_h: f64,
    ratio_v: f64,
    rng: &mut dyn RandomSource,
) -> Tensor<B, 4> {
    let [_, _, height, width] = input.dims();
    let max_h = offset_max_shift(height, ratio, ratio_h);
    let max_v = offset_max_shift(width, ratio, ratio_v);

    let samples: Vec<Tensor<B, 4>> = input
        .iter_dim(0)
        .map(|sample| {
            let value_h = draw_offset(rng, max_h);
            let value_v = draw_offset(rng, max_v);

            let sample = match value_h {
                0 => sample,
                shift => roll_along(sample, shift, 3),
            };
            match value_v {
                0 => sample,
                shift => roll_along(sample, shift, 2),
            }
        })
        .collect();

    Tensor::cat(samples, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augment::random::RngSource;
    use crate::testing::{ScriptedSource, pattern_batch, to_nested};
    use burn::backend::{Autodiff, NdArray};
    use burn::tensor::TensorData;

    #[test]
    fn test_offset_max_shift() {
        assert_eq!(offset_max_shift(8, 1.0, 1.0), 8);
        assert_eq!(offset_max_shift(8, 1.0, 0.0), 0);
        assert_eq!(offset_max_shift(8, 0.5, 0.5), 2);
        assert_eq!(offset_max_shift(5, 0.5, 1.0), 2);
    }

    #[test]
    fn test_draw_offset() {
        let mut rng = ScriptedSource::ints(&[0, 4, 2, 0]);
        assert_eq!(draw_offset(&mut rng, 4), -4);
        assert_eq!(draw_offset(&mut rng, 4), 4);
        assert_eq!(draw_offset(&mut rng, 4), 0);
        assert_eq!(draw_offset(&mut rng, 0), 0);

        let mut rng = RngSource::seeded(9);
        for _ in 0..200 {
            let shift = draw_offset(&mut rng, 5);
            assert!((-5..=5).contains(&shift));
            // max 5 is odd, so every shift is odd.
            assert_eq!(shift.rem_euclid(2), 1);
        }
    }

    #[test]
    fn test_roll_along() {
        type B = NdArray<f32>;
        let device = Default::default();

        let input: Tensor<B, 1> = Tensor::from_data([0.0, 1.0, 2.0, 3.0], &device);

        roll_along(input.clone(), 1, 0)
            .to_data()
            .assert_eq(&TensorData::from([3.0, 0.0, 1.0, 2.0]), false);
        roll_along(input.clone(), -1, 0)
            .to_data()
            .assert_eq(&TensorData::from([1.0, 2.0, 3.0, 0.0]), false);
        roll_along(input.clone(), 6, 0)
            .to_data()
            .assert_eq(&TensorData::from([2.0, 3.0, 0.0, 1.0]), false);
        roll_along(input.clone(), 0, 0)
            .to_data()
            .assert_eq(&input.to_data(), true);
    }

    #[test]
    fn test_horizontal_offset_wraps() {
        type B = NdArray<f32>;
        let device = Default::default();

        let input = pattern_batch::<B>([2, 3, 4, 6], &device);
        // ratio_v = 0: only the width axis rolls; max_h = height = 4.
        // sample 0: 1 * 2 - 4 = -2; sample 1: 4 * 2 - 4 = 4.
        let mut rng = ScriptedSource::ints(&[1, 0, 4, 0]);
        let output = to_nested(rand_offset(input.clone(), 1.0, 1.0, 0.0, &mut rng));
        assert!(rng.is_exhausted());

        let source = to_nested(input);
        for (b, shift) in [(0usize, -2i64), (1, 4)] {
            for c in 0..3 {
                for h in 0..4 {
                    for w in 0..6 {
                        let src = (w as i64 - shift).rem_euclid(6) as usize;
                        assert_eq!(output[b][c][h][w], source[b][c][h][src]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_vertical_offset_wraps() {
        type B = NdArray<f32>;
        let device = Default::default();

        let input = pattern_batch::<B>([1, 2, 4, 3], &device);
        // ratio_h = 0: only the height axis rolls; max_v = width = 3,
        // shift = 3 * 2 - 3 = 3.
        let mut rng = ScriptedSource::ints(&[0, 3]);
        let output = to_nested(rand_offset(input.clone(), 1.0, 0.0, 1.0, &mut rng));

        let source = to_nested(input);
        for c in 0..2 {
            for h in 0..4 {
                let src = (h + 4 - 3) % 4;
                assert_eq!(output[0][c][h], source[0][c][src]);
            }
        }
    }

    #[test]
    fn test_offset_bounds_use_other_axis_extent() {
        type B = NdArray<f32>;
        let device = Default::default();

        // Width roll on a 2x8 image: bounded by the height, max_h = 2.
        let input: Tensor<B, 4> = Tensor::zeros([1, 1, 2, 8], &device);
        let mut rng = ScriptedSource::ints(&[2, 0]);
        rand_offset(input, 1.0, 1.0, 0.0, &mut rng);
        assert_eq!(rng.int_bounds, vec![(0, 2), (0, 0)]);

        // Height roll on the same image: bounded by the width, max_v = 8.
        let input: Tensor<B, 4> = Tensor::zeros([1, 1, 2, 8], &device);
        let mut rng = ScriptedSource::ints(&[0, 8]);
        rand_offset(input, 1.0, 0.0, 1.0, &mut rng);
        assert_eq!(rng.int_bounds, vec![(0, 0), (0, 8)]);

        // Both axes, halved.
        let input: Tensor<B, 4> = Tensor::zeros([2, 1, 4, 6], &device);
        let mut rng = ScriptedSource::ints(&[0, 0, 1, 1]);
        rand_offset(input, 0.5, 1.0, 1.0, &mut rng);
        assert_eq!(rng.int_bounds, vec![(0, 2), (0, 3), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_offset_is_cyclic_permutation() {
        type B = NdArray<f32>;
        let device = Default::default();

        let input = pattern_batch::<B>([4, 3, 8, 8], &device);
        let mut rng = RngSource::seeded(21);
        let output = to_nested(rand_offset(input.clone(), 1.0, 1.0, 1.0, &mut rng));
        let source = to_nested(input);

        for b in 0..4 {
            // Find the roll from where the first pixel landed; every other pixel must agree.
            let first = source[b][0][0][0];
            let (dh, dw) = (0..8)
                .flat_map(|h| (0..8).map(move |w| (h, w)))
                .find(|&(h, w)| output[b][0][h][w] == first)
                .unwrap();

            for c in 0..3 {
                for h in 0..8 {
                    for w in 0..8 {
                        assert_eq!(
                            output[b][c][(h + dh) % 8][(w + dw) % 8],
                            source[b][c][h][w]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_offset_gradient() {
        type B = Autodiff<NdArray<f32>>;
        let device = Default::default();

        let input = pattern_batch::<B>([2, 1, 3, 3], &device).require_grad();
        let weights = pattern_batch::<B>([2, 1, 3, 3], &device);

        // max_shift = 3 on both axes.
        // sample 0: h = 2 * 2 - 3 = 1, v = 1 * 2 - 3 = -1.
        // sample 1: h = -3, v = 3; full-extent rolls are identities.
        let mut rng = ScriptedSource::ints(&[2, 1, 0, 3]);
        let output = rand_offset(input.clone(), 1.0, 1.0, 1.0, &mut rng);

        let grads = (output * weights.clone()).sum().backward();
        let grad = to_nested(input.grad(&grads).unwrap());
        let weights = to_nested(weights.inner());

        // d/dx sum(roll(x) * w) reads `w` at the rolled position.
        for (b, (shift_h, shift_v)) in [(0usize, (1usize, 2usize)), (1, (0, 0))] {
            for h in 0..3 {
                for w in 0..3 {
                    assert_eq!(
                        grad[b][0][h][w],
                        weights[b][0][(h + shift_v) % 3][(w + shift_h) % 3]
                    );
                }
            }
        }
    }
}
