//! # Augmentation Pipeline
//!
//! [`DiffAugment`] gates a whole batch on one uniform draw; when the gate
//! opens, the batch is randomly flipped and then passed through each named
//! transform group in order.

use crate::augment::error::AugmentError;
use crate::augment::grad::GradMode;
use crate::augment::random::RandomSource;
use crate::augment::registry::{AugmentType, TransformRegistry};
use crate::augment::transform::{DEFAULT_FLIP_PROB, RandomTransform, random_hflip};
use burn::config::Config;
use burn::prelude::{Backend, Tensor};

/// [`DiffAugment`] Config.
#[derive(Config, Debug)]
pub struct DiffAugmentConfig {
    /// Augmentation type names, applied in order; see [`TransformRegistry`].
    pub types: Vec<String>,

    /// Probability of augmenting a batch at all.
    #[config(default = 0.5)]
    pub prob: f64,

    /// Cut augmented outputs from the autodiff graph.
    #[config(default = true)]
    pub detach: bool,
}

impl DiffAugmentConfig {
    /// Config for a list of builtin types.
    pub fn from_types(types: &[AugmentType]) -> Self {
        Self::new(types.iter().map(|t| t.name().to_string()).collect())
    }

    /// The gradient mode selected by `detach`.
    pub fn grad_mode(&self) -> GradMode {
        GradMode::from_detach(self.detach)
    }

    /// Initialize against the builtin registry.
    ///
    /// # Errors
    ///
    /// [`AugmentError::UnknownType`] for the first name not in the registry.
    pub fn init(&self) -> Result<DiffAugment, AugmentError> {
        self.init_with_registry(TransformRegistry::builtin())
    }

    /// Initialize against `registry`.
    ///
    /// # Errors
    ///
    /// [`AugmentError::UnknownType`] for the first name not in the registry.
    pub fn init_with_registry(
        &self,
        registry: &TransformRegistry,
    ) -> Result<DiffAugment, AugmentError> {
        let groups = self
            .types
            .iter()
            .map(|name| Ok((name.clone(), registry.get(name)?.to_vec())))
            .collect::<Result<Vec<_>, AugmentError>>()?;

        Ok(DiffAugment {
            groups,
            prob: self.prob,
            grad_mode: self.grad_mode(),
        })
    }
}

/// A resolved augmentation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffAugment {
    groups: Vec<(String, Vec<RandomTransform>)>,
    prob: f64,
    grad_mode: GradMode,
}

impl DiffAugment {
    /// The resolved ``(name, transforms)`` groups, in application order.
    pub fn groups(&self) -> &[(String, Vec<RandomTransform>)] {
        &self.groups
    }

    /// Probability of augmenting a batch.
    pub fn prob(&self) -> f64 {
        self.prob
    }

    /// The gradient mode augmentation runs under.
    pub fn grad_mode(&self) -> GradMode {
        self.grad_mode
    }

    /// Augment a ``[batch, channels, height, width]`` batch.
    ///
    /// One uniform ``u`` is drawn; unless ``u < prob`` the input is returned
    /// unchanged, with no further draws. Otherwise the batch enters the
    /// pipeline's [`GradMode`], is passed through [`random_hflip`], and then
    /// through every group's transforms in order.
    ///
    /// `prob` is not validated: ``prob <= 0`` never augments, and
    /// ``prob >= 1`` always does. The output always has the input's shape.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    #[tracing::instrument(skip_all)]
    pub fn forward<B: Backend>(
        &self,
        input: Tensor<B, 4>,
        rng: &mut dyn RandomSource,
    ) -> Tensor<B, 4> {
        let u = rng.uniform();
        if !(u < self.prob) {
            tracing::trace!(u, prob = self.prob, "gate closed");
            return input;
        }

        let shape = input.dims();
        let mut x = self.grad_mode.enter(input);
        x = random_hflip(x, DEFAULT_FLIP_PROB, rng);

        for (name, transforms) in &self.groups {
            tracing::trace!(group = name.as_str(), "apply");
            for transform in transforms {
                x = transform.apply(x, rng);
            }
        }

        assert_eq!(x.dims(), shape, "augmentation changed the batch shape");
        x
    }
}

/// Augment a batch in one call.
///
/// Resolves `types` against the builtin registry, then runs
/// [`DiffAugment::forward`].
///
/// # Errors
///
/// [`AugmentError::UnknownType`] for the first unknown name; no randomness
/// is consumed in that case.
pub fn diff_augment<B: Backend, S: AsRef<str>>(
    input: Tensor<B, 4>,
    types: &[S],
    prob: f64,
    detach: bool,
    rng: &mut dyn RandomSource,
) -> Result<Tensor<B, 4>, AugmentError> {
    let augment = DiffAugmentConfig::new(types.iter().map(|t| t.as_ref().to_string()).collect())
        .with_prob(prob)
        .with_detach(detach)
        .init()?;

    Ok(augment.forward(input, rng))
}
