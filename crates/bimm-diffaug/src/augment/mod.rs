//! # `DiffAugment`
//!
//! Randomized, shape-preserving, optionally differentiable augmentation of
//! ``[batch, channels, height, width]`` image batches; as used when training
//! GAN discriminators on both real and generated images.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bimm_diffaug::augment::pipeline::DiffAugmentConfig;
//! use bimm_diffaug::augment::random::RngSource;
//! use burn::backend::NdArray;
//! use burn::prelude::Tensor;
//! use burn::tensor::Distribution;
//!
//! let device = Default::default();
//! let mut rng = RngSource::seeded(42);
//!
//! let augment = DiffAugmentConfig::new(vec!["color".into(), "translation".into(), "cutout".into()])
//!     .with_prob(1.0)
//!     .init()
//!     .unwrap();
//!
//! let images: Tensor<NdArray, 4> = Tensor::random([8, 3, 32, 32], Distribution::Default, &device);
//! let augmented = augment.forward(images, &mut rng);
//! assert_eq!(augmented.dims(), [8, 3, 32, 32]);
//! ```

pub mod error;
pub mod grad;
pub mod pipeline;
pub mod random;
pub mod registry;
pub mod transform;

pub use error::AugmentError;
pub use grad::GradMode;
pub use pipeline::{DiffAugment, DiffAugmentConfig, diff_augment};
pub use random::{RandomSource, RngSource};
pub use registry::{AugmentType, TransformRegistry};
pub use transform::RandomTransform;
