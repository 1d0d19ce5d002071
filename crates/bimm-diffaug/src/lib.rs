#![warn(missing_docs)]
//!# bimm-diffaug - Differentiable Augmentation for Burn Image Models
//!
//! ## Notable Components
//!
//! * [`augment`] - `DiffAugment`, batched randomized image augmentation for GAN training.
//!   * [`augment::pipeline`] - the gated, grad-mode aware augmentation pipeline.
//!   * [`augment::registry`] - augmentation type names and their transform groups.
//!   * [`augment::transform`] - the primitive random transforms.
//!   * [`augment::random`] - injectable randomness sources.
//! * [`init`] - weight initializers.
//!   * [`init::trunc_normal`] - truncated normal initialization.
//! * [`models`] - model family configuration.
//!   * [`models::vit`] - Vision Transformer configs and prefabs.
//! * [`prefabs`] - named, well-known config builders.

pub mod augment;
pub mod init;
pub mod models;
pub mod prefabs;

#[cfg(test)]
pub(crate) mod testing;
