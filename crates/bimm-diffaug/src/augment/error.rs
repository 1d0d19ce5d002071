//! # Augmentation Errors

use thiserror::Error;

/// Errors raised while resolving or running an augmentation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AugmentError {
    /// The augmentation type name is not present in the registry.
    #[error("unknown augmentation type: {0:?}")]
    UnknownType(String),
}
