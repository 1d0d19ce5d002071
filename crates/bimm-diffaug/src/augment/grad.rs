//! # Gradient Tracking Mode

use burn::prelude::{Backend, Tensor};
use serde::{Deserialize, Serialize};

/// Whether augmentation participates in the autodiff graph.
///
/// burn tracks gradients per tensor rather than through a global switch;
/// entering a mode only rebinds the working tensor, and the caller's tensor
/// keeps its own tracking state on every exit path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradMode {
    /// Cut the graph: outputs carry no gradient history.
    #[default]
    Detached,

    /// Keep the graph: gradients flow through every applied transform.
    Tracked,
}

impl GradMode {
    /// Map a ``detach`` flag to a mode.
    pub fn from_detach(detach: bool) -> Self {
        if detach { Self::Detached } else { Self::Tracked }
    }

    /// Is this mode detaching?
    pub fn is_detached(&self) -> bool {
        matches!(self, Self::Detached)
    }

    /// Rebind `tensor` for work under this mode.
    pub fn enter<B: Backend, const D: usize>(
        &self,
        tensor: Tensor<B, D>,
    ) -> Tensor<B, D> {
        match self {
            // `detach` alone keeps a leaf's `require_grad` flag.
            Self::Detached => tensor.detach().set_require_grad(false),
            Self::Tracked => tensor,
        }
    }
}

impl From<bool> for GradMode {
    fn from(detach: bool) -> Self {
        Self::from_detach(detach)
    }
}
