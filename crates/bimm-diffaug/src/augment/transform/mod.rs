//! # Random Transform Primitives
//!
//! Each primitive maps a ``[batch, channels, height, width]`` batch to a new
//! batch of the same shape, drawing its per-sample parameters from a
//! [`RandomSource`]. Everything except [`offset::rand_offset`] runs as
//! whole-batch tensor ops.

use crate::augment::random::RandomSource;
use burn::prelude::{Backend, Tensor};
use serde::{Deserialize, Serialize};

pub mod color;
pub mod cutout;
pub mod flip;
pub mod offset;
pub mod translation;

pub use color::{rand_brightness, rand_contrast, rand_saturation};
pub use cutout::{DEFAULT_CUTOUT_RATIO, rand_cutout};
pub use flip::{DEFAULT_FLIP_PROB, random_hflip};
pub use offset::{DEFAULT_OFFSET_RATIO, rand_offset};
pub use translation::{DEFAULT_TRANSLATION_RATIO, rand_translation};

/// A primitive random transform, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RandomTransform {
    /// See [`rand_brightness`].
    Brightness,

    /// See [`rand_saturation`].
    Saturation,

    /// See [`rand_contrast`].
    Contrast,

    /// See [`rand_translation`].
    Translation {
        /// Maximum shift, as a fraction of each spatial extent.
        ratio: f64,
    },

    /// See [`rand_offset`].
    Offset {
        /// Maximum roll, as a fraction of the rolled extent.
        ratio: f64,

        /// Horizontal (width) scale on `ratio`; zero disables the axis.
        ratio_h: f64,

        /// Vertical (height) scale on `ratio`; zero disables the axis.
        ratio_v: f64,
    },

    /// See [`rand_cutout`].
    Cutout {
        /// Window size, as a fraction of each spatial extent.
        ratio: f64,
    },
}

impl RandomTransform {
    /// Translation with the default ratio.
    pub const TRANSLATION: Self = Self::Translation {
        ratio: DEFAULT_TRANSLATION_RATIO,
    };

    /// Roll on both axes, with the default ratio.
    pub const OFFSET: Self = Self::Offset {
        ratio: DEFAULT_OFFSET_RATIO,
        ratio_h: 1.0,
        ratio_v: 1.0,
    };

    /// Horizontal-only roll.
    pub const OFFSET_H: Self = Self::Offset {
        ratio: 1.0,
        ratio_h: DEFAULT_OFFSET_RATIO,
        ratio_v: 0.0,
    };

    /// Vertical-only roll.
    pub const OFFSET_V: Self = Self::Offset {
        ratio: 1.0,
        ratio_h: 0.0,
        ratio_v: DEFAULT_OFFSET_RATIO,
    };

    /// Cutout with the default ratio.
    pub const CUTOUT: Self = Self::Cutout {
        ratio: DEFAULT_CUTOUT_RATIO,
    };

    /// Short name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Saturation => "saturation",
            Self::Contrast => "contrast",
            Self::Translation { .. } => "translation",
            Self::Offset { .. } => "offset",
            Self::Cutout { .. } => "cutout",
        }
    }

    /// Apply the transform.
    pub fn apply<B: Backend>(
        &self,
        input: Tensor<B, 4>,
        rng: &mut dyn RandomSource,
    ) -> Tensor<B, 4> {
        match *self {
            Self::Brightness => rand_brightness(input, rng),
            Self::Saturation => rand_saturation(input, rng),
            Self::Contrast => rand_contrast(input, rng),
            Self::Translation { ratio } => rand_translation(input, ratio, rng),
            Self::Offset {
                ratio,
                ratio_h,
                ratio_v,
            } => rand_offset(input, ratio, ratio_h, ratio_v, rng),
            Self::Cutout { ratio } => rand_cutout(input, ratio, rng),
        }
    }
}
