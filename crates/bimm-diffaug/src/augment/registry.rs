//! # Augmentation Type Registry
//!
//! Named augmentation types, each expanding to an ordered group of
//! [`RandomTransform`]s.
//!
//! | name          | transforms                          |
//! |---------------|-------------------------------------|
//! | `color`       | brightness, saturation, contrast    |
//! | `offset`      | roll, both axes                     |
//! | `offset_h`    | roll, width axis                    |
//! | `offset_v`    | roll, height axis                   |
//! | `translation` | zero-padded translation             |
//! | `cutout`      | cutout                              |

use crate::augment::error::AugmentError;
use crate::augment::transform::RandomTransform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

/// The builtin augmentation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentType {
    /// Brightness, then saturation, then contrast.
    Color,

    /// Roll on both axes.
    Offset,

    /// Roll on the width axis.
    OffsetH,

    /// Roll on the height axis.
    OffsetV,

    /// Zero-padded translation.
    Translation,

    /// Random cutout.
    Cutout,
}

const COLOR_TRANSFORMS: [RandomTransform; 3] = [
    RandomTransform::Brightness,
    RandomTransform::Saturation,
    RandomTransform::Contrast,
];

impl AugmentType {
    /// Every builtin type.
    pub const ALL: [AugmentType; 6] = [
        Self::Color,
        Self::Offset,
        Self::OffsetH,
        Self::OffsetV,
        Self::Translation,
        Self::Cutout,
    ];

    /// The registry name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Offset => "offset",
            Self::OffsetH => "offset_h",
            Self::OffsetV => "offset_v",
            Self::Translation => "translation",
            Self::Cutout => "cutout",
        }
    }

    /// The ordered transforms this type expands to.
    pub fn transforms(&self) -> &'static [RandomTransform] {
        match self {
            Self::Color => &COLOR_TRANSFORMS,
            Self::Offset => &[RandomTransform::OFFSET],
            Self::OffsetH => &[RandomTransform::OFFSET_H],
            Self::OffsetV => &[RandomTransform::OFFSET_V],
            Self::Translation => &[RandomTransform::TRANSLATION],
            Self::Cutout => &[RandomTransform::CUTOUT],
        }
    }
}

impl Display for AugmentType {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AugmentType {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| AugmentError::UnknownType(s.to_string()))
    }
}

/// Maps augmentation type names to transform groups.
///
/// The default registry holds the [`AugmentType`] builtins; further groups
/// may be registered under new names, or replace builtins.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRegistry {
    groups: BTreeMap<String, Vec<RandomTransform>>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for augment_type in AugmentType::ALL {
            registry.register(augment_type.name(), augment_type.transforms().to_vec());
        }
        registry
    }
}

static BUILTIN: LazyLock<TransformRegistry> = LazyLock::new(TransformRegistry::default);

impl TransformRegistry {
    /// A registry with no groups.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// The shared builtin registry.
    pub fn builtin() -> &'static TransformRegistry {
        &BUILTIN
    }

    /// Register a group, returning any group it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transforms: Vec<RandomTransform>,
    ) -> Option<Vec<RandomTransform>> {
        self.groups.insert(name.into(), transforms)
    }

    /// Look up a group by name.
    pub fn get(
        &self,
        name: &str,
    ) -> Result<&[RandomTransform], AugmentError> {
        self.groups
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| AugmentError::UnknownType(name.to_string()))
    }

    /// Does the registry hold `name`?
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.groups.contains_key(name)
    }

    /// The registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
