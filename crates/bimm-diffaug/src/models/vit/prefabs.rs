//! # `ViT` Config Prefabs

use crate::models::vit::VitConfig;
use crate::prefabs::{PreFabConfig, StaticPreFabConfig, find_prefab};

/// Static builder for [`VitPreFabConfig`].
pub type StaticVitPreFabConfig = StaticPreFabConfig<VitConfig>;

/// A [`VitConfig`] Well-Known Pre-Fab.
pub type VitPreFabConfig = PreFabConfig<VitConfig>;

/// Minimal `ViT`, for tests.
pub static VIT_TESTING_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "testing",
    description: "Minimal ViT configuration for testing",
    builder: VitConfig::testing,
};

/// `ViT-B/16`.
pub static VIT_B16_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "b16",
    description: "ViT-B/16",
    builder: VitConfig::b16,
};

/// `ResNet50` + `ViT-B/16`.
pub static VIT_R50_B16_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "r50_b16",
    description: "ResNet50 + ViT-B/16 hybrid",
    builder: VitConfig::r50_b16,
};

/// `ViT-B/32`.
pub static VIT_B32_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "b32",
    description: "ViT-B/32",
    builder: VitConfig::b32,
};

/// `ViT-L/16`.
pub static VIT_L16_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "l16",
    description: "ViT-L/16",
    builder: VitConfig::l16,
};

/// `ViT-L/32`.
pub static VIT_L32_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "l32",
    description: "ViT-L/32",
    builder: VitConfig::l32,
};

/// `ViT-H/14`.
pub static VIT_H14_PREFAB: StaticVitPreFabConfig = StaticVitPreFabConfig {
    name: "h14",
    description: "ViT-H/14",
    builder: VitConfig::h14,
};

/// Every `ViT` prefab.
pub static VIT_PREFABS: [&StaticVitPreFabConfig; 7] = [
    &VIT_TESTING_PREFAB,
    &VIT_B16_PREFAB,
    &VIT_R50_B16_PREFAB,
    &VIT_B32_PREFAB,
    &VIT_L16_PREFAB,
    &VIT_L32_PREFAB,
    &VIT_H14_PREFAB,
];

/// Look up a `ViT` prefab by name.
pub fn vit_prefab(name: &str) -> Option<VitPreFabConfig> {
    find_prefab(&VIT_PREFABS, name).map(StaticVitPreFabConfig::to_prefab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vit::PatchesConfig;
    use std::collections::HashSet;

    #[test]
    fn test_unique_names() {
        let names: HashSet<&str> = VIT_PREFABS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), VIT_PREFABS.len());
    }

    #[test]
    fn test_lookup() {
        let prefab = vit_prefab("r50_b16").unwrap();
        assert_eq!(prefab.name, "r50_b16");
        assert_eq!(prefab.new_config(), VitConfig::r50_b16());

        assert_eq!(vit_prefab("l32").unwrap().new_config(), VitConfig::l32());
        assert!(vit_prefab("g14").is_none());
    }

    #[test]
    fn test_edit_prefab() {
        let prefab = vit_prefab("b16")
            .unwrap()
            .map(|config| config.with_patches(PatchesConfig::Size([8, 8])));
        let config = prefab.new_config();
        assert_eq!(config.patches, PatchesConfig::Size([8, 8]));
        assert_eq!(config.hidden_size, 768);
    }
}
