//! # `ViT` Config Records

use burn::config::Config;

/// How the input image is cut into patch tokens.
#[derive(Config, Debug, PartialEq, Eq)]
pub enum PatchesConfig {
    /// Fixed ``[height, width]`` patch size, in pixels.
    Size([usize; 2]),

    /// Fixed ``[rows, cols]`` patch grid, over backbone features.
    Grid([usize; 2]),
}

/// Which token the classifier head reads.
#[derive(Config, Debug, PartialEq, Eq)]
pub enum ClassifierType {
    /// A prepended class token.
    Token,

    /// Global average pooling over patch tokens.
    Gap,
}

/// [`VitConfig`] transformer stack settings.
#[derive(Config, Debug, PartialEq)]
pub struct VitTransformerConfig {
    /// Hidden width of each block's MLP.
    pub mlp_dim: usize,

    /// Attention heads per block.
    pub num_heads: usize,

    /// Number of blocks.
    pub num_layers: usize,

    /// Dropout on attention weights.
    #[config(default = 0.0)]
    pub attention_dropout_rate: f64,

    /// Dropout on block outputs.
    #[config(default = 0.1)]
    pub dropout_rate: f64,
}

/// Hybrid `ResNet` backbone settings.
#[derive(Config, Debug, PartialEq)]
pub struct VitResNetConfig {
    /// Blocks per backbone stage.
    pub num_layers: Vec<usize>,

    /// Channel width multiplier.
    #[config(default = 1)]
    pub width_factor: usize,
}

/// Vision Transformer architecture Config.
#[derive(Config, Debug, PartialEq)]
pub struct VitConfig {
    /// Patch tokenization.
    pub patches: PatchesConfig,

    /// Token embedding width.
    pub hidden_size: usize,

    /// Transformer stack.
    pub transformer: VitTransformerConfig,

    /// Classifier head input.
    #[config(default = "ClassifierType::Token")]
    pub classifier: ClassifierType,

    /// Optional pre-logits representation width.
    pub representation_size: Option<usize>,

    /// Optional hybrid backbone; set for grid-patched configs.
    pub resnet: Option<VitResNetConfig>,
}

impl VitConfig {
    /// A minimal config, for tests.
    pub fn testing() -> Self {
        Self::new(
            PatchesConfig::Size([16, 16]),
            1,
            VitTransformerConfig::new(1, 1, 1),
        )
    }

    /// `ViT-B/16`.
    pub fn b16() -> Self {
        Self::new(
            PatchesConfig::Size([16, 16]),
            768,
            VitTransformerConfig::new(3072, 12, 12),
        )
    }

    /// `ResNet50` + `ViT-B/16` hybrid.
    pub fn r50_b16() -> Self {
        Self::b16()
            .with_patches(PatchesConfig::Grid([14, 14]))
            .with_resnet(Some(VitResNetConfig::new(vec![3, 4, 9])))
    }

    /// `ViT-B/32`.
    pub fn b32() -> Self {
        Self::b16().with_patches(PatchesConfig::Size([32, 32]))
    }

    /// `ViT-L/16`.
    pub fn l16() -> Self {
        Self::new(
            PatchesConfig::Size([16, 16]),
            1024,
            VitTransformerConfig::new(4096, 16, 24),
        )
    }

    /// `ViT-L/32`.
    pub fn l32() -> Self {
        Self::l16().with_patches(PatchesConfig::Size([32, 32]))
    }

    /// `ViT-H/14`.
    pub fn h14() -> Self {
        Self::new(
            PatchesConfig::Size([14, 14]),
            1280,
            VitTransformerConfig::new(5120, 16, 32),
        )
    }

    /// Replace the patch tokenization.
    pub fn with_patches(
        self,
        patches: PatchesConfig,
    ) -> Self {
        Self { patches, ..self }
    }

    /// The per-head attention width.
    pub fn head_dim(&self) -> usize {
        self.hidden_size / self.transformer.num_heads
    }
}
