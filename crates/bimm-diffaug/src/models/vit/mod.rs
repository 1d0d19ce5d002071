//! # Vision Transformer (`ViT`) Configuration
//!
//! Architecture records for the `ViT` backbone family, and named prefabs for
//! the well-known sizes:
//!
//! | prefab     | patches     | hidden | mlp  | heads | layers |
//! |------------|-------------|--------|------|-------|--------|
//! | `testing`  | size 16x16  | 1      | 1    | 1     | 1      |
//! | `b16`      | size 16x16  | 768    | 3072 | 12    | 12     |
//! | `r50_b16`  | grid 14x14  | 768    | 3072 | 12    | 12     |
//! | `b32`      | size 32x32  | 768    | 3072 | 12    | 12     |
//! | `l16`      | size 16x16  | 1024   | 4096 | 16    | 24     |
//! | `l32`      | size 32x32  | 1024   | 4096 | 16    | 24     |
//! | `h14`      | size 14x14  | 1280   | 5120 | 16    | 32     |
//!
//! `r50_b16` adds a `ResNet` stem with ``(3, 4, 9)`` layers.

pub mod config;
pub mod prefabs;

pub use config::*;
