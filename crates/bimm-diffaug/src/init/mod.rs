//! # Weight Initializers

pub mod special;
pub mod trunc_normal;

pub use trunc_normal::{TruncNormal, trunc_normal};
