//! # Model Family Configuration

pub mod vit;
