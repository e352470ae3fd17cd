#![deny(missing_docs)]
//! Image types and traits for the rasterblur pipeline

/// planar image representation for the blur filters.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PlanarImage};
