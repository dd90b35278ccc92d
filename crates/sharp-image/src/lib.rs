#![deny(missing_docs)]
//! Real-valued sample planes and channel collections for image resampling

/// sample plane representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// conversions between interleaved pixel data and sample planes.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{ImagePlanes, ImageSize, SamplePlane};
