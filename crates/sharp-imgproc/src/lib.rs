#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// discrete integral and derivative pair used around the resampling convolution.
pub mod integral;

/// per-axis convolution tables.
pub mod kernel_table;

/// conversion between samples and B-spline interpolation coefficients.
pub mod prefilter;

/// 1D resampling along one axis.
pub mod resample;

/// utility functions for resizing images.
pub mod resize;

/// B-spline kernels.
pub mod spline;
