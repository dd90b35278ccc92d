//! Least-squares B-spline image resizing.
//!
//! Re-exports the sample plane types and the resampling operations.

#[doc(inline)]
pub use sharp_image as image;

#[doc(inline)]
pub use sharp_imgproc as imgproc;
