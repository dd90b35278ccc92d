/// An error type for sample planes and the resampling operations built on them.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when a plane or target dimension is zero.
    #[error("Invalid image size: width ({0}) and height ({1}) must be positive")]
    InvalidImageSize(usize, usize),

    /// Error when a 1D resampling axis has a zero input or output length.
    #[error("Invalid axis length: input ({0}) and output ({1}) must be positive")]
    InvalidAxisLength(usize, usize),

    /// Error when the data length does not match the plane size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two planes of one collection have different sizes.
    #[error("Plane sizes do not match: expected {0}x{1}, got {2}x{3}")]
    PlaneSizeMismatch(usize, usize, usize, usize),

    /// Error when a channel collection holds no planes.
    #[error("Channel collection is empty")]
    EmptyPlanes,

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1} channels)")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value cannot be cast to the requested type.
    #[error("Failed to cast pixel value to {0}")]
    CastError(String),
}
