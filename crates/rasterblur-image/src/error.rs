/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an image is created with zero channels.
    #[error("Image must have at least one channel")]
    InvalidChannelCount,

    /// Error when a channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for an image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a kernel size cannot produce a centered odd kernel.
    #[error("Kernel size must be odd and at least 3, got {0}")]
    InvalidKernelSize(usize),

    /// Error when source and destination image sizes disagree.
    #[error("Image size mismatch: source is {0}x{1} but destination is {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when source and destination channel counts disagree.
    #[error("Channel count mismatch: source has {0} channels but destination has {1}")]
    ChannelCountMismatch(usize, usize),

    /// Error when an operation is requested on an image with no pixels.
    #[error("Image has no pixels")]
    EmptyImage,
}
