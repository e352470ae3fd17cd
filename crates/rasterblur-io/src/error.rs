/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode or encode the image.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// Error to create the planar image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] rasterblur_image::ImageError),

    /// Error when the channel count has no interleaved pixel format.
    #[error("No pixel format with {0} channel(s) to encode to")]
    UnsupportedChannelCount(usize),
}
