use pixedit_image::ImageError;
use pixedit_io::IoError;

/// An error type for the store module.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// No image is stored under the given name.
    #[error("Image not found: {0}")]
    NotFound(String),

    /// Error to read or write an image file.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error raised by an image operation.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error to append a status line to the output sink.
    #[error("Failed to write to the output sink")]
    Sink(#[from] std::fmt::Error),
}
