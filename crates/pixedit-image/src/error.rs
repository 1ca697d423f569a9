/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// A channel value lies outside `[0, max_value]`.
    #[error("Channel value {0} is outside of the valid range [0, {1}]")]
    InvalidChannelValue(i32, i32),

    /// The maximum channel value is not representable.
    #[error("Max channel value {0} must be in the range [1, 65535]")]
    InvalidMaxValue(i32),

    /// Error when the image has a zero dimension.
    #[error("Image size must be non-zero, got width {0} and height {1}")]
    InvalidImageSize(usize, usize),

    /// Error when the pixel data does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the rows passed to the image do not have the same length.
    #[error("Row {0} has {1} pixels, expected {2}")]
    RaggedRows(usize, usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelOutOfBounds(usize, usize, usize, usize),
}
