/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a supported extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The PPM data does not start with the `P3` magic token.
    #[error("Invalid PPM file: plain RAW file should begin with P3, found {0:?}")]
    InvalidMagic(String),

    /// A PPM token is not a valid integer.
    #[error("Invalid PPM file: expected an integer for the {0}, found {1:?}")]
    InvalidToken(&'static str, String),

    /// The PPM data ended before all the expected tokens were read.
    #[error("Invalid PPM file: unexpected end of data while reading the {0}")]
    UnexpectedEof(&'static str),

    /// The PPM max value is zero or too large.
    #[error("Invalid PPM file: max value must be in the range [1, 65535], found {0}")]
    InvalidMaxValue(u64),

    /// The PPM data is not valid UTF-8 text.
    #[error("Invalid PPM file: data is not valid text. {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pixedit_image::ImageError),

    /// Error to decode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[source] image::ImageError),

    /// Error to encode the image.
    #[error("Failed to encode the image. {0}")]
    ImageEncodeError(#[source] image::ImageError),
}

impl IoError {
    /// Whether the error comes from malformed PPM text.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IoError::InvalidMagic(_)
                | IoError::InvalidToken(..)
                | IoError::UnexpectedEof(_)
                | IoError::InvalidMaxValue(_)
                | IoError::InvalidUtf8(_)
        )
    }

    /// Whether the error comes from an unsupported file type or a failing binary codec.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(
            self,
            IoError::InvalidFileExtension(_)
                | IoError::ImageDecodeError(_)
                | IoError::ImageEncodeError(_)
        )
    }
}
