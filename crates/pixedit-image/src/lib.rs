#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// RGB pixel value type.
pub mod pixel;

/// image representation as an immutable grid of pixels.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{Pixel, DEFAULT_MAX_VALUE, MAX_CHANNEL_VALUE};
