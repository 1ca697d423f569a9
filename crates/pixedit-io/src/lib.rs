#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, PPM parsing and encoding/decoding
/// failures of the other formats.
pub mod error;

/// Plain-text PPM ("P3") encoding and decoding.
pub mod ppm;

/// Encoding and decoding of the binary formats supported by the `image` crate.
pub mod codec;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image`] and [`functional::write_image`], which pick the codec from
/// the file extension.
pub mod functional;

pub use crate::error::IoError;
