#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image enhancement module.
pub mod enhance;

/// Error types for parsing operations.
pub mod error;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// compute image histogram module.
pub mod histogram;

/// editing operations as values.
pub mod operation;

/// module containing parallization utilities.
pub mod parallel;

pub use crate::error::OperationError;
pub use crate::operation::Operation;
