//! Filter operations
//!
//! This module provides the fixed-shape convolution filters of the editor.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
