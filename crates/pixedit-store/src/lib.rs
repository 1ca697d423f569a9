#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the store.
pub mod error;

/// The named image store.
pub mod store;

pub use crate::error::StoreError;
pub use crate::store::{ImageStore, StoreEvent};
