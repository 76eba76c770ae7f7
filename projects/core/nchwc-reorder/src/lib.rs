#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod layout;
pub mod parallel;
pub mod reference;

pub(crate) mod reorder;

// Re-export main types and functions from the reorder module
pub use reorder::*;

pub use parallel::ExecutionContext;

// Re-export BlockWidth for convenience
pub use nchwc_reorder_common::block_width::BlockWidth;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
