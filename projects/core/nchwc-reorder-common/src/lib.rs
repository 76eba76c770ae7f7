#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod allocate;
pub mod block_width;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub mod cpu_detect;
