//! # NCHWc Reorder Operations
//!
//! This module provides the reorder entry points that rewrite a blocked-channel
//! tensor into a standard external layout.
//!
//! ## Input Format
//!
//! All entry points expect the blocked-channel (NCHWc) layout:
//!
//! ### Blocked tensor (`input_ptr`)
//! - Type: `*const f32`
//! - `batch_count * padded_channels * height * width` elements, where
//!   `padded_channels` is the channel count rounded up to the block width
//! - Channels are grouped into blocks of the block width; per spatial position the
//!   block's lanes are contiguous:
//!   ```ignore
//!   offset(n, c, s) | n*padded_channels*spatial + (c - c%B)*spatial + s*B + c%B
//!   ```
//! - Lanes past the true channel count in the trailing block are padding and are
//!   never read
//!
//! ## Output Formats
//!
//! ### Channel-major (`reorder_nchw`)
//! - `batch_count * channels * height * width` elements
//! - `offset(n, c, s) = n*channels*spatial + c*spatial + s`
//!
//! ### Channel-minor (`reorder_nhwc`)
//! - Same element count
//! - `offset(n, c, s) = n*spatial*channels + s*channels + c`
//!
//! Every element of the shape-implied output range is written exactly once; none is
//! read back.

pub(crate) mod nchw;
pub(crate) mod nhwc;

pub(crate) mod safe;

pub use safe::{reorder_nchw, reorder_nhwc, ReorderError};

use crate::layout::ReorderShape;
use nchwc_reorder_common::block_width::BlockWidth;

/// Reorder a blocked-channel tensor into channel-major (NCHW) layout, sequentially,
/// using the best known kernel for the current CPU.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `shape.input_elements(block_width)` elements
/// - `output_ptr` must be valid for writes of `shape.output_elements()` elements
/// - both element counts must be computable without overflow (the corresponding
///   [`ReorderShape`] methods return `Some`)
#[inline]
pub unsafe fn reorder_nchw_unchecked(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    shape: &ReorderShape,
    block_width: BlockWidth,
) {
    let spatial_size = shape.spatial_size();
    let input_stride = shape.channels.next_multiple_of(block_width.get()) * spatial_size;
    let output_stride = shape.channels * spatial_size;

    for n in 0..shape.batch_count {
        nchw::reorder_batch(
            input_ptr.add(n * input_stride),
            output_ptr.add(n * output_stride),
            shape.channels,
            spatial_size,
            block_width.get(),
        );
    }
}

/// Reorder a blocked-channel tensor into channel-minor (NHWC) layout using the best
/// known kernel for the current CPU.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `shape.input_elements(block_width)` elements
/// - `output_ptr` must be valid for writes of `shape.output_elements()` elements
/// - both element counts must be computable without overflow (the corresponding
///   [`ReorderShape`] methods return `Some`)
#[inline]
pub unsafe fn reorder_nhwc_unchecked(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    shape: &ReorderShape,
    block_width: BlockWidth,
) {
    let spatial_size = shape.spatial_size();
    let input_stride = shape.channels.next_multiple_of(block_width.get()) * spatial_size;
    let output_stride = shape.channels * spatial_size;

    for n in 0..shape.batch_count {
        nhwc::reorder_batch(
            input_ptr.add(n * input_stride),
            output_ptr.add(n * output_stride),
            shape.channels,
            spatial_size,
            block_width.get(),
        );
    }
}
