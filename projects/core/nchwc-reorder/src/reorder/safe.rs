//! Safe slice-based reorder entry points.
//!
//! These wrappers validate the shape and both buffer sizes before any write, then
//! hand off to the pointer kernels. Validation failures leave the output untouched.

use crate::layout::ReorderShape;
use crate::parallel::ExecutionContext;
use nchwc_reorder_common::block_width::BlockWidth;
use thiserror::Error;

/// Validation errors for the reorder operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// The element count implied by the shape overflows `usize`.
    #[error("Invalid shape {batch_count}x{channels}x{height}x{width} (block width {block_width}): element count overflows usize")]
    InvalidShape {
        /// Number of batches.
        batch_count: usize,
        /// Number of channels, before padding.
        channels: usize,
        /// Spatial height.
        height: usize,
        /// Spatial width.
        width: usize,
        /// The block width the input buffer was sized with.
        block_width: usize,
    },

    /// The blocked input buffer is smaller than the shape implies.
    #[error("Input buffer too small: needed {needed} elements, got {actual}")]
    InputBufferTooSmall {
        /// The required element count.
        needed: usize,
        /// The actual element count provided.
        actual: usize,
    },

    /// The output buffer is smaller than the shape implies.
    #[error("Output buffer too small: needed {needed} elements, got {actual}")]
    OutputBufferTooSmall {
        /// The required element count.
        needed: usize,
        /// The actual element count provided.
        actual: usize,
    },
}

/// Checks shape arithmetic and buffer sizes; returns the required
/// `(input, output)` element counts on success.
pub(crate) fn validate(
    shape: &ReorderShape,
    block_width: BlockWidth,
    input_len: usize,
    output_len: usize,
) -> Result<(usize, usize), ReorderError> {
    let invalid_shape = || ReorderError::InvalidShape {
        batch_count: shape.batch_count,
        channels: shape.channels,
        height: shape.height,
        width: shape.width,
        block_width: block_width.get(),
    };

    let needed_input = shape.input_elements(block_width).ok_or_else(invalid_shape)?;
    let needed_output = shape.output_elements().ok_or_else(invalid_shape)?;

    if input_len < needed_input {
        return Err(ReorderError::InputBufferTooSmall {
            needed: needed_input,
            actual: input_len,
        });
    }

    if output_len < needed_output {
        return Err(ReorderError::OutputBufferTooSmall {
            needed: needed_output,
            actual: output_len,
        });
    }

    Ok((needed_input, needed_output))
}

/// Reorder a blocked-channel tensor into channel-major (NCHW) layout.
///
/// The first `shape.output_elements()` elements of `output` are fully overwritten;
/// nothing is read from `output`. Padding lanes of `input` are never read.
///
/// With [`ExecutionContext::Sequential`] the batches are processed in order on the
/// calling thread. A thread-pool context splits the work along the batch dimension
/// into disjoint per-batch slices; the result is identical either way.
///
/// # Parameters
///
/// - `input`: blocked-channel tensor, at least `shape.input_elements(block_width)` elements
/// - `output`: destination, at least `shape.output_elements()` elements
/// - `shape`: logical tensor extents
/// - `block_width`: lane count the producer blocked the input with
/// - `context`: where to run (sequential, or a rayon pool)
///
/// # Errors
///
/// - [`ReorderError::InvalidShape`] if the shape's element counts overflow
/// - [`ReorderError::InputBufferTooSmall`] / [`ReorderError::OutputBufferTooSmall`]
///   if a buffer is undersized
///
/// # Examples
///
/// ```
/// use nchwc_reorder::{reorder_nchw, BlockWidth, ExecutionContext};
/// use nchwc_reorder::layout::ReorderShape;
/// # use nchwc_reorder::ReorderError;
///
/// # fn main() -> Result<(), ReorderError> {
/// let shape = ReorderShape::new(1, 3, 2, 2);
/// let block_width = BlockWidth::new(4).unwrap();
///
/// // One batch, padded to 4 channels, 2x2 spatial.
/// let input = vec![0.0f32; shape.input_elements(block_width).unwrap()];
/// let mut output = vec![0.0f32; shape.output_elements().unwrap()];
///
/// reorder_nchw(&input, &mut output, &shape, block_width, ExecutionContext::Sequential)?;
/// # Ok(())
/// # }
/// ```
pub fn reorder_nchw(
    input: &[f32],
    output: &mut [f32],
    shape: &ReorderShape,
    block_width: BlockWidth,
    context: ExecutionContext,
) -> Result<(), ReorderError> {
    let (needed_input, needed_output) = validate(shape, block_width, input.len(), output.len())?;
    if needed_output == 0 {
        return Ok(());
    }

    // Only the shape-implied prefix of each buffer participates.
    let input = &input[..needed_input];
    let output = &mut output[..needed_output];

    match context {
        // Safety: buffer sizes validated above.
        ExecutionContext::Sequential => unsafe {
            super::reorder_nchw_unchecked(input.as_ptr(), output.as_mut_ptr(), shape, block_width);
        },
        #[cfg(feature = "multithreaded")]
        ExecutionContext::ThreadPool(pool) => {
            let spatial_size = shape.spatial_size();
            let input_stride = input.len() / shape.batch_count;
            let output_stride = output.len() / shape.batch_count;

            crate::parallel::par_for_each_batch(
                pool,
                input,
                output,
                input_stride,
                output_stride,
                |batch_input, batch_output| {
                    // Safety: the per-batch chunks are exactly one batch's worth of
                    // each buffer, and chunk lengths were validated above.
                    unsafe {
                        super::nchw::reorder_batch(
                            batch_input.as_ptr(),
                            batch_output.as_mut_ptr(),
                            shape.channels,
                            spatial_size,
                            block_width.get(),
                        );
                    }
                },
            );
        }
    }

    Ok(())
}

/// Reorder a blocked-channel tensor into channel-minor (NHWC) layout.
///
/// Same sizing contract as [`reorder_nchw`]; always runs on the calling thread.
///
/// # Errors
///
/// - [`ReorderError::InvalidShape`] if the shape's element counts overflow
/// - [`ReorderError::InputBufferTooSmall`] / [`ReorderError::OutputBufferTooSmall`]
///   if a buffer is undersized
///
/// # Examples
///
/// ```
/// use nchwc_reorder::{reorder_nhwc, BlockWidth};
/// use nchwc_reorder::layout::ReorderShape;
/// # use nchwc_reorder::ReorderError;
///
/// # fn main() -> Result<(), ReorderError> {
/// let shape = ReorderShape::new(1, 3, 2, 2);
/// let block_width = BlockWidth::new(4).unwrap();
///
/// let input = vec![0.0f32; shape.input_elements(block_width).unwrap()];
/// let mut output = vec![0.0f32; shape.output_elements().unwrap()];
///
/// reorder_nhwc(&input, &mut output, &shape, block_width)?;
/// # Ok(())
/// # }
/// ```
pub fn reorder_nhwc(
    input: &[f32],
    output: &mut [f32],
    shape: &ReorderShape,
    block_width: BlockWidth,
) -> Result<(), ReorderError> {
    let (_, needed_output) = validate(shape, block_width, input.len(), output.len())?;
    if needed_output == 0 {
        return Ok(());
    }

    // Safety: buffer sizes validated above.
    unsafe {
        super::reorder_nhwc_unchecked(input.as_ptr(), output.as_mut_ptr(), shape, block_width);
    }

    Ok(())
}
