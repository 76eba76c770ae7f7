//! The reference reorder model.
//!
//! A deliberately naive transcription of the layout formulas: three nested loops and
//! one offset computation per side, nothing else. It exists purely as ground truth
//! for the optimized kernels, which must match it bit-for-bit (the operation moves
//! data without arithmetic, so equality is exact, never tolerance-based). Keep it
//! this simple; its value is that its correctness is evident by inspection.

use crate::layout::{blocked_offset, channel_major_offset, channel_minor_offset, ReorderShape};
use crate::reorder::ReorderError;
use nchwc_reorder_common::block_width::BlockWidth;

/// Which external layout the reorder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputLayout {
    /// Channel-major (NCHW): channel before spatial position.
    ChannelMajor,
    /// Channel-minor (NHWC): spatial position before channel.
    ChannelMinor,
}

/// Reorders `input` into `output` one element at a time, straight from the layout
/// formulas.
///
/// Same validation and sizing contract as the optimized entry points.
///
/// # Errors
///
/// - [`ReorderError::InvalidShape`] if the shape's element counts overflow
/// - [`ReorderError::InputBufferTooSmall`] / [`ReorderError::OutputBufferTooSmall`]
///   if a buffer is undersized
pub fn reference_reorder(
    input: &[f32],
    output: &mut [f32],
    shape: &ReorderShape,
    block_width: BlockWidth,
    layout: OutputLayout,
) -> Result<(), ReorderError> {
    crate::reorder::safe::validate(shape, block_width, input.len(), output.len())?;

    for n in 0..shape.batch_count {
        for c in 0..shape.channels {
            for s in 0..shape.spatial_size() {
                let src = blocked_offset(shape, block_width, n, c, s);
                let dst = match layout {
                    OutputLayout::ChannelMajor => channel_major_offset(shape, n, c, s),
                    OutputLayout::ChannelMinor => channel_minor_offset(shape, n, c, s),
                };
                output[dst] = input[src];
            }
        }
    }

    Ok(())
}
