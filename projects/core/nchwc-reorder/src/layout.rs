//! Tensor shapes and the offset arithmetic shared by every reorder path.
//!
//! The three layouts are defined entirely by the offset functions in this module:
//!
//! - [`blocked_offset`]: the NCHWc input layout. Channels are grouped into blocks of
//!   the block width `B`; within a block the `B` channel lanes sit at stride 1, and
//!   whole blocks are laid out contiguously per spatial position in block-major order.
//! - [`channel_major_offset`]: standard NCHW output, channel before spatial.
//! - [`channel_minor_offset`]: standard NHWC output, spatial before channel.
//!
//! The functions are pure and allocation-free so they can be unit-tested without any
//! buffer. For every valid shape the mapping from `(n, c, s)` to an output offset is a
//! bijection onto `[0, batch_count * channels * spatial_size)`; the optimized kernels
//! are tested against the reference transcription of these formulas bit-for-bit.

use nchwc_reorder_common::block_width::BlockWidth;

/// Shape of a 4-D activation tensor, in logical (unpadded) extents.
///
/// The layout of the buffers a shape describes is chosen by the reorder entry point
/// invoked with it, not by field order; `channels` is the true channel count, never
/// the padded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReorderShape {
    /// Number of batches (`N`).
    pub batch_count: usize,
    /// Number of channels (`C`), before padding to the block width.
    pub channels: usize,
    /// Spatial height (`H`).
    pub height: usize,
    /// Spatial width (`W`).
    pub width: usize,
}

impl ReorderShape {
    /// Creates a shape from its four extents.
    pub const fn new(batch_count: usize, channels: usize, height: usize, width: usize) -> Self {
        Self {
            batch_count,
            channels,
            height,
            width,
        }
    }

    /// Height × width.
    ///
    /// Unchecked; validated entry points call [`Self::output_elements`] first, which
    /// rejects shapes whose products overflow.
    #[inline]
    pub const fn spatial_size(&self) -> usize {
        self.height * self.width
    }

    /// Element count of an output buffer for this shape (either ordering):
    /// `batch_count * channels * spatial_size`. Returns [`None`] on overflow.
    pub fn output_elements(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)?
            .checked_mul(self.channels)?
            .checked_mul(self.batch_count)
    }

    /// Element count of a blocked input buffer for this shape:
    /// `batch_count * padded_channels * spatial_size`. Returns [`None`] on overflow.
    pub fn input_elements(&self, block_width: BlockWidth) -> Option<usize> {
        let padded_channels = block_width.padded_channels(self.channels)?;
        self.height
            .checked_mul(self.width)?
            .checked_mul(padded_channels)?
            .checked_mul(self.batch_count)
    }
}

/// Flat offset of element `(n, c, s)` in the blocked-channel input layout.
///
/// `s` is the flattened spatial position `h * width + w`. The shape's element counts
/// must not overflow (see [`ReorderShape::input_elements`]).
#[inline]
pub fn blocked_offset(
    shape: &ReorderShape,
    block_width: BlockWidth,
    n: usize,
    c: usize,
    s: usize,
) -> usize {
    debug_assert!(n < shape.batch_count);
    debug_assert!(c < shape.channels);
    debug_assert!(s < shape.spatial_size());

    let width = block_width.get();
    let padded_channels = shape.channels.next_multiple_of(width);
    let spatial_size = shape.spatial_size();

    n * padded_channels * spatial_size + (c - c % width) * spatial_size + s * width + c % width
}

/// Flat offset of element `(n, c, s)` in the channel-major (NCHW) output layout.
#[inline]
pub fn channel_major_offset(shape: &ReorderShape, n: usize, c: usize, s: usize) -> usize {
    debug_assert!(n < shape.batch_count);
    debug_assert!(c < shape.channels);
    debug_assert!(s < shape.spatial_size());

    n * shape.channels * shape.spatial_size() + c * shape.spatial_size() + s
}

/// Flat offset of element `(n, c, s)` in the channel-minor (NHWC) output layout.
#[inline]
pub fn channel_minor_offset(shape: &ReorderShape, n: usize, c: usize, s: usize) -> usize {
    debug_assert!(n < shape.batch_count);
    debug_assert!(c < shape.channels);
    debug_assert!(s < shape.spatial_size());

    n * shape.spatial_size() * shape.channels + s * shape.channels + c
}
