mod generic;
mod portable32;

/// Reorder one batch of a blocked-channel tensor into channel-minor layout using the
/// best known implementation for the current CPU.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `padded_channels * spatial_size` elements
/// - `output_ptr` must be valid for writes of `channels * spatial_size` elements
/// - `block_width` must be non-zero
#[inline]
pub(crate) unsafe fn reorder_batch(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    channels: usize,
    spatial_size: usize,
    block_width: usize,
) {
    debug_assert!(block_width > 0);

    // Width-1 blocks degenerate to single-element runs; the scalar loop beats a
    // per-element memcpy.
    if block_width == 1 {
        portable32::reorder_batch(input_ptr, output_ptr, channels, spatial_size, 1);
        return;
    }

    generic::reorder_batch(input_ptr, output_ptr, channels, spatial_size, block_width)
}
