/// # Safety
///
/// - `input_ptr` must be valid for reads of `padded_channels * spatial_size` elements
/// - `output_ptr` must be valid for writes of `channels * spatial_size` elements
/// - `block_width` must be non-zero
pub(crate) unsafe fn reorder_batch(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    channels: usize,
    spatial_size: usize,
    block_width: usize,
) {
    debug_assert!(block_width > 0);

    let mut channel_base = 0;
    while channel_base < channels {
        let lanes = block_width.min(channels - channel_base);
        let block_ptr = input_ptr.add(channel_base * spatial_size);

        for s in 0..spatial_size {
            let src = block_ptr.add(s * block_width);
            let dst = output_ptr.add(s * channels + channel_base);

            for lane in 0..lanes {
                *dst.add(lane) = *src.add(lane);
            }
        }

        channel_base += block_width;
    }
}
