use core::ptr::copy_nonoverlapping;
use multiversion::multiversion;

/// Channel-minor reorder as lane-run copies: per spatial position, one block's lanes
/// are contiguous in the source and land contiguously in the destination row, so the
/// whole operation is `copy_nonoverlapping` calls the compiler can widen per target.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `padded_channels * spatial_size` elements
/// - `output_ptr` must be valid for writes of `channels * spatial_size` elements
/// - `block_width` must be non-zero
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)] // improve register budget.
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
        let block_ptr = unsafe { input_ptr.add(channel_base * spatial_size) };
        let dst_column = unsafe { output_ptr.add(channel_base) };

        for s in 0..spatial_size {
            unsafe {
                copy_nonoverlapping(
                    block_ptr.add(s * block_width),
                    dst_column.add(s * channels),
                    lanes,
                );
            }
        }

        channel_base += block_width;
    }
}
