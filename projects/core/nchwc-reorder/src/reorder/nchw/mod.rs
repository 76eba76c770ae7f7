mod portable32;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod avx2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn reorder_batch_x86(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    channels: usize,
    spatial_size: usize,
    block_width: usize,
) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        if block_width == 8 && nchwc_reorder_common::cpu_detect::has_avx2() {
            avx2::transpose8_reorder_batch(
                input_ptr,
                output_ptr,
                channels,
                spatial_size,
                block_width,
            );
            return;
        }

        if block_width == 4 && nchwc_reorder_common::cpu_detect::has_sse2() {
            sse2::transpose4_reorder_batch(
                input_ptr,
                output_ptr,
                channels,
                spatial_size,
                block_width,
            );
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if block_width == 8 && cfg!(target_feature = "avx2") {
            avx2::transpose8_reorder_batch(
                input_ptr,
                output_ptr,
                channels,
                spatial_size,
                block_width,
            );
            return;
        }

        if block_width == 4 && cfg!(target_feature = "sse2") {
            sse2::transpose4_reorder_batch(
                input_ptr,
                output_ptr,
                channels,
                spatial_size,
                block_width,
            );
            return;
        }
    }

    // Fallback to portable implementation
    portable32::reorder_batch(input_ptr, output_ptr, channels, spatial_size, block_width)
}

/// Reorder one batch of a blocked-channel tensor into channel-major layout using the
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

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        reorder_batch_x86(input_ptr, output_ptr, channels, spatial_size, block_width)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable32::reorder_batch(input_ptr, output_ptr, channels, spatial_size, block_width)
    }
}
