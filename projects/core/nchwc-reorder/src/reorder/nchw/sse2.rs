use super::portable32;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use likely_stable::unlikely;

/// SSE2 implementation for block width 4: each full channel block is a
/// `spatial_size x 4` matrix transposed into four channel rows with 4x4 register
/// transposes, four spatial positions per iteration.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `padded_channels * spatial_size` elements
/// - `output_ptr` must be valid for writes of `channels * spatial_size` elements
/// - `block_width` must be 4
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn transpose4_reorder_batch(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    channels: usize,
    spatial_size: usize,
    block_width: usize,
) {
    debug_assert!(block_width == 4);

    let full_blocks = channels / 4;
    let spatial_aligned = spatial_size - (spatial_size % 4);

    for block in 0..full_blocks {
        let channel_base = block * 4;
        let src = input_ptr.add(channel_base * spatial_size);
        let out0 = output_ptr.add(channel_base * spatial_size);
        let out1 = out0.add(spatial_size);
        let out2 = out1.add(spatial_size);
        let out3 = out2.add(spatial_size);

        let mut s = 0;
        while s < spatial_aligned {
            // Each load is one spatial position: lanes 0..4 of this block.
            let x0 = _mm_loadu_ps(src.add(s * 4));
            let x1 = _mm_loadu_ps(src.add((s + 1) * 4));
            let x2 = _mm_loadu_ps(src.add((s + 2) * 4));
            let x3 = _mm_loadu_ps(src.add((s + 3) * 4));

            let t0 = _mm_unpacklo_ps(x0, x1); // lane0 s0 s1 | lane1 s0 s1
            let t1 = _mm_unpacklo_ps(x2, x3); // lane0 s2 s3 | lane1 s2 s3
            let t2 = _mm_unpackhi_ps(x0, x1); // lane2 s0 s1 | lane3 s0 s1
            let t3 = _mm_unpackhi_ps(x2, x3); // lane2 s2 s3 | lane3 s2 s3

            _mm_storeu_ps(out0.add(s), _mm_movelh_ps(t0, t1));
            _mm_storeu_ps(out1.add(s), _mm_movehl_ps(t1, t0));
            _mm_storeu_ps(out2.add(s), _mm_movelh_ps(t2, t3));
            _mm_storeu_ps(out3.add(s), _mm_movehl_ps(t3, t2));
            s += 4;
        }

        // Spatial tail, one position at a time.
        while s < spatial_size {
            *out0.add(s) = *src.add(s * 4);
            *out1.add(s) = *src.add(s * 4 + 1);
            *out2.add(s) = *src.add(s * 4 + 2);
            *out3.add(s) = *src.add(s * 4 + 3);
            s += 1;
        }
    }

    // Partial trailing block (channels not a multiple of the block width).
    let channel_base = full_blocks * 4;
    if unlikely(channel_base < channels) {
        portable32::reorder_batch(
            input_ptr.add(channel_base * spatial_size),
            output_ptr.add(channel_base * spatial_size),
            channels - channel_base,
            spatial_size,
            4,
        );
    }
}
