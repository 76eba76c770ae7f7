use super::portable32;
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use likely_stable::unlikely;

/// AVX2 implementation for block width 8: each full channel block is a
/// `spatial_size x 8` matrix transposed into eight channel rows with 8x8 register
/// transposes, eight spatial positions per iteration.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `padded_channels * spatial_size` elements
/// - `output_ptr` must be valid for writes of `channels * spatial_size` elements
/// - `block_width` must be 8
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn transpose8_reorder_batch(
    input_ptr: *const f32,
    output_ptr: *mut f32,
    channels: usize,
    spatial_size: usize,
    block_width: usize,
) {
    debug_assert!(block_width == 8);

    let full_blocks = channels / 8;
    let spatial_aligned = spatial_size - (spatial_size % 8);

    for block in 0..full_blocks {
        let channel_base = block * 8;
        let src = input_ptr.add(channel_base * spatial_size);
        let rows: [*mut f32; 8] =
            core::array::from_fn(|lane| output_ptr.add((channel_base + lane) * spatial_size));

        let mut s = 0;
        while s < spatial_aligned {
            // Each load is one spatial position: lanes 0..8 of this block.
            let x0 = _mm256_loadu_ps(src.add(s * 8));
            let x1 = _mm256_loadu_ps(src.add((s + 1) * 8));
            let x2 = _mm256_loadu_ps(src.add((s + 2) * 8));
            let x3 = _mm256_loadu_ps(src.add((s + 3) * 8));
            let x4 = _mm256_loadu_ps(src.add((s + 4) * 8));
            let x5 = _mm256_loadu_ps(src.add((s + 5) * 8));
            let x6 = _mm256_loadu_ps(src.add((s + 6) * 8));
            let x7 = _mm256_loadu_ps(src.add((s + 7) * 8));

            // Interleave pairs of spatial positions within each 128-bit half.
            let t0 = _mm256_unpacklo_ps(x0, x1);
            let t1 = _mm256_unpackhi_ps(x0, x1);
            let t2 = _mm256_unpacklo_ps(x2, x3);
            let t3 = _mm256_unpackhi_ps(x2, x3);
            let t4 = _mm256_unpacklo_ps(x4, x5);
            let t5 = _mm256_unpackhi_ps(x4, x5);
            let t6 = _mm256_unpacklo_ps(x6, x7);
            let t7 = _mm256_unpackhi_ps(x6, x7);

            // Gather four spatial positions per lane, still split across halves.
            let u0 = _mm256_shuffle_ps(t0, t2, 0x44);
            let u1 = _mm256_shuffle_ps(t0, t2, 0xEE);
            let u2 = _mm256_shuffle_ps(t1, t3, 0x44);
            let u3 = _mm256_shuffle_ps(t1, t3, 0xEE);
            let u4 = _mm256_shuffle_ps(t4, t6, 0x44);
            let u5 = _mm256_shuffle_ps(t4, t6, 0xEE);
            let u6 = _mm256_shuffle_ps(t5, t7, 0x44);
            let u7 = _mm256_shuffle_ps(t5, t7, 0xEE);

            // Merge 128-bit halves: low halves give lanes 0..4, high halves lanes 4..8.
            _mm256_storeu_ps(rows[0].add(s), _mm256_permute2f128_ps(u0, u4, 0x20));
            _mm256_storeu_ps(rows[1].add(s), _mm256_permute2f128_ps(u1, u5, 0x20));
            _mm256_storeu_ps(rows[2].add(s), _mm256_permute2f128_ps(u2, u6, 0x20));
            _mm256_storeu_ps(rows[3].add(s), _mm256_permute2f128_ps(u3, u7, 0x20));
            _mm256_storeu_ps(rows[4].add(s), _mm256_permute2f128_ps(u0, u4, 0x31));
            _mm256_storeu_ps(rows[5].add(s), _mm256_permute2f128_ps(u1, u5, 0x31));
            _mm256_storeu_ps(rows[6].add(s), _mm256_permute2f128_ps(u2, u6, 0x31));
            _mm256_storeu_ps(rows[7].add(s), _mm256_permute2f128_ps(u3, u7, 0x31));
            s += 8;
        }

        // Spatial tail, one position at a time.
        while s < spatial_size {
            for (lane, row) in rows.iter().enumerate() {
                *row.add(s) = *src.add(s * 8 + lane);
            }
            s += 1;
        }
    }

    // Partial trailing block (channels not a multiple of the block width).
    let channel_base = full_blocks * 8;
    if unlikely(channel_base < channels) {
        portable32::reorder_batch(
            input_ptr.add(channel_base * spatial_size),
            output_ptr.add(channel_base * spatial_size),
            channels - channel_base,
            spatial_size,
            8,
        );
    }
}
