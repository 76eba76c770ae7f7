//! The block width capability value.
//!
//! Blocked-channel ("NCHWc") tensors interleave a fixed number of channel lanes at
//! the innermost stride; that lane count is the *block width*. Producers pick it to
//! match the platform's vector width in `f32` elements, and every reorder call takes
//! it as an explicit parameter rather than reading a process-wide global, so the
//! kernels can be tested with synthetic widths regardless of the host CPU.

use core::num::NonZeroUsize;

/// Number of channel lanes interleaved per block in a blocked-channel tensor.
///
/// Always non-zero. Usually a small power of two (the platform `f32` vector width),
/// but the reorder arithmetic does not require that; any non-zero width is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockWidth(NonZeroUsize);

impl BlockWidth {
    /// Block width of one lane. Blocked layout with this width degenerates to a plain
    /// channel-major layout with no padding.
    pub const SCALAR: BlockWidth = BlockWidth(NonZeroUsize::MIN);

    /// Creates a block width of `width` lanes. Returns [`None`] if `width` is zero.
    pub const fn new(width: usize) -> Option<Self> {
        match NonZeroUsize::new(width) {
            Some(width) => Some(Self(width)),
            None => None,
        }
    }

    /// Returns the width in lanes.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the block width matching the current platform's `f32` vector width:
    /// 8 lanes with AVX2, 4 with SSE2, 1 otherwise.
    ///
    /// This is a convenience for callers interoperating with producers that block to
    /// the native vector width; nothing in the reorder kernels requires the native value.
    pub fn native() -> Self {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        let width = native_width_x86();

        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
        let width = 1;

        match Self::new(width) {
            Some(width) => width,
            None => Self::SCALAR,
        }
    }

    /// Rounds `channels` up to the next multiple of this block width, the channel
    /// extent actually occupied in a blocked input buffer.
    ///
    /// Returns [`None`] on overflow.
    #[inline]
    pub fn padded_channels(self, channels: usize) -> Option<usize> {
        channels.checked_next_multiple_of(self.0.get())
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline]
fn native_width_x86() -> usize {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        if crate::cpu_detect::has_avx2() {
            return 8;
        }

        if crate::cpu_detect::has_sse2() {
            return 4;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "avx2") {
            return 8;
        }

        if cfg!(target_feature = "sse2") {
            return 4;
        }
    }

    1
}
