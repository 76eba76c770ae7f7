//! Common test imports and utilities for reorder tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::layout::{blocked_offset, ReorderShape};
pub use crate::reference::{reference_reorder, OutputLayout};
pub use crate::{reorder_nchw, reorder_nhwc, BlockWidth, ExecutionContext, ReorderError};

#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use nchwc_reorder_common::cpu_detect::*;

// Re-export super for convenience in test modules
pub use super::*;

/// Sentinel seeded into padding lanes of generated blocked inputs; must never
/// surface in any output.
pub(crate) const PADDING_FILL: f32 = -999.0;

/// Sentinel that outputs are seeded with before a reorder, so untouched elements
/// are detectable.
pub(crate) const OUTPUT_FILL: f32 = -0.5;

/// Value of element `(n, c, s)` in generated inputs. Unique per element for the
/// shapes used in tests, and exactly representable in `f32`.
pub(crate) fn element_value(n: usize, c: usize, s: usize) -> f32 {
    (n * 100_000 + c * 100 + s) as f32
}

/// Builds a blocked-channel input for `shape`: live lanes carry [`element_value`],
/// padding lanes carry [`PADDING_FILL`].
pub(crate) fn generate_blocked_input(shape: &ReorderShape, block_width: BlockWidth) -> Vec<f32> {
    let mut data = vec![PADDING_FILL; shape.input_elements(block_width).unwrap()];
    for n in 0..shape.batch_count {
        for c in 0..shape.channels {
            for s in 0..shape.spatial_size() {
                data[blocked_offset(shape, block_width, n, c, s)] = element_value(n, c, s);
            }
        }
    }
    data
}

// ---------------------------------------
// Shared helpers for kernel-level tests
// ---------------------------------------

/// Common type for per-batch reorder kernels used across tests.
pub(crate) type BatchKernelFn = unsafe fn(*const f32, *mut f32, usize, usize, usize);

fn run_kernel_matches_reference(
    kernel: BatchKernelFn,
    shape: &ReorderShape,
    block_width: BlockWidth,
    layout: OutputLayout,
    impl_name: &str,
) {
    let input = generate_blocked_input(shape, block_width);
    let output_elements = shape.output_elements().unwrap();
    let spatial_size = shape.spatial_size();
    let input_stride = block_width.padded_channels(shape.channels).unwrap() * spatial_size;
    let output_stride = shape.channels * spatial_size;

    let mut expected = vec![OUTPUT_FILL; output_elements];
    reference_reorder(&input, &mut expected, shape, block_width, layout).unwrap();

    let mut output = vec![OUTPUT_FILL; output_elements];
    for n in 0..shape.batch_count {
        unsafe {
            kernel(
                input.as_ptr().add(n * input_stride),
                output.as_mut_ptr().add(n * output_stride),
                shape.channels,
                spatial_size,
                block_width.get(),
            );
        }
    }

    assert_eq!(
        expected, output,
        "{impl_name} produced different results than reference for {shape:?} at block width {}",
        block_width.get()
    );
}

/// Asserts a per-batch channel-major kernel matches the reference model exactly.
pub(crate) fn run_nchw_kernel_matches_reference(
    kernel: BatchKernelFn,
    shape: &ReorderShape,
    block_width: BlockWidth,
    impl_name: &str,
) {
    run_kernel_matches_reference(kernel, shape, block_width, OutputLayout::ChannelMajor, impl_name);
}

/// Asserts a per-batch channel-minor kernel matches the reference model exactly.
pub(crate) fn run_nhwc_kernel_matches_reference(
    kernel: BatchKernelFn,
    shape: &ReorderShape,
    block_width: BlockWidth,
    impl_name: &str,
) {
    run_kernel_matches_reference(kernel, shape, block_width, OutputLayout::ChannelMinor, impl_name);
}

#[test]
fn generated_input_places_values_per_blocked_formula() {
    // (1, 5, 2, 2) at width 4: first block interleaves channels 0..4 per spatial
    // position, channel 4 follows in the second block with padded lanes between.
    let shape = ReorderShape::new(1, 5, 2, 2);
    let data = generate_blocked_input(&shape, BlockWidth::new(4).unwrap());
    assert_eq!(data.len(), 32);
    assert_eq!(data[0], element_value(0, 0, 0));
    assert_eq!(data[3], element_value(0, 3, 0));
    assert_eq!(data[4], element_value(0, 0, 1));
    assert_eq!(data[16], element_value(0, 4, 0));
    assert_eq!(data[17], PADDING_FILL);
    assert_eq!(data[20], element_value(0, 4, 1));
}
