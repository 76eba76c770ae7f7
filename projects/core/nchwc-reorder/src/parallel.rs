//! Execution contexts for the channel-major reorder.
//!
//! The channel-major entry point can split its work along the batch dimension. The
//! partitioning hands each worker exactly one batch's slice of the input and of the
//! output, obtained from `chunks_exact`, so worker output ranges are disjoint by
//! construction; no synchronization happens between them and the result does not
//! depend on completion order.

/// Where a reorder call runs.
///
/// The default is [`ExecutionContext::Sequential`], which is also what an absent
/// context means at call sites that thread one through.
#[cfg(feature = "multithreaded")]
#[derive(Debug, Clone, Copy, Default)]
pub enum ExecutionContext<'pool> {
    /// Process batches in order on the calling thread.
    #[default]
    Sequential,
    /// Split batches across the given rayon thread pool.
    ThreadPool(&'pool rayon::ThreadPool),
}

/// Where a reorder call runs.
///
/// Without the `multithreaded` feature only sequential execution exists.
#[cfg(not(feature = "multithreaded"))]
#[derive(Debug, Clone, Copy, Default)]
pub enum ExecutionContext {
    /// Process batches in order on the calling thread.
    #[default]
    Sequential,
}

/// Runs `per_batch` over per-batch chunk pairs of `input` and `output` on `pool`.
///
/// `input.len()` must equal `batch_count * input_stride` and `output.len()`
/// `batch_count * output_stride`; both strides must be non-zero.
#[cfg(feature = "multithreaded")]
pub(crate) fn par_for_each_batch<F>(
    pool: &rayon::ThreadPool,
    input: &[f32],
    output: &mut [f32],
    input_stride: usize,
    output_stride: usize,
    per_batch: F,
) where
    F: Fn(&[f32], &mut [f32]) + Sync,
{
    use rayon::prelude::*;

    debug_assert!(input_stride > 0 && output_stride > 0);
    debug_assert!(input.len() % input_stride == 0);
    debug_assert!(output.len() % output_stride == 0);
    debug_assert!(input.len() / input_stride == output.len() / output_stride);

    pool.install(|| {
        input
            .par_chunks_exact(input_stride)
            .zip(output.par_chunks_exact_mut(output_stride))
            .for_each(|(batch_input, batch_output)| per_batch(batch_input, batch_output));
    });
}
