use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, Criterion};
use nchwc_reorder::layout::ReorderShape;
use nchwc_reorder::reference::{reference_reorder, OutputLayout};
use nchwc_reorder::{reorder_nhwc, BlockWidth};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn allocate_f32(num_elements: usize) -> RawAlloc {
    allocate_align_64(num_elements * core::mem::size_of::<f32>())
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reorder NCHWc -> NHWC");

    // A mid-size activation tensor: 4 batches, 64 channels, 104x104 spatial.
    let shape = ReorderShape::new(4, 64, 104, 104);

    for block_width in [4usize, 8usize] {
        let block_width = BlockWidth::new(block_width).unwrap();
        let input_elements = shape.input_elements(block_width).unwrap();
        let output_elements = shape.output_elements().unwrap();

        let mut input = allocate_f32(input_elements);
        let mut output = allocate_f32(output_elements);

        unsafe {
            let input_ptr = input.as_mut_ptr() as *mut f32;
            for i in 0..input_elements {
                *input_ptr.add(i) = (i % 251) as f32;
            }
        }

        let input_slice =
            unsafe { core::slice::from_raw_parts(input.as_ptr() as *const f32, input_elements) };
        let output_slice = unsafe {
            core::slice::from_raw_parts_mut(output.as_mut_ptr() as *mut f32, output_elements)
        };

        group.throughput(criterion::Throughput::Bytes(
            (output_elements * core::mem::size_of::<f32>()) as u64,
        ));

        group.bench_function(format!("reorder_nhwc (block width {})", block_width.get()), |b| {
            b.iter(|| {
                reorder_nhwc(input_slice, output_slice, &shape, block_width).unwrap();
            })
        });

        group.bench_function(
            format!("reference (block width {})", block_width.get()),
            |b| {
                b.iter(|| {
                    reference_reorder(
                        input_slice,
                        output_slice,
                        &shape,
                        block_width,
                        OutputLayout::ChannelMinor,
                    )
                    .unwrap();
                })
            },
        );
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
