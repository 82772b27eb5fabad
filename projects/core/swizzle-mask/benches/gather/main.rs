use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};
use swizzle_mask::{gather, swizzle, try_gather, Axis, Mask3D, PackedMask, PairMask};

const ZXZ: PairMask<3, 3> = PairMask::from_raw(0x22);

// Every canonical 3D -> 4D mask, cycled through so the decode can't be hoisted.
fn generate_masks() -> Vec<PackedMask> {
    let axes = [Axis::X, Axis::Y, Axis::Z];
    let mut masks = Vec::with_capacity(81);
    for x in axes {
        for y in axes {
            for z in axes {
                for w in axes {
                    masks.push(PackedMask::encode([x, y, z, w]));
                }
            }
        }
    }
    masks
}

fn manual_reorder(source: &[f32; 3]) -> [f32; 3] {
    [source[2], source[0], source[2]]
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Swizzle Gather");
    let source = [1.0f32, 2.0, 3.0];

    group.bench_function("manual_reorder", |b| {
        b.iter(|| manual_reorder(black_box(&source)))
    });

    group.bench_function("gather_fixed_mask", |b| {
        let mask = Mask3D::new(Axis::Z, Axis::X, Axis::Z).to_mask();
        b.iter(|| {
            let result: [f32; 3] = gather(black_box(&source), black_box(mask));
            result
        })
    });

    group.bench_function("swizzle_pair_mask", |b| {
        b.iter(|| {
            let result: [f32; 3] = swizzle(black_box(&source), black_box(ZXZ));
            result
        })
    });

    let masks = generate_masks();
    for validated in [false, true] {
        let name = if validated { "try_gather" } else { "gather" };
        group.bench_with_input(
            BenchmarkId::new(name, masks.len()),
            &masks,
            |b, masks| {
                b.iter(|| {
                    let mut sum = 0.0f32;
                    for mask in masks {
                        let result: [f32; 4] = if validated {
                            try_gather(black_box(&source), *mask).unwrap_or_default()
                        } else {
                            gather(black_box(&source), *mask)
                        };
                        sum += result.iter().sum::<f32>();
                    }
                    sum
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
