use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_core::RngCore;
use secrand_rng::{BufferDescriptor, RandomFillService, SubsystemRng};

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let service = RandomFillService::global();

    // UUID-sized payload, the high-frequency case.
    group.bench_function("fill-16", |b| {
        let mut buf = [0u8; 16];
        b.iter(|| service.fill_slice(black_box(&mut buf)).unwrap())
    });

    group.bench_function("fill-256", |b| {
        let mut buf = [0u8; 256];
        b.iter(|| service.fill_slice(black_box(&mut buf)).unwrap())
    });

    group.bench_function("fill-4096", |b| {
        let mut buf = [0u8; 4096];
        b.iter(|| service.fill_slice(black_box(&mut buf)).unwrap())
    });

    group.bench_function("fill-descriptor-16", |b| {
        let mut buf = [0u8; 16];
        b.iter(|| {
            service
                .fill(BufferDescriptor::from(black_box(&mut buf[..])))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter");

    group.bench_function("next-u64", |b| {
        let mut rng = SubsystemRng;
        b.iter(|| black_box(rng.next_u64()))
    });

    group.finish();
}

criterion_group!(benches, bench_fill, bench_adapter);
criterion_main!(benches);
