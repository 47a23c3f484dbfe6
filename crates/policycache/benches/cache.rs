use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use policycache::{Cache, DynCache, PolicyKind};

const KINDS: [PolicyKind; 4] = [
    PolicyKind::Fifo,
    PolicyKind::Lru,
    PolicyKind::Lifo,
    PolicyKind::Random,
];

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    for kind in KINDS {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let cache: DynCache<u64, Vec<u8>> = Cache::with_kind(1000, kind).unwrap();
            let data = vec![b'x'; 1024];

            for id in 0..100u64 {
                cache.set(id, data.clone());
            }

            let mut counter = 0u64;
            b.iter(|| {
                black_box(cache.get(&(counter % 100)));
                counter += 1;
            });
        });
    }

    group.finish();
}

fn bench_set_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_evicting");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    for kind in KINDS {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            // Small cache so nearly every insert evicts
            let cache: DynCache<u64, u64> = Cache::with_kind(64, kind).unwrap();

            let mut counter = 0u64;
            b.iter(|| {
                black_box(cache.set(counter, counter));
                counter += 1;
            });
        });
    }

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write_lru", |b| {
        let cache: DynCache<u64, u64> = Cache::with_kind(1000, PolicyKind::Lru).unwrap();

        for id in 0..100u64 {
            cache.set(id, id);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 100)));
            } else {
                black_box(cache.set(counter % 2000, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_set_evicting, bench_mixed_50_50);
criterion_main!(benches);
