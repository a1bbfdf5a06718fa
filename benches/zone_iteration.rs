use criterion::{Criterion, criterion_group, criterion_main};
use denominator::{MockZoneApi, ZoneApi, ZoneStore};
use std::hint::black_box;
use std::sync::Arc;

fn populated_api(zones: usize) -> MockZoneApi {
    let api = MockZoneApi::new(Arc::new(ZoneStore::new())).expect("fresh store");
    for i in 0..zones {
        api.create(&format!("zone{:05}.example.", i))
            .expect("unique zone name");
    }
    api
}

fn bench_iteration(c: &mut Criterion) {
    let api = populated_api(1000);

    c.bench_function("iterate 1000 zones", |b| {
        b.iter(|| black_box(api.iter().count()));
    });

    c.bench_function("iterate by name among 1000 zones", |b| {
        b.iter(|| black_box(api.iter_by_name(black_box("zone00500.example.")).count()));
    });
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("create 100 zones", |b| {
        b.iter(|| black_box(populated_api(100)));
    });
}

criterion_group!(benches, bench_iteration, bench_create);
criterion_main!(benches);
