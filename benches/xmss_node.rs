use crate::bench_utils::Setup;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spx_xmss::{xmss_node, ParameterSet, SelectedParams, Xmss};


static ALG_NAME: &str = "node";

fn node_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("XMSS_{}", ALG_NAME));
    group.sample_size(10);

    let Setup {
        sk_seed,
        pk_seed,
        adrs,
        ..
    } = Setup::random();
    let mut root = vec![0u8; SelectedParams::N];

    group.bench_function(
        BenchmarkId::new(ALG_NAME, SelectedParams::NAME),
        |b| {
            b.iter(|| {
                xmss_node::<SelectedParams>(
                    black_box(&mut root),
                    &sk_seed,
                    0,
                    SelectedParams::TREE_HEIGHT,
                    &pk_seed,
                    &adrs,
                )
            });
        },
    );

    // the hasher is keyed once, so this isolates the tree walk
    let xmss = Xmss::<SelectedParams>::new(&pk_seed);
    group.bench_function(
        BenchmarkId::new(format!("{}_keyed", ALG_NAME), SelectedParams::NAME),
        |b| {
            b.iter(|| {
                xmss.node(
                    black_box(&mut root),
                    &sk_seed,
                    0,
                    SelectedParams::TREE_HEIGHT,
                    &adrs,
                )
            });
        },
    );

    group.finish();
}

criterion_group!(benches, node_benchmarks);
criterion_main!(benches);
