use crate::bench_utils::{random_leaf, Setup};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spx_xmss::{xmss_pk_from_sig, xmss_sign, ParameterSet, SelectedParams, XmssKeyPair};


static ALG_NAME: &str = "verify";

fn verify_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("XMSS_{}", ALG_NAME));
    group.sample_size(10);

    let setup = Setup::random();
    let idx = random_leaf();
    let mut sig = vec![0u8; SelectedParams::XMSS_BYTES];
    xmss_sign::<SelectedParams>(
        &mut sig,
        &setup.msg,
        &setup.sk_seed,
        idx,
        &setup.pk_seed,
        &setup.adrs,
    );
    let mut root = vec![0u8; SelectedParams::N];

    group.bench_function(
        BenchmarkId::new(format!("{}_root_from_sig", ALG_NAME), SelectedParams::NAME),
        |b| {
            b.iter(|| {
                xmss_pk_from_sig::<SelectedParams>(
                    black_box(&mut root),
                    idx,
                    &sig,
                    &setup.msg,
                    &setup.pk_seed,
                    &setup.adrs,
                )
            });
        },
    );

    let keypair =
        XmssKeyPair::<SelectedParams>::from_seeds(&setup.sk_seed, &setup.pk_seed, &setup.adrs)
            .expect("seeds have the parameter set length");
    let signature = keypair
        .sign(&setup.msg, idx)
        .expect("leaf index is in range");
    let public_key = keypair.public_key();

    group.bench_function(
        BenchmarkId::new(format!("{}_public_key", ALG_NAME), SelectedParams::NAME),
        |b| {
            b.iter(|| black_box(public_key.verify(idx, &setup.msg, &signature)));
        },
    );

    group.finish();
}

criterion_group!(benches, verify_benchmarks);
criterion_main!(benches);
