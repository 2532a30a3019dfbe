use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polydist::{
    Discrete, GenericDistribution, NCChiSquared, NegativeBinomial, Normal, PiecewiseLinear,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn families() -> Vec<GenericDistribution> {
    vec![
        Normal::new(0.0, 1.0).unwrap().into(),
        NegativeBinomial::new(3.0, 0.4).unwrap().into(),
        NCChiSquared::new(4.0, 2.5).unwrap().into(),
        Discrete::new((1..=64).map(f64::from).collect()).unwrap().into(),
        PiecewiseLinear::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 2.0, 1.0, 0.0])
            .unwrap()
            .into(),
    ]
}

fn bench_sample_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_n");
    for dist in families() {
        group.bench_with_input(BenchmarkId::new(dist.family(), 1000), &dist, |b, dist| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| dist.sample_n(&mut rng, 1000));
        });
    }
    group.finish();
}

fn bench_pdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf");
    let xs: Vec<f64> = (0..1000).map(|i| f64::from(i) / 100.0).collect();
    for dist in families() {
        group.bench_with_input(BenchmarkId::new(dist.family(), xs.len()), &dist, |b, dist| {
            b.iter(|| dist.pdf(&xs));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let tokens: Vec<String> = families().iter().map(ToString::to_string).collect();
    c.bench_function("parse", |b| {
        b.iter(|| {
            tokens
                .iter()
                .map(|t| t.parse::<GenericDistribution>())
                .collect::<Result<Vec<_>, _>>()
        });
    });
}

criterion_group!(benches, bench_sample_n, bench_pdf, bench_parse);
criterion_main!(benches);
