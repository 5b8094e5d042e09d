use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{separation, AspectDetector};
use urania::ephemeris::{BodyPosition, ChartPositions};
use urania::western::CelestialBody;

fn bench_classify(c: &mut Criterion) {
    let natal = AspectDetector::natal();
    let transit = AspectDetector::transit();

    c.bench_function("separation", |b| {
        b.iter(|| separation(black_box(359.0), black_box(2.0)))
    });
    c.bench_function("detect_natal", |b| {
        b.iter(|| natal.detect(black_box(100.0), black_box(218.5)))
    });
    c.bench_function("detect_transit", |b| {
        b.iter(|| transit.detect(black_box(100.0), black_box(191.0)))
    });
}

fn bench_chart_aspects(c: &mut Criterion) {
    let detector = AspectDetector::natal();
    let mut chart = ChartPositions::new();
    for (i, body) in CelestialBody::ALL.iter().enumerate() {
        chart = chart.with_body(*body, BodyPosition::new((i as f64) * 29.5));
    }

    c.bench_function("chart_aspects", |b| {
        b.iter(|| detector.chart_aspects(black_box(&chart)))
    });
}

criterion_group!(benches, bench_classify, bench_chart_aspects);
criterion_main!(benches);
