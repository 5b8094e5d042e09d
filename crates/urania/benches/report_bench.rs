use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::ephemeris::{BodyPosition, ChartPositions};
use urania::report::{build_natal_profile, TransitReportBuilder};
use urania::western::{whole_sign_cusps, CelestialBody};

fn natal_chart() -> ChartPositions {
    let mut chart = ChartPositions::new().with_cusps(whole_sign_cusps(95.0));
    for (i, body) in CelestialBody::ALL.iter().enumerate() {
        chart = chart.with_body(*body, BodyPosition::new((i as f64 * 37.0 + 5.0) % 360.0));
    }
    chart
}

fn transit_chart() -> ChartPositions {
    let mut chart = ChartPositions::new();
    for (i, body) in CelestialBody::ALL.iter().enumerate() {
        chart = chart.with_body(*body, BodyPosition::new((i as f64 * 53.0 + 11.0) % 360.0));
    }
    chart
}

fn bench_profile(c: &mut Criterion) {
    let natal = natal_chart();
    c.bench_function("build_natal_profile", |b| {
        b.iter(|| build_natal_profile(black_box(&natal)))
    });
}

fn bench_transit_report(c: &mut Criterion) {
    let natal = natal_chart();
    let transit = transit_chart();
    let builder = TransitReportBuilder::default().with_seed(7);
    c.bench_function("build_transit_report", |b| {
        b.iter(|| builder.build(black_box(&transit), black_box(&natal)))
    });
}

criterion_group!(benches, bench_profile, bench_transit_report);
criterion_main!(benches);
