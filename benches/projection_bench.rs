use criterion::{Criterion, criterion_group, criterion_main};
use sea_chart::core::{ChartProfile, ChartProjection, PixelPoint};
use sea_chart::extensions::{MarkerOverlay, MarkerStyle};
use std::hint::black_box;

fn bench_pixel_round_trip(c: &mut Criterion) {
    let projection = ChartProjection::new(&ChartProfile::britannia()).expect("valid chart");

    c.bench_function("pixel_geo_round_trip", |b| {
        b.iter(|| {
            let reading = projection.pixel_to_geo(black_box(PixelPoint::new(412, 333)));
            let _ = projection.geo_to_pixel(reading.to_fix());
        })
    });
}

fn bench_world_to_pixel(c: &mut Criterion) {
    let projection = ChartProjection::new(&ChartProfile::britannia()).expect("valid chart");

    c.bench_function("world_to_pixel", |b| {
        b.iter(|| {
            let _ = projection.world_to_pixel(black_box(4_321), black_box(2_222));
        })
    });
}

fn bench_snapshot_10k(c: &mut Criterion) {
    let mut overlay = MarkerOverlay::new();
    for i in 0..10_000 {
        let style = if i % 2 == 0 {
            MarkerStyle::Primary
        } else {
            MarkerStyle::Secondary
        };
        overlay.add_marker(PixelPoint::new(i % 640, i / 640), style);
    }

    c.bench_function("overlay_snapshot_10k", |b| {
        b.iter(|| {
            let _ = black_box(&overlay).snapshot();
        })
    });
}

criterion_group!(
    benches,
    bench_pixel_round_trip,
    bench_world_to_pixel,
    bench_snapshot_10k
);
criterion_main!(benches);
