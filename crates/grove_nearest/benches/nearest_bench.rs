use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use grove_nearest::{
    geo_point::GeoPoint,
    great_circle::great_circle_distance,
    nearest::{nearest_local, nearest_waypoint_index},
};

fn grid(rows: usize, cols: usize, origin: GeoPoint, step: f64) -> Vec<GeoPoint> {
    (0..rows)
        .flat_map(|i| {
            (0..cols).map(move |j| {
                GeoPoint::new(origin.lat + i as f64 * step, origin.lng + j as f64 * step)
            })
        })
        .collect()
}

fn nearest_benchmark(c: &mut Criterion) {
    let origin = GeoPoint::new(54.7684, 9.4349);
    let trees = grid(40, 25, origin, 0.001);
    let waypoints = grid(10, 10, GeoPoint::new(54.76, 9.43), 0.004);

    c.bench_function("great_circle_distance", |b| {
        b.iter(|| great_circle_distance(black_box(&trees[0]), black_box(&waypoints[55])))
    });

    c.bench_function("nearest_waypoint_index (100 waypoints)", |b| {
        b.iter(|| nearest_waypoint_index(black_box(&trees[500]), black_box(&waypoints)))
    });

    c.bench_function("nearest_local (1000 trees x 100 waypoints)", |b| {
        b.iter(|| nearest_local(black_box(&trees), black_box(&waypoints)))
    });
}

criterion_group!(benches, nearest_benchmark);
criterion_main!(benches);
