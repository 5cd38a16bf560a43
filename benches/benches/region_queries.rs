// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_region::{Polygon, QuadTree};

/// Map side length used by every scenario.
const MAP: f64 = 4096.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A jittered hexagon fanned into four triangles around vertex 0.
fn hexagon(cx: f64, cy: f64, r: f64, rng: &mut Rng) -> Polygon {
    let vertices: Vec<Point> = (0..6)
        .map(|k| {
            let a = k as f64 * core::f64::consts::FRAC_PI_3;
            let rr = r * (0.85 + 0.15 * rng.next_f64());
            Point::new(cx + rr * a.cos(), cy + rr * a.sin())
        })
        .collect();
    Polygon::new(vertices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5]).expect("hexagon fan is valid")
}

/// `n * n` locations on a grid, one hexagon each.
fn gen_locations(n: usize) -> Vec<Vec<Polygon>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let cell = MAP / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let cx = (x as f64 + 0.5) * cell;
            let cy = (y as f64 + 0.5) * cell;
            out.push(vec![hexagon(cx, cy, cell * 0.5, &mut rng)]);
        }
    }
    out
}

fn gen_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * MAP, rng.next_f64() * MAP))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32usize, 64, 128] {
        let owners = gen_locations(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_all_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Rect::new(0.0, 0.0, MAP, MAP), &owners),
                |mut tree| {
                    tree.insert_all().expect("ids come from the lookup");
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_point_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_query");
    let points = gen_points(1024);
    for &n in &[32usize, 64, 128] {
        let owners = gen_locations(n);
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, MAP, MAP), &owners);
        tree.insert_all().expect("ids come from the lookup");
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("query_n{}", n), |b| {
            b.iter(|| {
                let hits = points.iter().filter(|&&p| tree.query(p).is_some()).count();
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    let owners = gen_locations(128);
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, MAP, MAP), &owners);
    tree.insert_all().expect("ids come from the lookup");

    for &side in &[64.0_f64, 512.0, 2048.0] {
        let r = Rect::from_origin_size((100.0, 100.0), (side, side));
        group.bench_function(format!("rect_{}", side), |b| {
            b.iter(|| black_box(tree.find_locations_in_rect(black_box(r)).len()));
        });
    }

    let lasso = Polygon::new(
        vec![
            Point::new(200.0, 200.0),
            Point::new(1800.0, 1500.0),
            Point::new(1500.0, 1800.0),
        ],
        vec![0, 1, 2],
    )
    .expect("lasso is valid");
    group.bench_function("polygon_lasso", |b| {
        b.iter(|| black_box(tree.find_locations_in_polygon(&lasso).len()));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_point_query, bench_range_query);
criterion_main!(benches);
