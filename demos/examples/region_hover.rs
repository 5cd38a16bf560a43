// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover lookup over a map of diamond-shaped locations.
//!
//! Builds a grid of locations, each a diamond split into two triangles, then
//! sweeps a cursor across the map the way panning would and reports the location
//! under it.
//!
//! Run:
//! - `RUST_LOG=understory_region=debug cargo run -p understory_demos --example region_hover`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_region::{Owner, OwnerId, Polygon, QuadTree};

const COLS: usize = 40;
const ROWS: usize = 40;
const CELL: f64 = 25.0;

struct Location {
    name: String,
    polygons: Vec<Polygon>,
}

impl Owner for Location {
    fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

fn diamond(cx: f64, cy: f64, r: f64) -> Polygon {
    let vertices = vec![
        Point::new(cx, cy - r),
        Point::new(cx + r, cy),
        Point::new(cx, cy + r),
        Point::new(cx - r, cy),
    ];
    Polygon::new(vertices, vec![0, 1, 2, 0, 2, 3]).expect("diamond is well formed")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut locations = Vec::with_capacity(COLS * ROWS);
    for row in 0..ROWS {
        for col in 0..COLS {
            let cx = (col as f64 + 0.5) * CELL;
            let cy = (row as f64 + 0.5) * CELL;
            locations.push(Location {
                name: format!("loc_{col}_{row}"),
                polygons: vec![diamond(cx, cy, CELL * 0.5)],
            });
        }
    }

    let map = Rect::new(0.0, 0.0, COLS as f64 * CELL, ROWS as f64 * CELL);
    let mut tree = QuadTree::new(map, locations.as_slice());
    tree.insert_all().expect("every id comes from the lookup");
    println!("{tree:?}");

    let name_of = |id: Option<OwnerId>| id.map_or("<sea>", |id| locations[id.index()].name.as_str());

    // Diagonal sweep: alternates between diamond centres and the gaps between them.
    for step in 0..=16 {
        let t = step as f64 * CELL * 0.25 + 3.0;
        let cursor = Point::new(t, t * 0.5);
        println!("cursor {cursor:?} -> {}", name_of(tree.query(cursor)));
    }
}
