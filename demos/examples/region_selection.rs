// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box and lasso selection over a map of rectangular locations.
//!
//! Shows the coarse rectangle query next to the shape-filtered polygon query, then
//! runs per-location work for the selection in parallel against the shared tree.
//!
//! Run:
//! - `cargo run -p understory_demos --example region_selection`

use kurbo::{Point, Rect};
use rayon::prelude::*;
use understory_region::{OwnerLookup, Polygon, QuadTree};

const SIDE: usize = 32;
const CELL: f64 = 10.0;

fn tile(x0: f64, y0: f64) -> Polygon {
    let vertices = vec![
        Point::new(x0, y0),
        Point::new(x0 + CELL, y0),
        Point::new(x0 + CELL, y0 + CELL),
        Point::new(x0, y0 + CELL),
    ];
    Polygon::new(vertices, vec![0, 1, 2, 0, 2, 3]).expect("tile is well formed")
}

fn main() {
    let owners: Vec<Vec<Polygon>> = (0..SIDE * SIDE)
        .map(|i| vec![tile((i % SIDE) as f64 * CELL, (i / SIDE) as f64 * CELL)])
        .collect();
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 320.0, 320.0), &owners);
    tree.insert_all().expect("every id comes from the lookup");

    // A thin diagonal lasso: its bounding box covers many tiles, its shape only a few.
    let lasso = Polygon::new(
        vec![
            Point::new(12.0, 12.0),
            Point::new(95.0, 88.0),
            Point::new(88.0, 95.0),
        ],
        vec![0, 1, 2],
    )
    .expect("lasso is well formed");

    let coarse = tree.find_locations_in_rect(lasso.bounds());
    let fine = tree.find_locations_in_polygon(&lasso);
    println!("box selection:   {} locations", coarse.len());
    println!("lasso selection: {} locations", fine.len());

    // Per-location work fans out across threads; the tree is only read.
    let selected: Vec<_> = fine.into_iter().collect();
    let area: f64 = selected
        .par_iter()
        .map(|&id| {
            let centre = owners.owner_bounds(id).map(|b| b.center());
            debug_assert_eq!(centre.and_then(|c| tree.query(c)), Some(id));
            owners[id.index()].iter().map(|p| p.bounds().area()).sum::<f64>()
        })
        .sum();
    println!("selected area:   {area:.1}");
}
