// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Region: build a tree over two owners and query it.

use kurbo::{Point, Rect};
use understory_region::{Polygon, QuadTree};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    let corners = vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ];
    Polygon::new(corners, vec![0, 1, 2, 0, 2, 3]).expect("square is well formed")
}

fn main() {
    let owners = vec![
        vec![square(10.0, 10.0, 30.0, 30.0)],
        vec![square(50.0, 50.0, 70.0, 70.0)],
    ];
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0), &owners);
    tree.insert_all().expect("all owner ids come from the lookup");

    for p in [Point::new(20.0, 20.0), Point::new(60.0, 60.0), Point::ZERO] {
        println!("owner at {p:?}: {:?}", tree.query(p));
    }
    let hits = tree.find_locations_in_rect(Rect::new(0.0, 0.0, 40.0, 40.0));
    println!("owners in (0,0)-(40,40): {hits:?}");
}
