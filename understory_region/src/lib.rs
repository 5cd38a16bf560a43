// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Region: find which region owns a point or overlaps an area.
//!
//! Understory Region is a building block for map viewers and strategy-game style
//! maps made of many irregular regions ("locations").
//!
//! - [`Polygon`]: an immutable triangulated shape with cached bounds and point,
//!   rectangle, and polygon predicates.
//! - [`QuadTree`]: a region quadtree of `(owner, polygon)` references that answers
//!   point queries and rectangle/polygon range queries with owner ids.
//! - [`OwnerLookup`]: the read-only view of the host's owners the tree resolves
//!   references through. The tree never copies geometry.
//!
//! Triangulation is not part of this crate. Feed [`Polygon::new`] the output of
//! whatever tessellator produced your region meshes.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_region::{OwnerId, Polygon, QuadTree};
//!
//! fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
//!     let corners = vec![
//!         Point::new(x0, y0),
//!         Point::new(x1, y0),
//!         Point::new(x1, y1),
//!         Point::new(x0, y1),
//!     ];
//!     Polygon::new(corners, vec![0, 1, 2, 0, 2, 3]).unwrap()
//! }
//!
//! // Two owners, one square each.
//! let owners = vec![
//!     vec![square(10.0, 10.0, 30.0, 30.0)],
//!     vec![square(50.0, 50.0, 70.0, 70.0)],
//! ];
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0), &owners);
//! tree.insert_all().unwrap();
//!
//! assert_eq!(tree.query(Point::new(20.0, 20.0)), Some(OwnerId(0)));
//! assert_eq!(tree.query(Point::new(0.0, 0.0)), None);
//!
//! let hits = tree.find_locations_in_rect(Rect::new(0.0, 0.0, 40.0, 40.0));
//! assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![OwnerId(0)]);
//! ```
//!
//! ## Build, then query
//!
//! Building takes `&mut QuadTree`; queries take `&QuadTree` and never mutate, so a
//! finished tree can be queried from many threads at once. Debug builds panic if
//! [`QuadTree::insert`] runs after the first query.
//!
//! ## Approximations
//!
//! [`Polygon::contains_rect`], [`Polygon::contains_polygon`], and
//! [`Polygon::intersects`] sample corners and vertices instead of clipping edges.
//! Shapes whose outlines cross without either holding a vertex of the other are
//! reported as disjoint. [`QuadTree::find_locations_in_rect`] compares bounding
//! boxes only.
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. All rectangle tests treat edges as inside.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod owner;
pub mod polygon;
pub mod quadtree;
pub mod rect;

pub use config::{MAX_DEPTH, MAX_OBJECTS, QuadTreeConfig};
pub use error::{GeometryError, InsertError};
pub use owner::{Owner, OwnerId, OwnerLookup, PolygonRef};
pub use polygon::Polygon;
pub use quadtree::{QuadTree, QuadTreeStats};
pub use rect::Quadrant;
