// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable triangulated polygons with cached bounds and sampling predicates.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::error::GeometryError;
use crate::rect;

/// Number of vertices folded per step of the batched bounds reduction.
const LANES: usize = 4;

/// A triangulated 2D shape.
///
/// Vertices and triangle indices are fixed at construction, and so are the cached
/// [`bounds`](Self::bounds). Triangulation happens upstream; this type only tests
/// against the triangles it is given.
///
/// The polygon/polygon and polygon/rectangle predicates sample vertices or corners
/// rather than clipping edges. Two shapes whose outlines cross without either one
/// holding a vertex of the other are reported as disjoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    triangles: Vec<u32>,
    bounds: Rect,
}

impl Polygon {
    /// Create a polygon from vertices and a flat list of triangle vertex indices.
    ///
    /// Every three consecutive entries of `triangles` form one triangle.
    pub fn new(vertices: Vec<Point>, triangles: Vec<u32>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if triangles.len() % 3 != 0 {
            return Err(GeometryError::RaggedTriangles {
                len: triangles.len(),
            });
        }
        if let Some(&index) = triangles.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(GeometryError::TriangleIndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        let bounds = batched_bounds(&vertices);
        Ok(Self {
            vertices,
            triangles,
            bounds,
        })
    }

    /// Axis-aligned bounds of all vertices.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The vertices, in construction order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The flat triangle index list.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Iterate triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }

    /// Whether the point lies in any triangle. Triangle edges count as inside.
    pub fn contains_point(&self, p: Point) -> bool {
        if !rect::contains_point(&self.bounds, p) {
            return false;
        }
        self.triangles().any(|[a, b, c]| triangle_contains(a, b, c, p))
    }

    /// Whether the rectangle lies inside the polygon, judged by its four corners.
    pub fn contains_rect(&self, r: &Rect) -> bool {
        if !rect::contains_rect(&self.bounds, r) {
            return false;
        }
        rect::corners(r).into_iter().all(|p| self.contains_point(p))
    }

    /// Whether every vertex of `other` lies inside this polygon.
    pub fn contains_polygon(&self, other: &Self) -> bool {
        other.vertices.iter().all(|&p| self.contains_point(p))
    }

    /// Whether the polygons overlap, judged by each one's vertices.
    pub fn intersects(&self, other: &Self) -> bool {
        if !rect::overlaps(&self.bounds, &other.bounds) {
            return false;
        }
        other.vertices.iter().any(|&p| self.contains_point(p))
            || self.vertices.iter().any(|&p| other.contains_point(p))
    }

    /// Whether this polygon [`intersects`](Self::intersects) any of `others`.
    pub fn intersects_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Self>,
    {
        others.into_iter().any(|o| self.intersects(o))
    }
}

/// Barycentric point-in-triangle test with inclusive edges.
///
/// Zero-area triangles never match.
fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    if !inv_denom.is_finite() {
        return false;
    }
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
    u >= 0.0 && v >= 0.0 && u + v <= 1.0
}

/// Bounds via lane-wise min/max over fixed-width chunks, then a scalar tail.
///
/// Gives exactly the result of a sequential scan; min and max don't depend on
/// evaluation order for finite inputs.
fn batched_bounds(points: &[Point]) -> Rect {
    let mut min_x = [f64::INFINITY; LANES];
    let mut min_y = [f64::INFINITY; LANES];
    let mut max_x = [f64::NEG_INFINITY; LANES];
    let mut max_y = [f64::NEG_INFINITY; LANES];

    let chunks = points.chunks_exact(LANES);
    let tail = chunks.remainder();
    for chunk in chunks {
        for (lane, p) in chunk.iter().enumerate() {
            min_x[lane] = min_x[lane].min(p.x);
            min_y[lane] = min_y[lane].min(p.y);
            max_x[lane] = max_x[lane].max(p.x);
            max_y[lane] = max_y[lane].max(p.y);
        }
    }

    let fold_min = |lanes: [f64; LANES]| lanes.into_iter().fold(f64::INFINITY, f64::min);
    let fold_max = |lanes: [f64; LANES]| lanes.into_iter().fold(f64::NEG_INFINITY, f64::max);
    let mut out = Rect::new(
        fold_min(min_x),
        fold_min(min_y),
        fold_max(max_x),
        fold_max(max_y),
    );
    for p in tail {
        out.x0 = out.x0.min(p.x);
        out.y0 = out.y0.min(p.y);
        out.x1 = out.x1.max(p.x);
        out.y1 = out.y1.max(p.y);
    }
    out
}

/// Plain sequential bounds scan.
#[cfg(test)]
fn scalar_bounds(points: &[Point]) -> Rect {
    let mut out = Rect::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for p in points {
        out.x0 = out.x0.min(p.x);
        out.y0 = out.y0.min(p.y);
        out.x1 = out.x1.max(p.x);
        out.y1 = out.y1.max(p.y);
    }
    out
}
