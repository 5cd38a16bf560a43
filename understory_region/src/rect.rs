// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed axis-aligned rectangle predicates and quadrant helpers.
//!
//! Kurbo's [`Rect::contains`] is half-open on the max edges. Region lookup wants
//! boundary-inclusive tests everywhere so that a point on a shared polygon edge is
//! still found, and so that a polygon touching a quadrant split line is stored on
//! both sides of it. All predicates here treat rectangles as closed sets.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Quadrant selector produced by [`quadrant_of`].
    ///
    /// The empty set is the north-west quadrant. The raw bits double as the
    /// child index in a quadtree branch: bit 0 is the right half, bit 1 the bottom half.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quadrant: u8 {
        /// Right (larger x) half.
        const EAST  = 0b0000_0001;
        /// Bottom (larger y) half.
        const SOUTH = 0b0000_0010;
    }
}

impl Quadrant {
    /// North-west quadrant.
    pub const NW: Self = Self::empty();
    /// North-east quadrant.
    pub const NE: Self = Self::EAST;
    /// South-west quadrant.
    pub const SW: Self = Self::SOUTH;
    /// South-east quadrant.
    pub const SE: Self = Self::EAST.union(Self::SOUTH);

    /// Index of this quadrant in the `[NW, NE, SW, SE]` order used by [`quadrants`].
    pub const fn index(self) -> usize {
        self.bits() as usize
    }
}

/// Whether two closed rectangles share at least one point.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Whether the closed rectangle contains the point.
#[inline]
pub fn contains_point(r: &Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

/// Whether `outer` fully contains `inner` (edges may coincide).
#[inline]
pub fn contains_rect(outer: &Rect, inner: &Rect) -> bool {
    outer.x0 <= inner.x0 && inner.x1 <= outer.x1 && outer.y0 <= inner.y0 && inner.y1 <= outer.y1
}

/// The four corners of a rectangle, clockwise from `(x0, y0)`.
pub fn corners(r: &Rect) -> [Point; 4] {
    [
        Point::new(r.x0, r.y0),
        Point::new(r.x1, r.y0),
        Point::new(r.x1, r.y1),
        Point::new(r.x0, r.y1),
    ]
}

/// Split a rectangle at its centre into `[NW, NE, SW, SE]`.
///
/// The children share their inner edges, so together they cover `r` exactly.
pub fn quadrants(r: &Rect) -> [Rect; 4] {
    let mid_x = 0.5 * (r.x0 + r.x1);
    let mid_y = 0.5 * (r.y0 + r.y1);
    [
        Rect::new(r.x0, r.y0, mid_x, mid_y),
        Rect::new(mid_x, r.y0, r.x1, mid_y),
        Rect::new(r.x0, mid_y, mid_x, r.y1),
        Rect::new(mid_x, mid_y, r.x1, r.y1),
    ]
}

/// The quadrant of `r` a point falls in.
///
/// Points on the split lines go to the west/north side, matching [`quadrants`].
pub fn quadrant_of(r: &Rect, p: Point) -> Quadrant {
    let mid_x = 0.5 * (r.x0 + r.x1);
    let mid_y = 0.5 * (r.y0 + r.y1);
    let mut q = Quadrant::NW;
    q.set(Quadrant::EAST, p.x > mid_x);
    q.set(Quadrant::SOUTH, p.y > mid_y);
    q
}

/// Union of two rectangles.
pub(crate) fn union(a: Rect, b: Rect) -> Rect {
    Rect::new(a.x0.min(b.x0), a.y0.min(b.y0), a.x1.max(b.x1), a.y1.max(b.y1))
}
