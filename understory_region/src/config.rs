// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree tuning knobs.

/// Default number of references a leaf holds before it subdivides.
pub const MAX_OBJECTS: usize = 10;

/// Default depth at which leaves stop subdividing. The root is depth 0.
pub const MAX_DEPTH: u8 = 15;

/// Subdivision limits for a [`QuadTree`](crate::QuadTree).
///
/// A leaf splits when it holds more than `max_objects` references, unless it is
/// already at `max_depth`; such terminal leaves grow without bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Leaf capacity before subdividing.
    pub max_objects: usize,
    /// Deepest level that may hold leaves.
    pub max_depth: u8,
}

impl QuadTreeConfig {
    /// Replace the leaf capacity.
    pub const fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    /// Replace the depth limit.
    pub const fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_objects: MAX_OBJECTS,
            max_depth: MAX_DEPTH,
        }
    }
}
