// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree over polygon references.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
#[cfg(debug_assertions)]
use core::sync::atomic::{AtomicBool, Ordering};

use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::config::QuadTreeConfig;
use crate::error::InsertError;
use crate::owner::{OwnerId, OwnerLookup, PolygonRef};
use crate::polygon::Polygon;
use crate::rect;

/// A region quadtree mapping points and areas to owners.
///
/// The tree stores [`PolygonRef`]s, never geometry. Each reference is kept in every
/// leaf its polygon's bounds overlaps, so a polygon straddling a split line appears
/// on both sides of it.
///
/// ## Build, then query
///
/// [`insert`](Self::insert) takes `&mut self` and restructures nodes; the queries
/// take `&self` and never mutate, so a finished tree can be shared across threads.
/// Inserting after the first query is a logic error. Debug builds panic on it.
///
/// ## Overlapping polygons
///
/// [`query`](Self::query) returns the owner of the first matching reference in the
/// leaf, which is the first one inserted. Data with overlapping regions gets
/// insertion-order tie-breaks and nothing stronger.
pub struct QuadTree<L: OwnerLookup> {
    lookup: L,
    config: QuadTreeConfig,
    arena: Vec<Node>,
    #[cfg(debug_assertions)]
    queried: AtomicBool,
}

enum Kind {
    Leaf(Vec<PolygonRef>),
    Branch([NodeIdx; 4]),
}

struct Node {
    bounds: Rect,
    depth: u8,
    kind: Kind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

/// Shape summary of a [`QuadTree`], from [`QuadTree::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuadTreeStats {
    /// Total nodes, branches and leaves.
    pub nodes: usize,
    /// Leaf nodes.
    pub leaves: usize,
    /// Deepest leaf.
    pub max_depth: u8,
    /// Stored references, counting a polygon once per leaf it lands in.
    pub refs: usize,
    /// Reference count of the fullest leaf.
    pub largest_leaf: usize,
}

impl<L: OwnerLookup> QuadTree<L> {
    /// Create an empty tree covering `bounds` with the default limits.
    pub fn new(bounds: Rect, lookup: L) -> Self {
        Self::with_config(bounds, lookup, QuadTreeConfig::default())
    }

    /// Create an empty tree covering `bounds` with explicit limits.
    pub fn with_config(bounds: Rect, lookup: L, config: QuadTreeConfig) -> Self {
        Self {
            lookup,
            config,
            arena: vec![Node {
                bounds,
                depth: 0,
                kind: Kind::Leaf(Vec::new()),
            }],
            #[cfg(debug_assertions)]
            queried: AtomicBool::new(false),
        }
    }

    /// Area covered by the root.
    pub fn bounds(&self) -> Rect {
        self.arena[NodeIdx::ROOT.get()].bounds
    }

    /// Subdivision limits in use.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// The owner lookup references are resolved through.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Index every polygon of `owner`.
    ///
    /// Polygons entirely outside [`bounds`](Self::bounds) are skipped.
    /// Inserting the same owner twice stores its references twice; query results
    /// are unaffected.
    pub fn insert(&mut self, owner: OwnerId) -> Result<(), InsertError> {
        #[cfg(debug_assertions)]
        assert!(
            !self.queried.load(Ordering::Relaxed),
            "QuadTree::insert called after the tree was queried"
        );
        let owner_count = self.lookup.owner_count();
        if owner.index() >= owner_count {
            return Err(InsertError::UnknownOwner { owner, owner_count });
        }
        let polygons = self.lookup.polygons_of(owner);
        debug!(%owner, polygons = polygons.len(), "indexing owner");
        for (i, polygon) in polygons.iter().enumerate() {
            insert_at(
                &mut self.arena,
                &self.lookup,
                &self.config,
                NodeIdx::ROOT,
                PolygonRef::new(owner, i),
                polygon.bounds(),
            );
        }
        Ok(())
    }

    /// Index every owner of the lookup, in id order.
    pub fn insert_all(&mut self) -> Result<(), InsertError> {
        for idx in 0..self.lookup.owner_count() {
            self.insert(OwnerId::from_index(idx))?;
        }
        let stats = self.stats();
        debug!(
            nodes = stats.nodes,
            leaves = stats.leaves,
            max_depth = stats.max_depth,
            refs = stats.refs,
            "quadtree built"
        );
        Ok(())
    }

    /// The owner whose polygon contains `p`, if any.
    pub fn query(&self, p: Point) -> Option<OwnerId> {
        self.mark_queried();
        let mut node = &self.arena[NodeIdx::ROOT.get()];
        if !rect::contains_point(&node.bounds, p) {
            return None;
        }
        loop {
            match &node.kind {
                Kind::Branch(children) => {
                    let q = rect::quadrant_of(&node.bounds, p);
                    node = &self.arena[children[q.index()].get()];
                }
                Kind::Leaf(refs) => {
                    return refs
                        .iter()
                        .find(|r| resolve(&self.lookup, **r).contains_point(p))
                        .map(|r| r.owner);
                }
            }
        }
    }

    /// Owners with a polygon whose bounds overlap `r`.
    ///
    /// This is a bounding-box filter: an owner is reported even if its actual shape
    /// misses `r`, as long as one of its polygon bounds touches it.
    pub fn find_locations_in_rect(&self, r: Rect) -> BTreeSet<OwnerId> {
        self.mark_queried();
        let mut out = BTreeSet::new();
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if !rect::overlaps(&n.bounds, &r) {
                continue;
            }
            match &n.kind {
                Kind::Branch(children) => stack.extend_from_slice(children),
                Kind::Leaf(refs) => {
                    for pr in refs {
                        if out.contains(&pr.owner) {
                            continue;
                        }
                        if rect::overlaps(&resolve(&self.lookup, *pr).bounds(), &r) {
                            out.insert(pr.owner);
                        }
                    }
                }
            }
        }
        out
    }

    /// Owners with a polygon that [`intersects`](Polygon::intersects) `polygon`.
    ///
    /// Candidates come from [`find_locations_in_rect`](Self::find_locations_in_rect)
    /// over the polygon's bounds and are then tested shape against shape.
    pub fn find_locations_in_polygon(&self, polygon: &Polygon) -> BTreeSet<OwnerId> {
        let query_bounds = polygon.bounds();
        let mut owners = self.find_locations_in_rect(query_bounds);
        owners.retain(|&owner| {
            self.lookup
                .owner_bounds(owner)
                .is_some_and(|b| rect::overlaps(&b, &query_bounds))
                && polygon.intersects_any(self.lookup.polygons_of(owner))
        });
        owners
    }

    /// Number of stored references, counting duplicates across leaves.
    pub fn len(&self) -> usize {
        self.stats().refs
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node and reference counts.
    pub fn stats(&self) -> QuadTreeStats {
        let mut s = QuadTreeStats {
            nodes: self.arena.len(),
            ..QuadTreeStats::default()
        };
        for n in &self.arena {
            if let Kind::Leaf(refs) = &n.kind {
                s.leaves += 1;
                s.max_depth = s.max_depth.max(n.depth);
                s.refs += refs.len();
                s.largest_leaf = s.largest_leaf.max(refs.len());
            }
        }
        s
    }

    #[inline]
    fn mark_queried(&self) {
        #[cfg(debug_assertions)]
        self.queried.store(true, Ordering::Relaxed);
    }
}

fn resolve<L: OwnerLookup>(lookup: &L, r: PolygonRef) -> &Polygon {
    &lookup.polygons_of(r.owner)[r.polygon as usize]
}

fn insert_at<L: OwnerLookup>(
    arena: &mut Vec<Node>,
    lookup: &L,
    config: &QuadTreeConfig,
    idx: NodeIdx,
    r: PolygonRef,
    bounds: Rect,
) {
    let node = &mut arena[idx.get()];
    if !rect::overlaps(&node.bounds, &bounds) {
        return;
    }
    let depth = node.depth;
    match &mut node.kind {
        Kind::Branch(children) => {
            let children = *children;
            for child in children {
                insert_at(arena, lookup, config, child, r, bounds);
            }
        }
        Kind::Leaf(refs) => {
            refs.push(r);
            if refs.len() <= config.max_objects {
                return;
            }
            if depth >= config.max_depth {
                if refs.len() == config.max_objects + 1 {
                    trace!(depth, "terminal leaf over capacity");
                }
                return;
            }
            subdivide(arena, lookup, config, idx);
        }
    }
}

/// Turn a leaf into a branch and push its references down one level.
fn subdivide<L: OwnerLookup>(
    arena: &mut Vec<Node>,
    lookup: &L,
    config: &QuadTreeConfig,
    idx: NodeIdx,
) {
    let bounds = arena[idx.get()].bounds;
    let depth = arena[idx.get()].depth;
    let refs = match core::mem::replace(&mut arena[idx.get()].kind, Kind::Branch([idx; 4])) {
        Kind::Leaf(refs) => refs,
        Kind::Branch(_) => unreachable!("only leaves are subdivided"),
    };
    trace!(depth, refs = refs.len(), "subdividing leaf");

    let mut children = [NodeIdx::ROOT; 4];
    for (slot, child_bounds) in children.iter_mut().zip(rect::quadrants(&bounds)) {
        *slot = NodeIdx::new(arena.len());
        arena.push(Node {
            bounds: child_bounds,
            depth: depth + 1,
            kind: Kind::Leaf(Vec::new()),
        });
    }
    arena[idx.get()].kind = Kind::Branch(children);

    for r in refs {
        let polygon_bounds = resolve(lookup, r).bounds();
        for child in children {
            insert_at(arena, lookup, config, child, r, polygon_bounds);
        }
    }
}

impl<L: OwnerLookup> Debug for QuadTree<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("config", &self.config)
            .field("owners", &self.lookup.owner_count())
            .field("stats", &stats)
            .finish_non_exhaustive()
    }
}
