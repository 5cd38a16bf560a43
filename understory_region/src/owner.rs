// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owner identities and the read-only capability the tree uses to reach geometry.
//!
//! The tree never owns [`Polygon`]s. It stores [`PolygonRef`] locators and resolves
//! them through an [`OwnerLookup`] supplied by the host, typically a slice of the
//! host's own location records.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::polygon::Polygon;
use crate::rect;

/// Stable identity of an owner (a map location): its index in the [`OwnerLookup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(pub u32);

impl OwnerId {
    /// Build an id from a lookup index.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Owner ids are 32-bit; lookups never approach u32::MAX owners."
    )]
    pub const fn from_index(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Index of this owner in the lookup.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Locator for one polygon of one owner.
///
/// Ordered and hashed by `(owner, polygon)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonRef {
    /// Owning location.
    pub owner: OwnerId,
    /// Position of the polygon in the owner's polygon list.
    pub polygon: u32,
}

impl PolygonRef {
    /// Create a reference to `owner`'s polygon at `polygon`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Per-owner polygon counts are tiny; 32-bit indices keep leaves compact."
    )]
    pub const fn new(owner: OwnerId, polygon: usize) -> Self {
        Self {
            owner,
            polygon: polygon as u32,
        }
    }

    /// Resolve this reference through a lookup.
    ///
    /// Returns `None` if either index is stale.
    pub fn resolve<'a, L: OwnerLookup + ?Sized>(&self, lookup: &'a L) -> Option<&'a Polygon> {
        if self.owner.index() >= lookup.owner_count() {
            return None;
        }
        lookup.polygons_of(self.owner).get(self.polygon as usize)
    }
}

/// A single owner: something that holds an ordered list of polygons.
pub trait Owner {
    /// The owner's polygons, in a stable order.
    fn polygons(&self) -> &[Polygon];
}

impl Owner for [Polygon] {
    fn polygons(&self) -> &[Polygon] {
        self
    }
}

impl Owner for Vec<Polygon> {
    fn polygons(&self) -> &[Polygon] {
        self
    }
}

/// Read-only, stably indexed collection of owners.
///
/// Ids handed to [`polygons_of`](Self::polygons_of) are always below
/// [`owner_count`](Self::owner_count); implementations may panic otherwise.
pub trait OwnerLookup {
    /// Number of owners; valid ids are `0..owner_count()`.
    fn owner_count(&self) -> usize;

    /// Polygons of the owner `id`.
    fn polygons_of(&self, id: OwnerId) -> &[Polygon];

    /// Union of the owner's polygon bounds, or `None` if it has no polygons.
    fn owner_bounds(&self, id: OwnerId) -> Option<Rect> {
        self.polygons_of(id)
            .iter()
            .map(Polygon::bounds)
            .reduce(rect::union)
    }
}

impl<O: Owner> OwnerLookup for [O] {
    fn owner_count(&self) -> usize {
        self.len()
    }

    fn polygons_of(&self, id: OwnerId) -> &[Polygon] {
        self[id.index()].polygons()
    }
}

impl<O: Owner> OwnerLookup for Vec<O> {
    fn owner_count(&self) -> usize {
        self.len()
    }

    fn polygons_of(&self, id: OwnerId) -> &[Polygon] {
        self[id.index()].polygons()
    }
}

impl<L: OwnerLookup + ?Sized> OwnerLookup for &L {
    fn owner_count(&self) -> usize {
        (**self).owner_count()
    }

    fn polygons_of(&self, id: OwnerId) -> &[Polygon] {
        (**self).polygons_of(id)
    }

    fn owner_bounds(&self, id: OwnerId) -> Option<Rect> {
        (**self).owner_bounds(id)
    }
}
