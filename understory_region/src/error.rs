// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for polygon construction and tree building.

use thiserror::Error;

use crate::owner::OwnerId;

/// Malformed triangulated geometry passed to [`Polygon::new`](crate::Polygon::new).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// The triangle index list does not describe whole triangles.
    #[error("triangle index count {len} is not a multiple of 3")]
    RaggedTriangles {
        /// Length of the index list.
        len: usize,
    },

    /// A triangle refers to a vertex that does not exist.
    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    TriangleIndexOutOfRange {
        /// Offending index.
        index: u32,
        /// Number of vertices supplied.
        vertex_count: usize,
    },
}

/// Failure to insert an owner into a [`QuadTree`](crate::QuadTree).
///
/// This is a data or programming error on the caller's side; the build step
/// should stop rather than try to continue with a partial index.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The owner id is not a valid index into the owner lookup.
    #[error("owner {owner} is out of range for a lookup of {owner_count} owners")]
    UnknownOwner {
        /// Requested owner.
        owner: OwnerId,
        /// Number of owners the lookup exposes.
        owner_count: usize,
    },
}
