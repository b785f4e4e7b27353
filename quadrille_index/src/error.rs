// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for quadtree construction and insertion.

use thiserror::Error;

/// Errors raised by [`QuadTree`](crate::QuadTree) operations.
///
/// Errors are reported at the point of detection and never retried or
/// swallowed internally. A failed insert leaves the tree as it was, except
/// that a failed [`insert_batch`](crate::QuadTree::insert_batch) keeps the
/// elements inserted before the failure (partial success, not a transaction).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A tree was constructed with a subdivision threshold of zero.
    ///
    /// A zero threshold would make every leaf subdivide on its first insert,
    /// recursing until floating-point precision collapses.
    #[error("subdivision threshold must be at least 1")]
    InvalidThreshold,

    /// A tree was constructed with bounds of non-positive width or height.
    /// A degenerate frame cannot be meaningfully subdivided.
    #[error("index bounds must have positive width and height")]
    EmptyBounds,

    /// An indexed-mode insert referenced a point past the end of the dataset.
    #[error("index {0} is out of range for the attached dataset")]
    IndexOutOfRange(usize),

    /// A point resolved to coordinates outside the bounds of every candidate
    /// node at the level where it was being inserted.
    #[error("point ({x}, {y}) does not fit in any quadrant")]
    OutOfBounds {
        /// Resolved x coordinate of the rejected point.
        x: f64,
        /// Resolved y coordinate of the rejected point.
        y: f64,
    },
}
