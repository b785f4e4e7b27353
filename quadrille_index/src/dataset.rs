// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only views over externally owned coordinate data.

use kurbo::Point;

/// A read-only sequence of 2D coordinates owned by the caller.
///
/// An indexed-mode [`QuadTree`](crate::QuadTree) stores `usize` handles into
/// a `Dataset` instead of copying point values, so large datasets can be
/// indexed cheaply. The coordinate layout is part of the implementing type:
/// nested layouts are slices of point-like elements, the flat layout is a
/// slice of interleaved `x, y` scalars. Choosing a slice type chooses the
/// layout once; no per-access layout branch exists.
///
/// Implementations for borrowed slices are provided below. The tree holds the
/// view for its whole lifetime, so the borrow checker prevents the caller
/// from mutating the underlying data while the tree is alive. Resolution is
/// lazy: coordinates are read at insert and query time, never cached.
pub trait Dataset {
    /// Number of points in the dataset.
    fn len(&self) -> usize;

    /// Whether the dataset holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point at `idx`.
    ///
    /// Callers pass only indices below [`len`](Self::len); implementations
    /// may panic otherwise.
    fn position(&self, idx: usize) -> Point;
}

impl Dataset for &[Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn position(&self, idx: usize) -> Point {
        self[idx]
    }
}

impl Dataset for &[[f64; 2]] {
    fn len(&self) -> usize {
        <[[f64; 2]]>::len(self)
    }

    fn position(&self, idx: usize) -> Point {
        let [x, y] = self[idx];
        Point::new(x, y)
    }
}

impl Dataset for &[(f64, f64)] {
    fn len(&self) -> usize {
        <[(f64, f64)]>::len(self)
    }

    fn position(&self, idx: usize) -> Point {
        let (x, y) = self[idx];
        Point::new(x, y)
    }
}

/// Flat interleaved layout: `[x0, y0, x1, y1, ..]`.
///
/// A trailing unpaired scalar is ignored.
impl Dataset for &[f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self) / 2
    }

    fn position(&self, idx: usize) -> Point {
        Point::new(self[idx * 2], self[idx * 2 + 1])
    }
}
