// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Index: a recursive 2D point quadtree.
//!
//! Quadrille Index answers "which points lie inside this region" faster than
//! a linear scan by partitioning a rectangular [`Frame`] on demand. A node
//! holds points directly until an insert would push it past its subdivision
//! threshold, then splits once into four equal quadrants (top-left,
//! top-right, bottom-left, bottom-right) and redistributes. The tree is
//! append-only: no removal, relocation, or rebalancing; a changed dataset
//! means building a new tree.
//!
//! Two storage modes are fixed at construction, as a type parameter rather
//! than a runtime flag:
//!
//! - **Direct** (the default): leaves store [`kurbo::Point`] values and
//!   queries return points.
//! - **Indexed**: leaves store `usize` indices into an external, caller-owned
//!   [`Dataset`], and queries return indices. The dataset is borrowed, never
//!   copied, and is read lazily at insert and query time.
//!
//! # Examples
//!
//! Direct mode:
//!
//! ```
//! use kurbo::Point;
//! use quadrille_geom::Frame;
//! use quadrille_index::QuadTree;
//!
//! let mut tree = QuadTree::new(Frame::new(0.0, 0.0, 100.0, 100.0), 4)?;
//! tree.insert_batch([
//!     Point::new(10.0, 10.0),
//!     Point::new(80.0, 20.0),
//!     Point::new(55.0, 95.0),
//! ])?;
//!
//! let hits = tree.query(Frame::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits, vec![Point::new(10.0, 10.0)]);
//! # Ok::<(), quadrille_index::Error>(())
//! ```
//!
//! Indexed mode over a flat interleaved buffer:
//!
//! ```
//! use quadrille_geom::Frame;
//! use quadrille_index::QuadTree;
//!
//! let coords: &[f64] = &[1.0, 1.0, 5.0, 5.0, 9.0, 9.0];
//! let tree = QuadTree::with_dataset(Frame::new(0.0, 0.0, 10.0, 10.0), 4, coords)?;
//!
//! // Queries return indices into `coords`, in deterministic order.
//! assert_eq!(tree.query(Frame::new(0.0, 0.0, 10.0, 10.0)), vec![0, 1, 2]);
//! # Ok::<(), quadrille_index::Error>(())
//! ```
//!
//! ## Choosing a mode
//!
//! - Direct mode is the simplest fit when the tree is the natural owner of
//!   the points, or when points are produced on the fly.
//! - Indexed mode avoids copying when a large coordinate buffer already
//!   exists (`&[kurbo::Point]`, `&[[f64; 2]]`, `&[(f64, f64)]`, or flat
//!   interleaved `&[f64]`); the slice type selects the layout at compile
//!   time.
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs on the caller's stack. Mutation
//! takes `&mut self`, queries take `&self`, so the borrow checker enforces
//! the single-writer rule; concurrent queries on an otherwise-unmodified
//! tree are fine.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dataset;
pub mod error;
pub mod source;
pub mod tree;

pub use dataset::Dataset;
pub use error::Error;
pub use quadrille_geom::Frame;
pub use source::{Direct, Indexed, PointSource};
pub use tree::QuadTree;
