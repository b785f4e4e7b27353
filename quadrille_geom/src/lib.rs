// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Geom: an axis-aligned frame primitive for 2D spatial code.
//!
//! A [`Frame`] is a rectangle stored as a top-left corner plus a width and a
//! height. It is the geometric substrate for spatial indexing in the
//! `quadrille_index` crate, but it is useful on its own wherever
//! origin-plus-size semantics are more natural than the min/max corners of
//! [`kurbo::Rect`].
//!
//! - Inclusive containment and symmetric overlap tests.
//! - Edge-aware mutation: resizing re-centers, moving an edge pins the
//!   opposite one.
//! - Aspect-preserving fit of one frame into another ([`Frame::fit_parameters`]),
//!   yielding a uniform scale and centering offset ([`FitTransform`]).
//! - Cheap conversions to and from [`kurbo::Rect`].
//!
//! # Example
//!
//! ```
//! use quadrille_geom::Frame;
//! use kurbo::Point;
//!
//! let frame = Frame::new(10.0, 10.0, 80.0, 40.0);
//! assert!(frame.contains(Point::new(90.0, 50.0))); // edges are inclusive
//! assert_eq!(frame.ratio(), 2.0);
//!
//! // Letterbox the frame into a square viewport.
//! let viewport = Frame::new(0.0, 0.0, 100.0, 100.0);
//! let fit = frame.fit_parameters(&viewport);
//! assert_eq!(fit.scale, 1.25);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod frame;

pub use fit::FitTransform;
pub use frame::Frame;
