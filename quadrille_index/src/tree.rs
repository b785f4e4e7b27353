// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core quadtree implementation: structure, insertion, queries.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;
use quadrille_geom::Frame;

use crate::dataset::Dataset;
use crate::error::Error;
use crate::source::{Direct, Indexed, PointSource};

/// Depth at which subdivision stops and leaves accept handles past the
/// threshold. Each split halves the node extents, so this many levels
/// exhausts meaningful `f64` separation for any realistic root frame;
/// coincident points would otherwise recurse without bound.
const MAX_DEPTH: usize = 32;

enum NodeKind<H> {
    Leaf(Vec<H>),
    Split(Box<[Node<H>; 4]>),
}

struct Node<H> {
    bounds: Frame,
    kind: NodeKind<H>,
}

impl<H: Copy> Node<H> {
    fn new(bounds: Frame) -> Self {
        Self {
            bounds,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    /// Insert `handle`, resolved to `at`, into this subtree.
    ///
    /// A leaf below the threshold (or at the depth cap) appends after an
    /// inclusive containment check; a full leaf splits first. Split nodes
    /// route into the first child containing the point, in quadrant order,
    /// so a point on a shared internal edge lands in exactly one leaf.
    fn insert<S: PointSource<Handle = H>>(
        &mut self,
        source: &S,
        handle: H,
        at: Point,
        threshold: usize,
        depth: usize,
    ) -> Result<(), Error> {
        if let NodeKind::Leaf(handles) = &mut self.kind {
            if handles.len() < threshold || depth >= MAX_DEPTH {
                if !self.bounds.contains(at) {
                    return Err(Error::OutOfBounds { x: at.x, y: at.y });
                }
                handles.push(handle);
                return Ok(());
            }
            self.split(source, threshold, depth)?;
        }
        if let NodeKind::Split(children) = &mut self.kind {
            return Self::insert_below(children, source, handle, at, threshold, depth);
        }
        Err(Error::OutOfBounds { x: at.x, y: at.y })
    }

    /// Insert into the first of `children` whose bounds contain the point.
    fn insert_below<S: PointSource<Handle = H>>(
        children: &mut [Self; 4],
        source: &S,
        handle: H,
        at: Point,
        threshold: usize,
        depth: usize,
    ) -> Result<(), Error> {
        for child in children.iter_mut() {
            if child.bounds.contains(at) {
                return child.insert(source, handle, at, threshold, depth + 1);
            }
        }
        Err(Error::OutOfBounds { x: at.x, y: at.y })
    }

    /// Replace this leaf with four children covering its quadrants and
    /// redistribute the held handles into them.
    ///
    /// The children are fully populated before the node is rewired, so a
    /// redistribution failure leaves the leaf untouched.
    fn split<S: PointSource<Handle = H>>(
        &mut self,
        source: &S,
        threshold: usize,
        depth: usize,
    ) -> Result<(), Error> {
        let Frame { x, y, w, h } = self.bounds;
        let (hw, hh) = (w / 2.0, h / 2.0);
        let mut children = Box::new([
            Self::new(Frame::new(x, y, hw, hh)),
            Self::new(Frame::new(x + hw, y, hw, hh)),
            Self::new(Frame::new(x, y + hh, hw, hh)),
            Self::new(Frame::new(x + hw, y + hh, hw, hh)),
        ]);

        if let NodeKind::Leaf(handles) = &self.kind {
            for &handle in handles {
                let at = source.position(handle);
                Self::insert_below(&mut children, source, handle, at, threshold, depth)?;
            }
        }
        self.kind = NodeKind::Split(children);
        Ok(())
    }

    /// Collect handles inside `region`, depth-first in quadrant order.
    fn query_into<S: PointSource<Handle = H>>(
        &self,
        source: &S,
        region: &Frame,
        out: &mut Vec<H>,
    ) {
        if !region.intersects(&self.bounds) {
            return;
        }
        match &self.kind {
            NodeKind::Split(children) => {
                for child in children.iter() {
                    child.query_into(source, region, out);
                }
            }
            NodeKind::Leaf(handles) => {
                for &handle in handles {
                    if region.contains(source.position(handle)) {
                        out.push(handle);
                    }
                }
            }
        }
    }

    fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Split(children) => {
                1 + children.iter().map(Self::node_count).sum::<usize>()
            }
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Split(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    #[cfg(test)]
    fn leaf_handle_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(handles) => handles.len(),
            NodeKind::Split(children) => children.iter().map(Self::leaf_handle_count).sum(),
        }
    }
}

/// Recursive 2D spatial index over points in an axis-aligned [`Frame`].
///
/// A node is either a leaf holding up to `threshold` handles or a split node
/// with exactly four children covering its quadrants (top-left, top-right,
/// bottom-left, bottom-right). Inserting into a full leaf subdivides it once
/// and redistributes; the tree is append-only, with no removal or rebalance.
///
/// The `S` parameter fixes the storage mode for the tree's whole lifetime:
/// [`Direct`] (the default) stores [`kurbo::Point`] values, while
/// [`Indexed`] stores `usize` indices into an external [`Dataset`]. See the
/// crate docs for examples of both.
pub struct QuadTree<S: PointSource = Direct> {
    source: S,
    threshold: usize,
    len: usize,
    root: Node<S::Handle>,
}

impl QuadTree<Direct> {
    /// Create an empty direct-mode tree over `bounds`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidThreshold`] if `threshold` is zero, and
    /// [`Error::EmptyBounds`] if `bounds` has non-positive width or height.
    pub fn new(bounds: impl Into<Frame>, threshold: usize) -> Result<Self, Error> {
        Self::with_source(bounds.into(), threshold, Direct)
    }
}

impl<D: Dataset> QuadTree<Indexed<D>> {
    /// Create an indexed-mode tree over `bounds` and bulk-load every point of
    /// `dataset`, in sequence order.
    ///
    /// The tree stores indices, not coordinates; `dataset` is held (borrowed,
    /// for the slice implementations) for the tree's lifetime and is resolved
    /// lazily at insert and query time.
    ///
    /// # Errors
    ///
    /// The constructor errors of [`QuadTree::new`], plus
    /// [`Error::OutOfBounds`] if a dataset point lies outside `bounds`; the
    /// load is abandoned at the first failing point.
    pub fn with_dataset(
        bounds: impl Into<Frame>,
        threshold: usize,
        dataset: D,
    ) -> Result<Self, Error> {
        let mut tree = Self::with_source(bounds.into(), threshold, Indexed::new(dataset))?;
        for idx in 0..tree.source.dataset().len() {
            tree.insert(idx)?;
        }
        Ok(tree)
    }

    /// The attached dataset view.
    pub fn dataset(&self) -> &D {
        self.source.dataset()
    }
}

impl<S: PointSource> QuadTree<S> {
    fn with_source(bounds: Frame, threshold: usize, source: S) -> Result<Self, Error> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold);
        }
        if !(bounds.w > 0.0 && bounds.h > 0.0) {
            return Err(Error::EmptyBounds);
        }
        Ok(Self {
            source,
            threshold,
            len: 0,
            root: Node::new(bounds),
        })
    }

    /// Insert one handle: a [`kurbo::Point`] in direct mode, a dataset index
    /// in indexed mode.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for an indexed handle past the dataset end,
    /// [`Error::OutOfBounds`] for a point outside the tree bounds. A failed
    /// insert leaves the tree unchanged.
    pub fn insert(&mut self, handle: S::Handle) -> Result<(), Error> {
        let at = self.source.admit(handle)?;
        // Reject before any structural work so a failed insert cannot even
        // subdivide a full root leaf.
        if !self.root.bounds.contains(at) {
            return Err(Error::OutOfBounds { x: at.x, y: at.y });
        }
        self.root.insert(&self.source, handle, at, self.threshold, 0)?;
        self.len += 1;
        Ok(())
    }

    /// Insert every handle of `handles`, in order.
    ///
    /// # Errors
    ///
    /// Fails fast with the first [`insert`](Self::insert) error; handles
    /// inserted before the failure remain in the tree (no rollback).
    pub fn insert_batch<I>(&mut self, handles: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S::Handle>,
    {
        for handle in handles {
            self.insert(handle)?;
        }
        Ok(())
    }

    /// All handles whose points lie inside `region`, boundaries inclusive.
    ///
    /// A region that does not overlap the tree bounds yields an empty result.
    /// The order is deterministic: depth-first in quadrant order, preserving
    /// insertion order within each leaf; it is not sorted by distance.
    pub fn query(&self, region: impl Into<Frame>) -> Vec<S::Handle> {
        let region = region.into();
        let mut out = Vec::new();
        self.root.query_into(&self.source, &region, &mut out);
        out
    }

    /// Number of handles held by the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no handles.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root bounds the tree was constructed with.
    pub fn bounds(&self) -> Frame {
        self.root.bounds
    }

    /// The subdivision threshold the tree was constructed with.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl<S: PointSource> core::fmt::Debug for QuadTree<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds)
            .field("threshold", &self.threshold)
            .field("len", &self.len)
            .field("nodes", &self.root.node_count())
            .finish_non_exhaustive()
    }
}
