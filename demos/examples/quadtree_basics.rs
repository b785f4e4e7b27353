// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small direct-mode tree, insert a few points, and run range
//! queries.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example quadtree_basics`

use kurbo::Point;
use quadrille_geom::Frame;
use quadrille_index::QuadTree;

fn main() {
    let bounds = Frame::new(0.0, 0.0, 100.0, 100.0);
    let mut tree = QuadTree::new(bounds, 4).expect("valid bounds and threshold");

    tree.insert_batch([
        Point::new(10.0, 10.0),
        Point::new(15.0, 12.0),
        Point::new(80.0, 20.0),
        Point::new(55.0, 95.0),
        Point::new(90.0, 90.0),
        Point::new(40.0, 40.0),
    ])
    .expect("all points are inside the bounds");

    println!("tree: {tree:?}");

    // A query over the whole bounds returns every point.
    let all = tree.query(bounds);
    println!("all {} points: {all:?}", all.len());
    assert_eq!(all.len(), tree.len());

    // A query over the top-left quarter returns only nearby points.
    let top_left = tree.query(Frame::new(0.0, 0.0, 50.0, 50.0));
    println!("top-left quarter: {top_left:?}");
    assert!(top_left.contains(&Point::new(10.0, 10.0)));
    assert!(!top_left.contains(&Point::new(90.0, 90.0)));

    // A point outside the bounds is rejected and the tree is unchanged.
    let before = tree.len();
    let err = tree.insert(Point::new(120.0, 50.0)).unwrap_err();
    println!("rejected insert: {err}");
    assert_eq!(tree.len(), before);
}
