// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indexed mode over a flat interleaved coordinate buffer.
//!
//! The tree stores indices into the buffer instead of copying points, and a
//! sliding viewport query returns the indices of the visible points.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example dataset_index`

use quadrille_geom::Frame;
use quadrille_index::QuadTree;

const WIDTH: f64 = 200.0;
const ROWS: usize = 1000;
const ROW_H: f64 = 20.0;

fn main() {
    // One point per row, interleaved x, y. The buffer stays owned here; the
    // tree only borrows it.
    let mut coords = Vec::with_capacity(ROWS * 2);
    for i in 0..ROWS {
        coords.push(WIDTH / 2.0);
        coords.push(i as f64 * ROW_H + ROW_H / 2.0);
    }

    let bounds = Frame::new(0.0, 0.0, WIDTH, ROWS as f64 * ROW_H);
    let tree = QuadTree::with_dataset(bounds, 16, coords.as_slice())
        .expect("every buffer point is inside the bounds");
    println!("indexed {} points: {tree:?}", tree.len());

    // Simulate a few scroll positions by moving the viewport rectangle.
    for scroll in [0.0, 30.0, 200.0, 600.0] {
        let viewport = Frame::new(0.0, scroll, WIDTH, 100.0);
        let visible = tree.query(viewport);
        println!("scroll={scroll:.1} -> visible indices: {visible:?}");
    }
}
