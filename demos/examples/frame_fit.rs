// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Letterbox a frame into differently shaped viewports.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example frame_fit`

use quadrille_geom::Frame;

fn main() {
    // A 16:9 scene to be displayed in various viewports.
    let scene = Frame::new(0.0, 0.0, 1920.0, 1080.0);

    for (name, zone) in [
        ("square", Frame::new(0.0, 0.0, 500.0, 500.0)),
        ("wide", Frame::new(0.0, 0.0, 1000.0, 300.0)),
        ("offset", Frame::new(100.0, 50.0, 640.0, 480.0)),
    ] {
        let fit = scene.fit_parameters(&zone);
        let center = fit.apply(scene.center());
        println!(
            "{name}: scale={:.4} offset=({:.1}, {:.1}) scene center -> ({:.1}, {:.1})",
            fit.scale, fit.offset.x, fit.offset.y, center.x, center.y,
        );
        // The scaled scene center always lands on the zone center.
        assert!((center - zone.center()).hypot() < 1e-9);
    }
}
