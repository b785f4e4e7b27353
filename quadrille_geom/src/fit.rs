// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-preserving fit of one frame into another.

use kurbo::{Affine, Point, Vec2};

use crate::frame::Frame;

/// Uniform scale and translation that fit one [`Frame`] inside another.
///
/// Produced by [`Frame::fit_parameters`]. Applying `scale` then `offset` to
/// the source frame letterboxes (or pillarboxes) it inside the target zone:
/// the scaled frame is centered on the axis that has slack.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation applied after scaling.
    pub offset: Vec2,
}

impl FitTransform {
    /// The fit as a [`kurbo::Affine`] (scale, then translate).
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Apply the fit to a single point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
    }
}

impl Frame {
    /// Compute the uniform scale and offset that fit this frame inside `zone`
    /// while preserving its aspect ratio.
    ///
    /// The scale is taken from whichever axis is the tighter constraint; the
    /// scaled frame is centered inside `zone` on the other axis.
    pub fn fit_parameters(&self, zone: &Self) -> FitTransform {
        let scale = if zone.ratio() > self.ratio() {
            zone.height() / self.height()
        } else {
            zone.width() / self.width()
        };

        FitTransform {
            scale,
            offset: Vec2::new(
                zone.x + (zone.width() - self.width() * scale) / 2.0 - self.x * scale,
                zone.y + (zone.height() - self.height() * scale) / 2.0 - self.y * scale,
            ),
        }
    }
}
