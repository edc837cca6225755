// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size};

use crate::gravity::Anchor;
use crate::{Gravity, Offset};

/// Where an object ends up on the canvas.
///
/// Coordinates are in a bottom-left-origin, Y-up canvas space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Horizontal center of the object.
    pub center_x: f64,
    /// Vertical center of the object, measured up from the bottom edge.
    pub center_y: f64,
}

impl PlacementResult {
    /// The center as a point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Bottom-left corner of an object of size `object`, rounded to whole
    /// pixels.
    pub fn origin(&self, object: Size) -> Point {
        Point::new(
            (self.center_x - object.width / 2.0).round(),
            (self.center_y - object.height / 2.0).round(),
        )
    }

    /// The placed object as a rectangle in top-left-origin, Y-down space.
    ///
    /// The corner is snapped the same way as [`PlacementResult::origin`].
    pub fn to_y_down_rect(&self, object: Size, canvas: Size) -> Rect {
        let origin = self.origin(object);
        let top = canvas.height - origin.y - object.height;
        Rect::from_origin_size((origin.x, top), object)
    }
}

/// Compute the center of an object of size `object` attached to `canvas` at
/// `gravity`, displaced by `offset`.
///
/// When the object fits on an axis, the center is pushed inward until the
/// object lies within the canvas. When it does not fit, the offset is
/// ignored on that axis and the object is pinned to the anchor instead.
pub fn object_center(
    gravity: Gravity,
    object: Size,
    canvas: Size,
    offset: Option<Offset>,
) -> PlacementResult {
    let horizontal = gravity.horizontal();
    let vertical = gravity.vertical();

    let mut center_x = horizontal.position(canvas.width);
    let mut center_y = vertical.position(canvas.height);
    if let Some(offset) = offset {
        center_x += offset.x.resolve(canvas.width);
        // Offsets grow downwards; percentages are of the width on both axes.
        center_y -= offset.y.resolve(canvas.width);
    }

    PlacementResult {
        center_x: fit_axis(horizontal, center_x, object.width, canvas.width),
        center_y: fit_axis(vertical, center_y, object.height, canvas.height),
    }
}

fn fit_axis(anchor: Anchor, center: f64, object: f64, extent: f64) -> f64 {
    if object > extent {
        return anchor.pinned_center(object, extent);
    }
    let half = object / 2.0;
    if center - half < 0.0 {
        half
    } else if center + half > extent {
        extent - half
    } else {
        center
    }
}
