// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escutcheon Gravity: compass anchors and geometry offsets.
//!
//! Places an object of known size on a canvas the way classic image tools
//! do: pick one of nine [`Gravity`] anchors, optionally displace it by an
//! [`Offset`] parsed from a geometry string such as `+10+5` or `-5%+0`, and
//! let [`object_center`] keep the result inside the canvas.
//!
//! Placement works in a bottom-left-origin, Y-up space. Use
//! [`PlacementResult::to_y_down_rect`] for rasterizers with a top-left origin.
//!
//! ```rust
//! use escutcheon_gravity::{Gravity, Offset, object_center};
//! use kurbo::Size;
//!
//! let offset: Offset = "+4+2".parse().unwrap();
//! let placed = object_center(
//!     Gravity::NorthEast,
//!     Size::new(20.0, 10.0),
//!     Size::new(100.0, 100.0),
//!     Some(offset),
//! );
//! assert_eq!((placed.center_x, placed.center_y), (90.0, 95.0));
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

mod geometry;
mod gravity;
mod placement;

pub use geometry::{Expected, GeometryError, Offset, OffsetComponent};
pub use gravity::{Gravity, GravityError};
pub use placement::{PlacementResult, object_center};
