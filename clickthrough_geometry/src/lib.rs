// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clickthrough Geometry: coordinate-space helpers for prototype viewers.
//!
//! A prototype viewer juggles three coordinate spaces:
//!
//! - **Raw space**: asset pixels, the space hotspot and layer rectangles are
//!   authored in.
//! - **Display space**: raw space multiplied by the zoom level and, in
//!   inspection mode, a fixed space factor (layers are exported at half the
//!   rendered resolution, so inspection renders them at
//!   [`INSPECT_SPACE_FACTOR`] before zooming).
//! - **Container space**: display space offset by a scrollable container's
//!   origin, padding, and scroll position. Pointer events arrive in client
//!   coordinates and must be brought into this space before hit testing.
//!
//! This crate converts between them and computes anchors for overlays shown
//! next to their trigger hotspot (see [`overlay_anchor`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Point, Rect, Vec2};
//! use clickthrough_geometry::{
//!     ContainerMetrics, INSPECT_SPACE_FACTOR, contains_closed, pointer_to_container_space,
//!     to_display_rect,
//! };
//!
//! let layer = Rect::new(10.0, 10.0, 30.0, 20.0);
//! let display = to_display_rect(layer, 1.5, INSPECT_SPACE_FACTOR);
//! assert_eq!(display, Rect::new(30.0, 30.0, 90.0, 60.0));
//!
//! let container = ContainerMetrics {
//!     origin: Point::new(100.0, 50.0),
//!     padding: Insets::uniform(64.0),
//!     scroll: Vec2::new(0.0, 20.0),
//! };
//! let pointer = pointer_to_container_space(Point::new(200.0, 150.0), Some(&container));
//! assert_eq!(pointer, Point::new(36.0, 56.0));
//! assert!(contains_closed(display, pointer));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support through `kurbo/libm`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`OverlayPosition`] and
//!   [`OverlaySpec`].
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Insets, Point, Rect, Vec2};

mod anchor;

pub use anchor::{Align, OverlayAnchor, OverlayPosition, OverlaySpec, Side, overlay_anchor};

/// Space factor used by inspection mode: layer rectangles are doubled before zooming.
pub const INSPECT_SPACE_FACTOR: f64 = 2.0;

/// Space factor used by preview mode: zoom is applied directly.
pub const PREVIEW_SPACE_FACTOR: f64 = 1.0;

/// Convert a raw-space rectangle into display space.
///
/// Every coordinate is multiplied by `zoom * space_factor`. No mode detection
/// happens here; pass [`INSPECT_SPACE_FACTOR`] or [`PREVIEW_SPACE_FACTOR`] as
/// appropriate.
#[must_use]
pub fn to_display_rect(rect: Rect, zoom: f64, space_factor: f64) -> Rect {
    rect.scale_from_origin(zoom * space_factor)
}

/// Closed-interval containment: points on any of the four edges are inside.
///
/// [`Rect::contains`] is half-open on the far edges; hit testing in a viewer
/// treats the outline as part of the target.
#[must_use]
pub fn contains_closed(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// Client-space metrics of a scrollable container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerMetrics {
    /// Top-left corner of the container's border box, in client coordinates.
    pub origin: Point,
    /// Container padding. Only the leading edges (`x0`, `y0`) shift content.
    pub padding: Insets,
    /// Current scroll offset of the container.
    pub scroll: Vec2,
}

/// Bring a client-space pointer position into a container's content space.
///
/// Subtracts the container origin and leading padding, then adds the scroll
/// offset. A missing container is not an error: the origin is returned and a
/// debug diagnostic is emitted.
#[must_use]
pub fn pointer_to_container_space(pointer: Point, container: Option<&ContainerMetrics>) -> Point {
    let Some(c) = container else {
        tracing::debug!(x = pointer.x, y = pointer.y, "no container for pointer position");
        return Point::ORIGIN;
    };
    Point::new(
        pointer.x - c.origin.x - c.padding.x0 + c.scroll.x,
        pointer.y - c.origin.y - c.padding.y0 + c.scroll.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rect_applies_zoom_and_factor() {
        let r = Rect::from_origin_size((4.0, 8.0), (10.0, 20.0));
        assert_eq!(
            to_display_rect(r, 0.5, PREVIEW_SPACE_FACTOR),
            Rect::new(2.0, 4.0, 7.0, 14.0)
        );
        assert_eq!(
            to_display_rect(r, 0.5, INSPECT_SPACE_FACTOR),
            Rect::new(4.0, 8.0, 14.0, 28.0)
        );
    }

    #[test]
    fn closed_containment_includes_all_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_closed(r, Point::new(0.0, 0.0)));
        assert!(contains_closed(r, Point::new(10.0, 10.0)));
        assert!(contains_closed(r, Point::new(10.0, 5.0)));
        assert!(!contains_closed(r, Point::new(10.000_1, 5.0)));
        assert!(!contains_closed(r, Point::new(5.0, -0.1)));
        // Half-open kurbo containment would reject the far edge.
        assert!(!r.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn container_space_compensates_padding_and_scroll() {
        let c = ContainerMetrics {
            origin: Point::new(20.0, 30.0),
            padding: Insets::new(16.0, 8.0, 100.0, 100.0),
            scroll: Vec2::new(5.0, 40.0),
        };
        let p = pointer_to_container_space(Point::new(50.0, 60.0), Some(&c));
        assert_eq!(p, Point::new(19.0, 62.0));
    }

    #[test]
    fn missing_container_yields_origin() {
        let p = pointer_to_container_space(Point::new(50.0, 60.0), None);
        assert_eq!(p, Point::ORIGIN);
    }
}
