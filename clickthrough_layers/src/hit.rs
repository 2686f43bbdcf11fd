// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Topmost-layer hit testing over a flattened layer view.

use clickthrough_geometry::{INSPECT_SPACE_FACTOR, contains_closed, to_display_rect};
use kurbo::Point;

use crate::index::FlatLayer;
use crate::types::{Layer, LayerId};

/// Parameters mapping raw layer rectangles into the pointer's display space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Current zoom level.
    pub zoom: f64,
    /// Fixed space factor applied before zoom.
    pub space_factor: f64,
}

impl HitParams {
    /// Parameters for inspection mode at the given zoom.
    pub const fn inspect(zoom: f64) -> Self {
        Self {
            zoom,
            space_factor: INSPECT_SPACE_FACTOR,
        }
    }
}

impl Default for HitParams {
    fn default() -> Self {
        Self::inspect(1.0)
    }
}

/// Find the topmost layer containing `pointer`, skipping the `selected` layer.
///
/// - `pointer` is in display space (see [`clickthrough_geometry::pointer_to_container_space`]).
/// - Containment is closed on all four edges.
/// - The greatest depth wins; among equal depths the later entry in `flat` wins.
/// - The selected layer never wins, even when it is the only candidate, so
///   repeated clicks reach what lies beneath it.
///
/// Returns `None` when nothing is under the pointer.
pub fn hit_test<'a>(
    pointer: Point,
    flat: &[FlatLayer<'a>],
    selected: Option<LayerId>,
    params: &HitParams,
) -> Option<&'a Layer> {
    let mut best: Option<FlatLayer<'a>> = None;
    for entry in flat {
        if selected == Some(entry.layer.id) {
            continue;
        }
        let rect = to_display_rect(entry.layer.rect(), params.zoom, params.space_factor);
        if !contains_closed(rect, pointer) {
            continue;
        }
        if best.is_none_or(|b| entry.depth >= b.depth) {
            best = Some(*entry);
        }
    }
    best.map(|b| b.layer)
}
