// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspection session: selection, hover, expansion, and drag state driven by
//! pointer and key callbacks.

use clickthrough_geometry::{ContainerMetrics, pointer_to_container_space};
use kurbo::{Point, Vec2};

use crate::drag::{Cursor, DragScroll};
use crate::expand::ExpandedGroups;
use crate::hit::{HitParams, hit_test};
use crate::index::{find_layer, flatten};
use crate::types::{Layer, LayerId};

/// Pointer button identifier.
pub type Button = u8;

/// The primary (usually left) pointer button.
pub const PRIMARY_BUTTON: Button = 0;

/// Result of [`InspectSession::on_pointer_down`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DownOutcome {
    /// Not the primary button, or no container; nothing changed.
    Ignored,
    /// Space was held, so the press started a drag.
    DragStarted,
    /// A layer was hit and is now selected.
    Selected(LayerId),
    /// Nothing under the pointer; selection unchanged.
    Missed,
}

/// Result of [`InspectSession::on_pointer_move`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// A drag is active; the host should scroll the container to this offset.
    Scroll(Vec2),
    /// Hover target after the move (`None` over empty canvas).
    Hover(Option<LayerId>),
}

/// State of one screen's inspection view.
///
/// Created when a screen is opened for inspection and dropped on navigation.
/// Layer data is borrowed per call; the session only stores identifiers.
#[derive(Clone, Debug, Default)]
pub struct InspectSession {
    selected: Option<LayerId>,
    hovered: Option<LayerId>,
    expanded: ExpandedGroups,
    drag: DragScroll,
    params: HitParams,
}

impl InspectSession {
    /// Create a session at the given zoom level.
    pub fn new(zoom: f64) -> Self {
        Self::with_params(HitParams::inspect(zoom))
    }

    /// Create a session with explicit hit-test parameters.
    pub fn with_params(params: HitParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Update the zoom level.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.params.zoom = zoom;
    }

    /// Hit-test parameters in effect.
    pub const fn params(&self) -> &HitParams {
        &self.params
    }

    /// Currently selected layer.
    pub const fn selected(&self) -> Option<LayerId> {
        self.selected
    }

    /// Currently hovered layer.
    pub const fn hovered(&self) -> Option<LayerId> {
        self.hovered
    }

    /// Expanded groups.
    pub const fn expanded(&self) -> &ExpandedGroups {
        &self.expanded
    }

    /// Expanded groups, for explicit collapse/toggle from a layer panel.
    pub fn expanded_mut(&mut self) -> &mut ExpandedGroups {
        &mut self.expanded
    }

    /// Drag state.
    pub const fn drag(&self) -> &DragScroll {
        &self.drag
    }

    /// Cursor hint for the canvas.
    pub const fn cursor(&self) -> Cursor {
        self.drag.cursor()
    }

    /// Select a layer (for example from the layer panel) and reveal it.
    ///
    /// Selecting `None`, or an id that is not in `layers`, clears the selection.
    pub fn select(&mut self, layers: &[Layer], id: Option<LayerId>) {
        let layer = id.and_then(|id| find_layer(layers, id));
        if id.is_some() && layer.is_none() {
            tracing::debug!(?id, "selected layer not found in tree");
        }
        self.selected = layer.map(|l| l.id);
        if let Some(layer) = layer {
            let flat = flatten(layers, Some(layer));
            self.expanded.expand_for_selection(layer, &flat);
        }
    }

    /// Topmost layer under a display-space pointer, skipping the selection.
    pub fn pick<'a>(&self, layers: &'a [Layer], pointer: Point) -> Option<&'a Layer> {
        let selected = self.selected.and_then(|id| find_layer(layers, id));
        let flat = flatten(layers, selected);
        hit_test(pointer, &flat, self.selected, &self.params)
    }

    /// Handle a pointer press at client position `client`.
    ///
    /// Without a container the press is ignored and no state changes.
    pub fn on_pointer_down(
        &mut self,
        layers: &[Layer],
        button: Button,
        client: Point,
        container: Option<&ContainerMetrics>,
    ) -> DownOutcome {
        if button != PRIMARY_BUTTON {
            return DownOutcome::Ignored;
        }
        let Some(c) = container else {
            tracing::debug!("pointer down without a container");
            return DownOutcome::Ignored;
        };
        if self.drag.begin(client, c.scroll) {
            return DownOutcome::DragStarted;
        }
        let pointer = pointer_to_container_space(client, Some(c));
        match self.pick(layers, pointer).map(|l| l.id) {
            Some(id) => {
                self.select(layers, Some(id));
                DownOutcome::Selected(id)
            }
            None => DownOutcome::Missed,
        }
    }

    /// Handle a pointer move at client position `client`.
    ///
    /// Without a container the hover target is left as it was.
    pub fn on_pointer_move(
        &mut self,
        layers: &[Layer],
        client: Point,
        container: Option<&ContainerMetrics>,
    ) -> MoveOutcome {
        if let Some(scroll) = self.drag.update(client) {
            return MoveOutcome::Scroll(scroll);
        }
        let Some(c) = container else {
            return MoveOutcome::Hover(self.hovered);
        };
        let pointer = pointer_to_container_space(client, Some(c));
        self.hovered = self.pick(layers, pointer).map(|l| l.id);
        MoveOutcome::Hover(self.hovered)
    }

    /// Handle a pointer release.
    pub fn on_pointer_up(&mut self) {
        self.drag.end();
    }

    /// Handle a space key press or release.
    pub fn on_space(&mut self, pressed: bool) {
        self.drag.set_space(pressed);
    }
}
