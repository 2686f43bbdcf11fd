// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer tree types.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// Identifier of a layer within one screen's layer tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LayerId(pub u64);

/// Type of a layer. Only groups have children.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum LayerKind {
    /// A group; children are listed back to front.
    Group {
        /// Child layers.
        layers: Vec<Layer>,
    },
    /// A text layer.
    Text,
    /// A vector shape.
    Shape,
    /// A bitmap.
    Image,
    /// Any other leaf type exported by the design tool.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// A node of the layer tree, in raw asset pixels.
///
/// The tree is owned top-down; a layer appears under exactly one parent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    /// Identity.
    pub id: LayerId,
    /// Name shown in the layer panel.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Layer type and, for groups, children.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: LayerKind,
}

impl Layer {
    /// A leaf layer of kind [`LayerKind::Shape`] covering `rect`.
    pub fn leaf(id: LayerId, rect: Rect) -> Self {
        Self::with_kind(id, rect, LayerKind::Shape)
    }

    /// A group layer covering `rect`.
    pub fn group(id: LayerId, rect: Rect, layers: Vec<Self>) -> Self {
        Self::with_kind(id, rect, LayerKind::Group { layers })
    }

    /// A layer of any kind covering `rect`.
    pub fn with_kind(id: LayerId, rect: Rect, kind: LayerKind) -> Self {
        Self {
            id,
            name: String::new(),
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            kind,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Raw-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

    /// Whether this layer is a group.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, LayerKind::Group { .. })
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[Self] {
        match &self.kind {
            LayerKind::Group { layers } => layers,
            _ => &[],
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_groups_and_unknown_leaf_types() {
        let json = r#"[
            {"id": 1, "name": "Card", "x": 0, "y": 0, "width": 100, "height": 50, "type": "group",
             "layers": [
                {"id": 2, "x": 4, "y": 4, "width": 20, "height": 10, "type": "text"},
                {"id": 3, "x": 30, "y": 4, "width": 20, "height": 10, "type": "rectangle"}
             ]}
        ]"#;
        let layers: Vec<Layer> = serde_json::from_str(json).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(layers[0].is_group());
        assert_eq!(layers[0].name, "Card");
        let children = layers[0].children();
        assert_eq!(children[0].kind, LayerKind::Text);
        assert_eq!(children[1].kind, LayerKind::Other);
        assert_eq!(children[1].rect(), Rect::new(30.0, 4.0, 50.0, 14.0));
    }
}
