// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened, depth-tagged view of a layer tree.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::types::{Layer, LayerId};

/// A layer paired with its nesting depth in a flattened view.
#[derive(Copy, Clone, Debug)]
pub struct FlatLayer<'a> {
    /// The layer.
    pub layer: &'a Layer,
    /// Nesting depth; roots are 0. Used as stacking priority.
    pub depth: u32,
}

/// Flatten `layers` in pre-order: each layer, then its children one level deeper.
///
/// If `selected` is a group, its children are appended once more after the
/// full traversal, at the depth they occupy in the tree (or from depth 0 when
/// the group is not part of `layers`). This keeps a selected group's contents
/// pickable on top of everything else at the same depth. No other layer is
/// duplicated.
pub fn flatten<'a>(layers: &'a [Layer], selected: Option<&'a Layer>) -> Vec<FlatLayer<'a>> {
    let mut out = Vec::new();
    push_preorder(layers, 0, &mut out);

    if let Some(group) = selected.filter(|l| l.is_group()) {
        let base = out
            .iter()
            .find(|f| f.layer.id == group.id)
            .map_or(0, |f| f.depth + 1);
        push_preorder(group.children(), base, &mut out);
    }
    out
}

fn push_preorder<'a>(layers: &'a [Layer], depth: u32, out: &mut Vec<FlatLayer<'a>>) {
    for layer in layers {
        out.push(FlatLayer { layer, depth });
        push_preorder(layer.children(), depth + 1, out);
    }
}

/// Groups whose direct children include a layer with identity `id`.
///
/// Each group is reported once even when the flattened view lists it twice.
pub fn find_ancestor_groups<'a>(id: LayerId, flat: &[FlatLayer<'a>]) -> SmallVec<[&'a Layer; 2]> {
    let mut found: SmallVec<[&'a Layer; 2]> = SmallVec::new();
    for f in flat {
        if f.layer.is_group()
            && f.layer.children().iter().any(|c| c.id == id)
            && !found.iter().any(|g| g.id == f.layer.id)
        {
            found.push(f.layer);
        }
    }
    found
}

/// Find a layer anywhere in the tree by identity (first match in pre-order).
pub fn find_layer(layers: &[Layer], id: LayerId) -> Option<&Layer> {
    for layer in layers {
        if layer.id == id {
            return Some(layer);
        }
        if let Some(found) = find_layer(layer.children(), id) {
            return Some(found);
        }
    }
    None
}
