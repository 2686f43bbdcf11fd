// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expanded-group tracking for a layer panel.

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::index::{FlatLayer, find_ancestor_groups};
use crate::types::{Layer, LayerId};

/// Set of group layers currently expanded in the layer panel.
///
/// Selection only ever grows the set. Collapsing is an explicit affordance
/// ([`ExpandedGroups::collapse`], [`ExpandedGroups::toggle`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedGroups {
    ids: HashSet<LayerId>,
}

impl ExpandedGroups {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: LayerId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of expanded groups.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no group is expanded.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate expanded identifiers in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.ids.iter().copied()
    }

    /// Expand a single group. Returns `true` if it was not already expanded.
    pub fn expand(&mut self, id: LayerId) -> bool {
        self.ids.insert(id)
    }

    /// Collapse a single group. Returns `true` if it was expanded.
    pub fn collapse(&mut self, id: LayerId) -> bool {
        self.ids.remove(&id)
    }

    /// Flip a group's state. Returns the new state.
    pub fn toggle(&mut self, id: LayerId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Reveal `selected` in the panel: expand every ancestor group up to the
    /// root, and `selected` itself when it is a group.
    ///
    /// Returns the number of groups that were newly expanded.
    pub fn expand_for_selection(&mut self, selected: &Layer, flat: &[FlatLayer<'_>]) -> usize {
        let mut added = 0;
        if selected.is_group() && self.ids.insert(selected.id) {
            added += 1;
        }

        let mut visited: SmallVec<[LayerId; 8]> = SmallVec::new();
        let mut pending: SmallVec<[LayerId; 8]> = SmallVec::new();
        pending.push(selected.id);
        while let Some(id) = pending.pop() {
            for group in find_ancestor_groups(id, flat) {
                if visited.contains(&group.id) {
                    continue;
                }
                visited.push(group.id);
                if self.ids.insert(group.id) {
                    added += 1;
                }
                pending.push(group.id);
            }
        }
        added
    }
}
