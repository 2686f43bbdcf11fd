// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clickthrough Layers: design-inspection primitives over a nested layer tree.
//!
//! Exported design files describe a screen as a tree of [`Layer`]s: groups nest
//! children, everything else is a leaf. Inspection mode needs to answer
//! "which layer is under the pointer?" in a way that respects stacking and
//! lets the user click through the current selection to whatever lies beneath.
//!
//! - [`flatten`] produces a pre-order view of the tree tagged with nesting depth.
//!   Depth doubles as stacking priority: deeper layers are drawn later.
//! - [`hit_test`] picks the deepest layer whose display-space rectangle contains
//!   the pointer, never the current selection. Equal depth resolves to the later
//!   entry in the flattened sequence.
//! - [`ExpandedGroups`] tracks which groups are open in a layer panel and opens
//!   every ancestor of a newly selected layer.
//! - [`InspectSession`] ties these together with selection, hover, and
//!   drag-to-scroll state, driven from pointer and key callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use clickthrough_layers::{HitParams, Layer, LayerId, flatten, hit_test};
//!
//! let layers = vec![Layer::group(
//!     LayerId(1),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     vec![Layer::leaf(LayerId(2), Rect::new(10.0, 10.0, 20.0, 20.0))],
//! )];
//!
//! // Inspection renders layers at twice their raw size before zooming.
//! let params = HitParams::inspect(1.0);
//! let flat = flatten(&layers, None);
//! let hit = hit_test(Point::new(30.0, 30.0), &flat, None, &params).unwrap();
//! assert_eq!(hit.id, LayerId(2));
//!
//! // With the leaf selected, the same pointer falls through to its group.
//! let hit = hit_test(Point::new(30.0, 30.0), &flat, Some(LayerId(2)), &params).unwrap();
//! assert_eq!(hit.id, LayerId(1));
//! ```
//!
//! Trees are expected to be small (tens to low hundreds of layers); the
//! flattened view is rebuilt on every query rather than cached.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod expand;
mod hit;
mod index;
mod session;
mod types;

pub use drag::{Cursor, DragScroll};
pub use expand::ExpandedGroups;
pub use hit::{HitParams, hit_test};
pub use index::{FlatLayer, find_ancestor_groups, find_layer, flatten};
pub use session::{Button, DownOutcome, InspectSession, MoveOutcome, PRIMARY_BUTTON};
pub use types::{Layer, LayerId, LayerKind};
