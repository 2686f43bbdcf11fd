// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clickthrough Hotspots: the interactive core of a prototype preview.
//!
//! A prototype is a set of static [`Screen`] images annotated with rectangular
//! [`Hotspot`]s. Triggering a hotspot navigates somewhere: another screen, the
//! previously visited screen, a sibling in sort order, an external page, a
//! scroll position on the same screen, or an overlay anchored to the hotspot.
//!
//! - [`resolve`] turns a triggered hotspot plus a [`NavigationContext`] into
//!   exactly one [`Action`], or an [`Unresolved`] reason when the action is a
//!   no-op.
//! - [`partition`] splits a screen's hotspots between its fixed header, fixed
//!   footer, and scrolling body. Hotspots straddling a boundary are placed in
//!   both regions they touch.
//! - [`HotspotReveal`] briefly shows all hotspots after a click that missed
//!   them.
//!
//! Routing, rendering, and data fetching are left to the host. The host applies
//! the returned [`Action`] and round-trips the [`History`] payload of every
//! [`NavigationRequest`] back into the next [`NavigationContext`].
//!
//! ## Minimal example
//!
//! ```rust
//! use clickthrough_hotspots::{
//!     Action, EventType, History, Hotspot, HotspotId, NavigationContext, ProjectId, Screen,
//!     ScreenId, Target, resolve,
//! };
//! use kurbo::Rect;
//!
//! let screens = vec![
//!     Screen::new(ScreenId(1), 375.0, 812.0, "home.png"),
//!     Screen::new(ScreenId(2), 375.0, 812.0, "detail.png"),
//! ];
//! let ctx = NavigationContext::new(ProjectId(7), &screens[0], &screens);
//! let hotspot = Hotspot::new(
//!     HotspotId(1),
//!     ScreenId(1),
//!     Rect::new(0.0, 0.0, 100.0, 44.0),
//!     EventType::Click,
//!     Target::Screen { target_screen_id: ScreenId(2) },
//! );
//!
//! let Ok(Action::Navigate(request)) = resolve(&hotspot, &ctx) else {
//!     panic!("expected navigation");
//! };
//! assert_eq!(request.screen_id, ScreenId(2));
//! assert_eq!(request.history, History { previous_screen_id: Some(ScreenId(1)) });
//! assert_eq!(request.path(), "/projects/7/2/preview");
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support through `kurbo/libm`.
//! - `serde`: derives `Serialize`/`Deserialize` for the data model. Unknown
//!   target types are rejected when decoding.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod partition;
mod resolve;
mod reveal;
mod types;

pub use partition::{Partition, Placed, Regions, classify, display_top, partition};
pub use resolve::{
    Action, History, NavigationContext, NavigationRequest, OverlayKind, ScrollBehavior, Unresolved,
    resolve,
};
pub use reveal::{HotspotReveal, REVEAL_DELAY_MS, RevealToken};
pub use types::{
    EventType, FixedRegions, Hotspot, HotspotId, Interaction, ProjectId, Screen, ScreenId, Target,
};
