// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen and hotspot data model, as supplied by the data-fetch layer.

use alloc::format;
use alloc::string::String;
use core::fmt;

use clickthrough_geometry::OverlaySpec;
use kurbo::Rect;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a project.
    ProjectId
);
numeric_id!(
    /// Identifier of a screen within a project.
    ScreenId
);
numeric_id!(
    /// Identifier of a hotspot.
    HotspotId
);

/// Heights of the bands that stay in place while the body scrolls.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FixedRegions {
    /// Fixed header height in raw pixels; 0 for none.
    pub fixed_header_height: f64,
    /// Fixed footer height in raw pixels; 0 for none.
    pub fixed_footer_height: f64,
}

/// One static page of a prototype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Screen {
    /// Identity.
    pub id: ScreenId,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Image width in raw pixels.
    pub width: f64,
    /// Image height in raw pixels.
    pub height: f64,
    /// Opaque image reference, resolved by the asset server.
    pub image_url: String,
    /// Position among the project's screens.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort: i64,
    /// Fixed header/footer bands. `None` for free-scroll screens.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fixed: Option<FixedRegions>,
}

impl Screen {
    /// A free-scroll screen.
    pub fn new(id: ScreenId, width: f64, height: f64, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: String::new(),
            width,
            height,
            image_url: image_url.into(),
            sort: 0,
            fixed: None,
        }
    }

    /// Add fixed header and footer bands.
    #[must_use]
    pub fn with_fixed(mut self, header: f64, footer: f64) -> Self {
        self.fixed = Some(FixedRegions {
            fixed_header_height: header,
            fixed_footer_height: footer,
        });
        self
    }

    /// Fixed header height, 0 for free-scroll screens.
    pub fn header_height(&self) -> f64 {
        self.fixed.map_or(0.0, |f| f.fixed_header_height)
    }

    /// Fixed footer height, 0 for free-scroll screens.
    pub fn footer_height(&self) -> f64 {
        self.fixed.map_or(0.0, |f| f.fixed_footer_height)
    }

    /// Path of the screen image under `asset_root`: `/<asset_root>/<image_url>`.
    pub fn asset_path(&self, asset_root: &str) -> String {
        format!(
            "/{}/{}",
            asset_root.trim_matches('/'),
            self.image_url.trim_start_matches('/')
        )
    }
}

/// Gesture a hotspot listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EventType {
    /// Single click or tap.
    Click,
    /// Double click or double tap.
    DoubleTap,
    /// Long press.
    PressHold,
    /// Swipe right.
    SwipeRight,
    /// Swipe left.
    SwipeLeft,
    /// Swipe up.
    SwipeUp,
    /// Swipe down.
    SwipeDown,
    /// Pointer hover.
    Hover,
    /// Fires after a delay.
    Timer,
}

/// Concrete interaction reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// A click.
    Click,
    /// A double click.
    DoubleClick,
    /// The pointer entered the hotspot.
    PointerEnter,
}

/// Where a hotspot leads. Each variant carries only its own metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "targetType", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum Target {
    /// A specific screen.
    Screen {
        /// Destination.
        #[cfg_attr(feature = "serde", serde(rename = "targetScreenID"))]
        target_screen_id: ScreenId,
    },
    /// The screen visited before the current one.
    LastScreenVisited,
    /// The screen before the current one in sort order.
    PreviousScreenInSort,
    /// The screen after the current one in sort order.
    NextScreenInSort,
    /// A page outside the prototype.
    ExternalUrl {
        /// Address to open.
        url: String,
    },
    /// A scroll position on the current screen.
    PositionOnScreen {
        /// Vertical offset in raw pixels.
        scroll_offset: f64,
        /// Animate the scroll.
        is_smooth_scroll: bool,
    },
    /// Another screen shown as an overlay anchored to the hotspot.
    ScreenOverlay {
        /// Screen shown in the overlay.
        #[cfg_attr(feature = "serde", serde(rename = "targetScreenID"))]
        target_screen_id: ScreenId,
        /// Placement of the overlay.
        overlay: OverlaySpec,
    },
}

/// A clickable region of a screen, in raw pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Hotspot {
    /// Identity.
    pub id: HotspotId,
    /// Owning screen.
    #[cfg_attr(feature = "serde", serde(rename = "screenID"))]
    pub screen_id: ScreenId,
    /// Left edge.
    pub x: f64,
    /// Top edge, or distance of the bottom edge from the screen bottom when
    /// `is_bottom_aligned` is set.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Gesture that triggers the hotspot.
    pub event_type: EventType,
    /// Destination and its metadata.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub target: Target,
    /// `y` is measured from the bottom of the screen.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_bottom_aligned: bool,
}

impl Hotspot {
    /// A top-aligned hotspot covering `rect`.
    pub fn new(
        id: HotspotId,
        screen_id: ScreenId,
        rect: Rect,
        event_type: EventType,
        target: Target,
    ) -> Self {
        Self {
            id,
            screen_id,
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            event_type,
            target,
            is_bottom_aligned: false,
        }
    }

    /// Mark `y` as measured from the screen bottom.
    #[must_use]
    pub fn bottom_aligned(mut self) -> Self {
        self.is_bottom_aligned = true;
        self
    }

    /// Raw-space rectangle as authored (`y` not flipped).
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

    /// Whether `interaction` triggers this hotspot.
    ///
    /// Only click, double tap, and hover are actionable.
    pub fn responds_to(&self, interaction: Interaction) -> bool {
        matches!(
            (self.event_type, interaction),
            (EventType::Click, Interaction::Click)
                | (EventType::DoubleTap, Interaction::DoubleClick)
                | (EventType::Hover, Interaction::PointerEnter)
        )
    }
}
