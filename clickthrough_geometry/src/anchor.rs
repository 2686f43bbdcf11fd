// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay anchoring relative to a trigger rectangle.

use kurbo::{Rect, Size, Vec2};

/// Named placement of an overlay relative to its trigger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayPosition {
    /// Offsets are taken from [`OverlaySpec::offset`].
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Custom"))]
    Custom,
    /// Centered horizontally above the trigger.
    #[cfg_attr(feature = "serde", serde(rename = "Centered"))]
    Centered,
    /// Above the trigger, aligned to its leading edge.
    #[cfg_attr(feature = "serde", serde(rename = "Top Left"))]
    TopLeft,
    /// Above the trigger, centered.
    #[cfg_attr(feature = "serde", serde(rename = "Top Center"))]
    TopCenter,
    /// Above the trigger, aligned to its trailing edge.
    #[cfg_attr(feature = "serde", serde(rename = "Top Right"))]
    TopRight,
    /// Below the trigger, aligned to its leading edge.
    #[cfg_attr(feature = "serde", serde(rename = "Bottom Left"))]
    BottomLeft,
    /// Below the trigger, centered.
    #[cfg_attr(feature = "serde", serde(rename = "Bottom Center"))]
    BottomCenter,
    /// Below the trigger, aligned to its trailing edge.
    #[cfg_attr(feature = "serde", serde(rename = "Bottom Right"))]
    BottomRight,
}

impl OverlayPosition {
    /// All presets, in the order authoring tools list them.
    pub const ALL: [Self; 8] = [
        Self::Custom,
        Self::Centered,
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Display title of the preset.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Centered => "Centered",
            Self::TopLeft => "Top Left",
            Self::TopCenter => "Top Center",
            Self::TopRight => "Top Right",
            Self::BottomLeft => "Bottom Left",
            Self::BottomCenter => "Bottom Center",
            Self::BottomRight => "Bottom Right",
        }
    }

    /// Look a preset up by its display title.
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.title() == title)
    }

    /// Side and alignment for this preset.
    ///
    /// [`OverlayPosition::Custom`] anchors top/start; its placement comes from
    /// the offsets computed by [`overlay_anchor`].
    pub const fn side_align(self) -> (Side, Align) {
        match self {
            Self::Custom | Self::TopLeft => (Side::Top, Align::Start),
            Self::Centered | Self::TopCenter => (Side::Top, Align::Center),
            Self::TopRight => (Side::Top, Align::End),
            Self::BottomLeft => (Side::Bottom, Align::Start),
            Self::BottomCenter => (Side::Bottom, Align::Center),
            Self::BottomRight => (Side::Bottom, Align::End),
        }
    }
}

/// Overlay metadata carried by an overlay hotspot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OverlaySpec {
    /// Named placement.
    pub position: OverlayPosition,
    /// Custom offset, in display pixels. Only consulted for [`OverlayPosition::Custom`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: Vec2,
}

/// Side of the trigger an overlay attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
}

/// Alignment of the overlay along the attached side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Leading edges line up.
    Start,
    /// Centers line up.
    Center,
    /// Trailing edges line up.
    End,
}

/// Anchor handed to the presentation layer for drawing a floating panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayAnchor {
    /// Side of the trigger.
    pub side: Side,
    /// Alignment along that side.
    pub align: Align,
    /// Offset along the side, in display pixels.
    pub offset_along: f64,
    /// Offset away from the side, in display pixels.
    pub offset_across: f64,
}

/// Compute the anchor for an overlay of `overlay` raw size, triggered by the
/// raw-space `trigger` rectangle.
///
/// Presets map to a fixed side/alignment with zero offsets. The
/// [`OverlayPosition::Custom`] preset anchors top/start and pulls the panel
/// back to the screen origin before applying `custom_offset`: along the side
/// the offset is `custom.x - trigger.x`, across it is
/// `trigger.y - overlay.height / 2 - custom.y`, with trigger and overlay
/// dimensions scaled by `zoom`.
///
/// ```rust
/// use kurbo::{Rect, Size, Vec2};
/// use clickthrough_geometry::{Align, OverlayPosition, Side, overlay_anchor};
///
/// let trigger = Rect::from_origin_size((40.0, 100.0), (20.0, 10.0));
/// let a = overlay_anchor(trigger, Size::new(200.0, 80.0), OverlayPosition::TopRight, Vec2::ZERO, 2.0);
/// assert_eq!((a.side, a.align), (Side::Top, Align::End));
/// ```
#[must_use]
pub fn overlay_anchor(
    trigger: Rect,
    overlay: Size,
    position: OverlayPosition,
    custom_offset: Vec2,
    zoom: f64,
) -> OverlayAnchor {
    let (side, align) = position.side_align();
    let (offset_along, offset_across) = match position {
        OverlayPosition::Custom => (
            custom_offset.x - trigger.x0 * zoom,
            trigger.y0 * zoom - overlay.height * zoom / 2.0 - custom_offset.y,
        ),
        _ => (0.0, 0.0),
    };
    OverlayAnchor {
        side,
        align,
        offset_along,
        offset_across,
    }
}
