// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting a screen's hotspots between fixed header, fixed footer, and the
//! scrolling body.
//!
//! All comparisons happen in display space (raw pixels times zoom). With `top`
//! and `bottom` the hotspot's display extent, `header` the header height and
//! `footer_top` the display y of the footer's top edge:
//!
//! - header: `header > 0 && top < header`
//! - footer: `footer > 0 && footer_top > 0 && (top >= footer_top || bottom > footer_top)`
//! - body: in neither band, or `bottom > header` while in the header, or
//!   `top < footer_top` while in the footer.
//!
//! A hotspot starting exactly on the header's bottom edge is body-only; one
//! ending exactly on the footer's top edge is body-only.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{Hotspot, Screen};

bitflags::bitflags! {
    /// Regions a hotspot is interactive in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Regions: u8 {
        /// The fixed header band.
        const HEADER = 0b0000_0001;
        /// The fixed footer band.
        const FOOTER = 0b0000_0010;
        /// The scrolling body.
        const BODY   = 0b0000_0100;
    }
}

/// A hotspot placed in one region, with `y` in that region's raw coordinates.
///
/// Footer placements of top-aligned hotspots are rebased so `y` is relative to
/// the footer's top edge. Everything else keeps the authored `y`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placed<'a> {
    /// The hotspot.
    pub hotspot: &'a Hotspot,
    /// Raw `y` within the region.
    pub y: f64,
}

impl Placed<'_> {
    /// Raw rectangle within the region, honoring bottom alignment relative to
    /// a region of `region_height` raw pixels.
    pub fn rect_in(&self, region_height: f64) -> Rect {
        let h = self.hotspot;
        let top = if h.is_bottom_aligned {
            region_height - self.y - h.height
        } else {
            self.y
        };
        Rect::from_origin_size((h.x, top), (h.width, h.height))
    }
}

/// Hotspots of one screen, bucketed by region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition<'a> {
    /// Hotspots shown in the fixed header.
    pub header: Vec<Placed<'a>>,
    /// Hotspots shown in the fixed footer.
    pub footer: Vec<Placed<'a>>,
    /// Hotspots shown in the scrolling body.
    pub body: Vec<Placed<'a>>,
}

/// Display-space top edge of `hotspot` on a screen `screen_height` raw pixels tall.
pub fn display_top(hotspot: &Hotspot, screen_height: f64, zoom: f64) -> f64 {
    let raw = if hotspot.is_bottom_aligned {
        screen_height - hotspot.y - hotspot.height
    } else {
        hotspot.y
    };
    raw * zoom
}

/// Regions `hotspot` belongs to on `screen`.
///
/// Free-scroll screens put everything in the body.
pub fn classify(hotspot: &Hotspot, screen: &Screen, zoom: f64) -> Regions {
    let Some(fixed) = screen.fixed else {
        return Regions::BODY;
    };

    let top = display_top(hotspot, screen.height, zoom);
    let bottom = top + hotspot.height * zoom;
    let header = fixed.fixed_header_height * zoom;
    let footer = fixed.fixed_footer_height * zoom;
    let footer_top = (screen.height - fixed.fixed_footer_height) * zoom;

    let mut regions = Regions::empty();
    if header > 0.0 && top < header {
        regions |= Regions::HEADER;
    }
    if footer > 0.0 && footer_top > 0.0 && (top >= footer_top || bottom > footer_top) {
        regions |= Regions::FOOTER;
    }

    let in_header = regions.contains(Regions::HEADER);
    let in_footer = regions.contains(Regions::FOOTER);
    if (!in_header && !in_footer)
        || (in_header && bottom > header)
        || (in_footer && top < footer_top)
    {
        regions |= Regions::BODY;
    }
    regions
}

/// Bucket `hotspots` by region. A straddling hotspot appears in every region it touches.
pub fn partition<'a>(hotspots: &'a [Hotspot], screen: &Screen, zoom: f64) -> Partition<'a> {
    let mut out = Partition::default();
    let footer_origin = screen.height - screen.footer_height();
    for hotspot in hotspots {
        let regions = classify(hotspot, screen, zoom);
        let placed = Placed {
            hotspot,
            y: hotspot.y,
        };
        if regions.contains(Regions::HEADER) {
            out.header.push(placed);
        }
        if regions.contains(Regions::FOOTER) {
            let y = if hotspot.is_bottom_aligned {
                hotspot.y
            } else {
                hotspot.y - footer_origin
            };
            out.footer.push(Placed { hotspot, y });
        }
        if regions.contains(Regions::BODY) {
            out.body.push(placed);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventType, HotspotId, ScreenId, Target};
    use alloc::vec;

    fn screen() -> Screen {
        // 800 tall: header 0..100, footer 700..800.
        Screen::new(ScreenId(1), 400.0, 800.0, "s.png").with_fixed(100.0, 100.0)
    }

    fn at(id: u64, y: f64, height: f64) -> Hotspot {
        Hotspot::new(
            HotspotId(id),
            ScreenId(1),
            Rect::from_origin_size((0.0, y), (50.0, height)),
            EventType::Click,
            Target::NextScreenInSort,
        )
    }

    fn ids(v: &[Placed<'_>]) -> Vec<u64> {
        v.iter().map(|p| p.hotspot.id.0).collect()
    }

    #[test]
    fn bottom_aligned_top_is_flipped_then_zoomed() {
        let h = at(1, 30.0, 20.0).bottom_aligned();
        for zoom in [0.5, 1.0, 2.0] {
            assert_eq!(display_top(&h, 800.0, zoom), (800.0 - 30.0 - 20.0) * zoom);
        }
    }

    #[test]
    fn middle_hotspot_is_body_only() {
        let hs = vec![at(1, 300.0, 50.0)];
        for zoom in [0.5, 1.0, 3.0] {
            let p = partition(&hs, &screen(), zoom);
            assert!(p.header.is_empty());
            assert!(p.footer.is_empty());
            assert_eq!(ids(&p.body), vec![1]);
        }
    }

    #[test]
    fn header_straddler_is_in_header_and_body() {
        let hs = vec![at(1, 80.0, 40.0)];
        let p = partition(&hs, &screen(), 1.0);
        assert_eq!(ids(&p.header), vec![1]);
        assert_eq!(ids(&p.body), vec![1]);
        assert!(p.footer.is_empty());
    }

    #[test]
    fn header_contained_is_header_only() {
        let hs = vec![at(1, 10.0, 40.0)];
        let p = partition(&hs, &screen(), 1.0);
        assert_eq!(ids(&p.header), vec![1]);
        assert!(p.body.is_empty());
    }

    #[test]
    fn footer_straddler_is_in_footer_and_body_and_rebased() {
        let hs = vec![at(1, 680.0, 40.0)];
        let p = partition(&hs, &screen(), 1.0);
        assert_eq!(ids(&p.footer), vec![1]);
        assert_eq!(ids(&p.body), vec![1]);
        assert_eq!(p.footer[0].y, -20.0);
        assert_eq!(p.body[0].y, 680.0);
    }

    #[test]
    fn footer_contained_is_footer_only() {
        let hs = vec![at(1, 720.0, 40.0)];
        let p = partition(&hs, &screen(), 2.0);
        assert_eq!(ids(&p.footer), vec![1]);
        assert_eq!(p.footer[0].y, 20.0);
        assert_eq!(p.footer[0].rect_in(100.0), Rect::new(0.0, 20.0, 50.0, 60.0));
        assert!(p.body.is_empty());
    }

    #[test]
    fn bottom_aligned_footer_hotspot_keeps_y() {
        // 10 from the bottom, 30 tall: occupies 760..790.
        let hs = vec![at(1, 10.0, 30.0).bottom_aligned()];
        let p = partition(&hs, &screen(), 1.0);
        assert_eq!(ids(&p.footer), vec![1]);
        assert_eq!(p.footer[0].y, 10.0);
        assert_eq!(p.footer[0].rect_in(100.0), Rect::new(0.0, 60.0, 50.0, 90.0));
        assert!(p.header.is_empty());
        assert!(p.body.is_empty());
    }

    #[test]
    fn exact_boundaries() {
        let s = screen();
        // Starts on the header's bottom edge: body only.
        assert_eq!(classify(&at(1, 100.0, 10.0), &s, 1.0), Regions::BODY);
        // Ends on the header's bottom edge: header only.
        assert_eq!(classify(&at(2, 90.0, 10.0), &s, 1.0), Regions::HEADER);
        // Ends on the footer's top edge: body only.
        assert_eq!(classify(&at(3, 690.0, 10.0), &s, 1.0), Regions::BODY);
        // Starts on the footer's top edge: footer only.
        assert_eq!(classify(&at(4, 700.0, 10.0), &s, 1.0), Regions::FOOTER);
    }

    #[test]
    fn full_height_hotspot_touches_all_regions() {
        let r = classify(&at(1, 0.0, 800.0), &screen(), 1.0);
        assert_eq!(r, Regions::HEADER | Regions::FOOTER | Regions::BODY);
    }

    #[test]
    fn free_scroll_screen_puts_everything_in_body() {
        let s = Screen::new(ScreenId(1), 400.0, 800.0, "s.png");
        let hs = vec![at(1, 0.0, 10.0), at(2, 790.0, 10.0)];
        let p = partition(&hs, &s, 1.0);
        assert_eq!(ids(&p.body), vec![1, 2]);
        assert!(p.header.is_empty() && p.footer.is_empty());
    }

    #[test]
    fn zero_height_bands_are_skipped() {
        let s = Screen::new(ScreenId(1), 400.0, 800.0, "s.png").with_fixed(0.0, 0.0);
        assert_eq!(classify(&at(1, 0.0, 10.0), &s, 1.0), Regions::BODY);
        assert_eq!(classify(&at(2, 795.0, 10.0), &s, 1.0), Regions::BODY);
    }
}
