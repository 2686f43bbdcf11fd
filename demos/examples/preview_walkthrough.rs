// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview mode: decode a screen's hotspots, split them by fixed region, and
//! follow a few of them the way a host router would.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p clickthrough_demos --example preview_walkthrough`

use clickthrough_hotspots::{
    Action, Hotspot, HotspotReveal, Interaction, NavigationContext, ProjectId, Screen, ScreenId,
    partition, resolve,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SCREENS: &str = r#"[
    {"id": 1, "name": "Home", "width": 375, "height": 812, "imageUrl": "home.png",
     "sort": 0, "fixedHeaderHeight": 88, "fixedFooterHeight": 83},
    {"id": 2, "name": "Detail", "width": 375, "height": 1400, "imageUrl": "detail.png", "sort": 1},
    {"id": 3, "name": "Menu", "width": 240, "height": 300, "imageUrl": "menu.png", "sort": 2}
]"#;

const HOTSPOTS: &str = r#"[
    {"id": 10, "screenID": 1, "x": 8, "y": 40, "width": 40, "height": 40,
     "eventType": "click", "targetType": "screenOverlay", "targetScreenID": 3,
     "overlay": {"position": "Top Right", "offset": {"x": 0, "y": 0}}},
    {"id": 11, "screenID": 1, "x": 16, "y": 300, "width": 343, "height": 120,
     "eventType": "click", "targetType": "screen", "targetScreenID": 2},
    {"id": 12, "screenID": 1, "x": 0, "y": 20, "width": 94, "height": 49,
     "eventType": "click", "targetType": "nextScreenInSort", "isBottomAligned": true},
    {"id": 13, "screenID": 1, "x": 16, "y": 600, "width": 100, "height": 20,
     "eventType": "pressHold", "targetType": "positionOnScreen",
     "scrollOffset": 0, "isSmoothScroll": true}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let screens: Vec<Screen> = serde_json::from_str(SCREENS)?;
    let hotspots: Vec<Hotspot> = serde_json::from_str(HOTSPOTS)?;
    let zoom = 1.0;

    let home = &screens[0];
    let regions = partition(&hotspots, home, zoom);
    info!(
        header = regions.header.len(),
        footer = regions.footer.len(),
        body = regions.body.len(),
        "partitioned {}",
        home.asset_path("api/static"),
    );

    let mut ctx = NavigationContext::new(ProjectId(1), home, &screens);
    ctx.zoom = zoom;
    for hotspot in &hotspots {
        if !hotspot.responds_to(Interaction::Click) {
            info!(hotspot = %hotspot.id, "ignores clicks");
            continue;
        }
        match resolve(hotspot, &ctx) {
            Ok(Action::Navigate(request)) => {
                info!(hotspot = %hotspot.id, path = %request.path(), "navigate");
                if let Some(next) = ctx.arrive(&request) {
                    info!(screen = %next.screen.id, history = ?next.history, "arrived");
                }
            }
            Ok(Action::PresentOverlay { screen, anchor, kind }) => {
                info!(hotspot = %hotspot.id, screen = %screen.id, ?anchor, ?kind, "overlay");
            }
            Ok(other) => info!(hotspot = %hotspot.id, action = ?other, "action"),
            Err(reason) => info!(hotspot = %hotspot.id, %reason, "no-op"),
        }
    }

    // A click on empty body area reveals hotspots for a moment.
    let mut reveal = HotspotReveal::new();
    if let Some(token) = reveal.on_region_click(false, 0) {
        info!(deadline = token.deadline, "hotspots revealed");
    }
    for now in [250, 500] {
        if reveal.poll(now) {
            info!(now, "hotspots hidden");
        }
    }

    let detail = screens.iter().find(|s| s.id == ScreenId(2)).ok_or("missing detail screen")?;
    info!(free_scroll = detail.fixed.is_none(), "detail screen");
    Ok(())
}
