// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspection mode: click through a nested layer tree, watching selection
//! cycle downward and ancestor groups expand.
//!
//! Run:
//! - `RUST_LOG=clickthrough_layers=debug cargo run -p clickthrough_demos --example inspect_walkthrough`

use clickthrough_geometry::ContainerMetrics;
use clickthrough_layers::{InspectSession, Layer, LayerId, PRIMARY_BUTTON};
use kurbo::{Insets, Point, Rect, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn layers() -> Vec<Layer> {
    vec![
        Layer::leaf(LayerId(1), Rect::new(0.0, 0.0, 375.0, 812.0)).named("Background"),
        Layer::group(
            LayerId(2),
            Rect::new(0.0, 0.0, 375.0, 88.0),
            vec![
                Layer::leaf(LayerId(3), Rect::new(0.0, 0.0, 375.0, 88.0)).named("Bar"),
                Layer::group(
                    LayerId(4),
                    Rect::new(8.0, 40.0, 48.0, 80.0),
                    vec![Layer::leaf(LayerId(5), Rect::new(16.0, 48.0, 40.0, 72.0)).named("Glyph")],
                )
                .named("Menu button"),
            ],
        )
        .named("Header"),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let layers = layers();
    let container = ContainerMetrics {
        origin: Point::new(0.0, 0.0),
        padding: Insets::uniform(24.0),
        scroll: Vec2::ZERO,
    };
    let mut session = InspectSession::new(0.5);

    // Display space is raw * zoom * 2, so raw (20, 60) lands at (20, 60) + padding.
    let client = Point::new(44.0, 84.0);
    for click in 1..=4 {
        let outcome = session.on_pointer_down(&layers, PRIMARY_BUTTON, client, Some(&container));
        session.on_pointer_up();
        let expanded: Vec<_> = session.expanded().iter().collect();
        info!(click, ?outcome, ?expanded, "pointer down");
    }

    session.on_space(true);
    session.on_pointer_down(&layers, PRIMARY_BUTTON, client, Some(&container));
    let moved = session.on_pointer_move(&layers, client + Vec2::new(0.0, -30.0), Some(&container));
    info!(?moved, cursor = ?session.cursor(), "dragging");
    session.on_pointer_up();
    session.on_space(false);
}
