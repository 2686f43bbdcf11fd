// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a triggered hotspot into a navigation action.

use alloc::format;
use alloc::string::String;

use clickthrough_geometry::{OverlayAnchor, overlay_anchor};
use kurbo::Size;

use crate::types::{EventType, Hotspot, ProjectId, Screen, ScreenId, Target};

/// Single-hop navigation history carried alongside every navigation.
///
/// The router must hand this payload back unmodified as part of the next
/// [`NavigationContext`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct History {
    /// Screen the user navigated away from.
    pub previous_screen_id: Option<ScreenId>,
}

/// Ambient state for one resolution.
#[derive(Copy, Clone, Debug)]
pub struct NavigationContext<'a> {
    /// Current project.
    pub project_id: ProjectId,
    /// Screen being viewed.
    pub screen: &'a Screen,
    /// The project's screens, in sort order.
    pub screens: &'a [Screen],
    /// History payload received with the current navigation.
    pub history: History,
    /// The view is embedded in an overlay of another screen.
    pub embedded: bool,
    /// Zoom applied to the current view.
    pub zoom: f64,
}

impl<'a> NavigationContext<'a> {
    /// A top-level context at zoom 1 with no history.
    pub fn new(project_id: ProjectId, screen: &'a Screen, screens: &'a [Screen]) -> Self {
        Self {
            project_id,
            screen,
            screens,
            history: History::default(),
            embedded: false,
            zoom: 1.0,
        }
    }

    /// The context after the router has carried out `request`.
    ///
    /// Returns `None` if the destination is not among `screens`.
    pub fn arrive(&self, request: &NavigationRequest) -> Option<Self> {
        let screen = self.screens.iter().find(|s| s.id == request.screen_id)?;
        Some(Self {
            project_id: request.project_id,
            screen,
            history: request.history,
            ..*self
        })
    }
}

/// A request to the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Destination project.
    pub project_id: ProjectId,
    /// Destination screen.
    pub screen_id: ScreenId,
    /// Payload to round-trip into the next context.
    pub history: History,
}

impl NavigationRequest {
    /// Route of the destination's preview.
    pub fn path(&self) -> String {
        format!("/projects/{}/{}/preview", self.project_id, self.screen_id)
    }
}

/// How a same-screen scroll is performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animated.
    Smooth,
    /// Immediate.
    Instant,
}

/// How an overlay is presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Shown while hovering the trigger.
    Tooltip,
    /// Toggled by the trigger's gesture.
    Popover,
}

/// The one thing a triggered hotspot does.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Navigate to another screen.
    Navigate(NavigationRequest),
    /// Close the overlay this view is embedded in.
    CloseOverlay,
    /// Open an external page in an isolated context (no opener, no referrer).
    OpenExternal {
        /// Address to open.
        url: String,
    },
    /// Scroll the current screen's viewport.
    ScrollTo {
        /// Vertical offset, already adjusted for the fixed header.
        top: f64,
        /// Animation.
        behavior: ScrollBehavior,
    },
    /// Show another screen in a floating panel anchored to the hotspot.
    PresentOverlay {
        /// Screen to show.
        screen: Screen,
        /// Anchor relative to the hotspot.
        anchor: OverlayAnchor,
        /// Presentation style.
        kind: OverlayKind,
    },
}

/// Why a hotspot resolved to no action. None of these change any state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Unresolved {
    /// `lastScreenVisited` without any history.
    #[error("no previously visited screen")]
    NoHistory,
    /// `lastScreenVisited` whose history already names the current top-level screen.
    #[error("already on previously visited screen {0}")]
    AlreadyOnPreviousScreen(ScreenId),
    /// The current screen is not part of the sort order.
    #[error("screen {0} is not in the project's screen order")]
    NotInOrder(ScreenId),
    /// Relative navigation past the first or last screen.
    #[error("no screen {direction} screen {from} in sort order")]
    NoAdjacentScreen {
        /// Screen the navigation started from.
        from: ScreenId,
        /// `"before"` or `"after"`.
        direction: &'static str,
    },
    /// The overlay's screen is not among the project's screens.
    #[error("overlay screen {0} not found")]
    OverlayScreenMissing(ScreenId),
}

/// Resolve a triggered `hotspot` against `ctx`.
///
/// Every navigation records the current screen as the next context's
/// previous screen. `Err` means "do nothing"; it is logged at debug level.
pub fn resolve(hotspot: &Hotspot, ctx: &NavigationContext<'_>) -> Result<Action, Unresolved> {
    let result = resolve_target(hotspot, ctx);
    if let Err(reason) = &result {
        tracing::debug!(hotspot = %hotspot.id, screen = %ctx.screen.id, %reason, "hotspot is a no-op");
    }
    result
}

fn resolve_target(hotspot: &Hotspot, ctx: &NavigationContext<'_>) -> Result<Action, Unresolved> {
    match &hotspot.target {
        Target::Screen { target_screen_id } => Ok(navigate(ctx, *target_screen_id)),
        Target::LastScreenVisited => {
            let previous = ctx.history.previous_screen_id.ok_or(Unresolved::NoHistory)?;
            if previous != ctx.screen.id {
                Ok(navigate(ctx, previous))
            } else if ctx.embedded {
                Ok(Action::CloseOverlay)
            } else {
                Err(Unresolved::AlreadyOnPreviousScreen(previous))
            }
        }
        Target::PreviousScreenInSort => adjacent(ctx, Step::Backward),
        Target::NextScreenInSort => adjacent(ctx, Step::Forward),
        Target::ExternalUrl { url } => Ok(Action::OpenExternal { url: url.clone() }),
        Target::PositionOnScreen {
            scroll_offset,
            is_smooth_scroll,
        } => Ok(Action::ScrollTo {
            top: scroll_offset - ctx.screen.header_height(),
            behavior: if *is_smooth_scroll {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Instant
            },
        }),
        Target::ScreenOverlay {
            target_screen_id,
            overlay,
        } => {
            let screen = ctx
                .screens
                .iter()
                .find(|s| s.id == *target_screen_id)
                .ok_or(Unresolved::OverlayScreenMissing(*target_screen_id))?;
            let anchor = overlay_anchor(
                hotspot.rect(),
                Size::new(screen.width, screen.height),
                overlay.position,
                overlay.offset,
                ctx.zoom,
            );
            let kind = match hotspot.event_type {
                EventType::Hover => OverlayKind::Tooltip,
                _ => OverlayKind::Popover,
            };
            Ok(Action::PresentOverlay {
                screen: screen.clone(),
                anchor,
                kind,
            })
        }
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn adjacent(ctx: &NavigationContext<'_>, step: Step) -> Result<Action, Unresolved> {
    let from = ctx.screen.id;
    let pos = ctx
        .screens
        .iter()
        .position(|s| s.id == from)
        .ok_or(Unresolved::NotInOrder(from))?;
    let (next, direction) = match step {
        Step::Forward => (pos.checked_add(1), "after"),
        Step::Backward => (pos.checked_sub(1), "before"),
    };
    let screen = next
        .and_then(|i| ctx.screens.get(i))
        .ok_or(Unresolved::NoAdjacentScreen { from, direction })?;
    Ok(navigate(ctx, screen.id))
}

fn navigate(ctx: &NavigationContext<'_>, screen_id: ScreenId) -> Action {
    Action::Navigate(NavigationRequest {
        project_id: ctx.project_id,
        screen_id,
        history: History {
            previous_screen_id: Some(ctx.screen.id),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HotspotId;
    use alloc::vec;
    use alloc::vec::Vec;
    use clickthrough_geometry::{Align, OverlayPosition, OverlaySpec, Side};
    use kurbo::{Rect, Vec2};

    fn screens() -> Vec<Screen> {
        vec![
            Screen::new(ScreenId(10), 375.0, 812.0, "a.png"),
            Screen::new(ScreenId(20), 375.0, 812.0, "b.png").with_fixed(64.0, 0.0),
            Screen::new(ScreenId(30), 300.0, 200.0, "c.png"),
        ]
    }

    fn hotspot(target: Target) -> Hotspot {
        Hotspot::new(
            HotspotId(1),
            ScreenId(10),
            Rect::new(40.0, 100.0, 60.0, 120.0),
            EventType::Click,
            target,
        )
    }

    fn request(action: Result<Action, Unresolved>) -> NavigationRequest {
        match action {
            Ok(Action::Navigate(r)) => r,
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn absolute_navigation_records_history_and_back_returns() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        let forward = request(resolve(
            &hotspot(Target::Screen {
                target_screen_id: ScreenId(20),
            }),
            &ctx,
        ));
        assert_eq!(forward.screen_id, ScreenId(20));
        assert_eq!(forward.history.previous_screen_id, Some(ScreenId(10)));

        let next = ctx.arrive(&forward).unwrap();
        assert_eq!(next.screen.id, ScreenId(20));
        let back = request(resolve(&hotspot(Target::LastScreenVisited), &next));
        assert_eq!(back.screen_id, ScreenId(10));
        assert_eq!(back.history.previous_screen_id, Some(ScreenId(20)));
    }

    #[test]
    fn last_visited_without_history_is_a_no_op() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        assert_eq!(
            resolve(&hotspot(Target::LastScreenVisited), &ctx),
            Err(Unresolved::NoHistory)
        );
    }

    #[test]
    fn last_visited_on_same_screen_closes_embedded_overlay() {
        let screens = screens();
        let mut ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        ctx.history.previous_screen_id = Some(ScreenId(10));
        assert_eq!(
            resolve(&hotspot(Target::LastScreenVisited), &ctx),
            Err(Unresolved::AlreadyOnPreviousScreen(ScreenId(10)))
        );
        ctx.embedded = true;
        assert_eq!(
            resolve(&hotspot(Target::LastScreenVisited), &ctx),
            Ok(Action::CloseOverlay)
        );
    }

    #[test]
    fn previous_in_sort_on_first_screen_is_a_no_op() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        assert_eq!(
            resolve(&hotspot(Target::PreviousScreenInSort), &ctx),
            Err(Unresolved::NoAdjacentScreen {
                from: ScreenId(10),
                direction: "before",
            })
        );
    }

    #[test]
    fn next_in_sort_on_last_screen_is_a_no_op() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[2], &screens);
        assert!(matches!(
            resolve(&hotspot(Target::NextScreenInSort), &ctx),
            Err(Unresolved::NoAdjacentScreen { .. })
        ));
    }

    #[test]
    fn relative_navigation_moves_one_step_and_records_history() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[1], &screens);
        let prev = request(resolve(&hotspot(Target::PreviousScreenInSort), &ctx));
        assert_eq!(prev.screen_id, ScreenId(10));
        assert_eq!(prev.history.previous_screen_id, Some(ScreenId(20)));
        let next = request(resolve(&hotspot(Target::NextScreenInSort), &ctx));
        assert_eq!(next.screen_id, ScreenId(30));
    }

    #[test]
    fn screen_outside_order_is_a_no_op() {
        let screens = screens();
        let stray = Screen::new(ScreenId(99), 1.0, 1.0, "x.png");
        let ctx = NavigationContext::new(ProjectId(1), &stray, &screens);
        assert_eq!(
            resolve(&hotspot(Target::NextScreenInSort), &ctx),
            Err(Unresolved::NotInOrder(ScreenId(99)))
        );
    }

    #[test]
    fn external_url_opens_outside() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        let url = String::from("https://example.com/");
        assert_eq!(
            resolve(&hotspot(Target::ExternalUrl { url: url.clone() }), &ctx),
            Ok(Action::OpenExternal { url })
        );
    }

    #[test]
    fn scroll_offset_accounts_for_fixed_header() {
        let screens = screens();
        let target = Target::PositionOnScreen {
            scroll_offset: 500.0,
            is_smooth_scroll: true,
        };
        let ctx = NavigationContext::new(ProjectId(1), &screens[1], &screens);
        assert_eq!(
            resolve(&hotspot(target.clone()), &ctx),
            Ok(Action::ScrollTo {
                top: 436.0,
                behavior: ScrollBehavior::Smooth,
            })
        );
        let target = Target::PositionOnScreen {
            scroll_offset: 500.0,
            is_smooth_scroll: false,
        };
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        assert_eq!(
            resolve(&hotspot(target), &ctx),
            Ok(Action::ScrollTo {
                top: 500.0,
                behavior: ScrollBehavior::Instant,
            })
        );
    }

    #[test]
    fn overlay_is_anchored_and_styled_by_event() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        let mut h = hotspot(Target::ScreenOverlay {
            target_screen_id: ScreenId(30),
            overlay: OverlaySpec {
                position: OverlayPosition::TopRight,
                offset: Vec2::ZERO,
            },
        });
        let Ok(Action::PresentOverlay {
            screen,
            anchor,
            kind,
        }) = resolve(&h, &ctx)
        else {
            panic!("expected overlay");
        };
        assert_eq!(screen.id, ScreenId(30));
        assert_eq!((anchor.side, anchor.align), (Side::Top, Align::End));
        assert_eq!(kind, OverlayKind::Popover);

        h.event_type = EventType::Hover;
        assert!(matches!(
            resolve(&h, &ctx),
            Ok(Action::PresentOverlay {
                kind: OverlayKind::Tooltip,
                ..
            })
        ));
    }

    #[test]
    fn missing_overlay_screen_is_a_no_op() {
        let screens = screens();
        let ctx = NavigationContext::new(ProjectId(1), &screens[0], &screens);
        let h = hotspot(Target::ScreenOverlay {
            target_screen_id: ScreenId(404),
            overlay: OverlaySpec::default(),
        });
        assert_eq!(
            resolve(&h, &ctx),
            Err(Unresolved::OverlayScreenMissing(ScreenId(404)))
        );
    }

    #[test]
    fn request_path_and_unresolved_messages() {
        let r = NavigationRequest {
            project_id: ProjectId(3),
            screen_id: ScreenId(12),
            history: History::default(),
        };
        assert_eq!(r.path(), "/projects/3/12/preview");
        let msg = format!(
            "{}",
            Unresolved::NoAdjacentScreen {
                from: ScreenId(10),
                direction: "before",
            }
        );
        assert_eq!(msg, "no screen before screen 10 in sort order");
    }
}
