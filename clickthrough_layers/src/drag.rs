// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Space-bar drag-to-scroll state.

use kurbo::{Point, Vec2};

/// Cursor hint for the inspection canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Default cursor.
    Auto,
    /// Space is held; a drag can start.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Drag-to-scroll state machine.
///
/// Holding space arms dragging; a primary press then records the pointer and
/// the container's scroll offset, and every move recomputes the absolute
/// scroll as `start_scroll - (pointer - start_pointer)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragScroll {
    space_held: bool,
    dragging: bool,
    start_pointer: Point,
    start_scroll: Vec2,
}

impl DragScroll {
    /// Create an idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether space is currently held.
    pub const fn space_held(&self) -> bool {
        self.space_held
    }

    /// Whether a drag is in progress.
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record a space key transition. Releasing space always ends a drag.
    pub fn set_space(&mut self, pressed: bool) {
        self.space_held = pressed;
        if !pressed {
            self.dragging = false;
        }
    }

    /// Start a drag if space is held. Returns whether a drag started.
    pub fn begin(&mut self, pointer: Point, scroll: Vec2) -> bool {
        if !self.space_held {
            return false;
        }
        self.dragging = true;
        self.start_pointer = pointer;
        self.start_scroll = scroll;
        true
    }

    /// New absolute scroll offset for `pointer`, or `None` when not dragging.
    pub fn update(&self, pointer: Point) -> Option<Vec2> {
        self.dragging
            .then(|| self.start_scroll - (pointer - self.start_pointer))
    }

    /// End the drag unconditionally.
    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Cursor hint for the current state.
    pub const fn cursor(&self) -> Cursor {
        if self.dragging {
            Cursor::Grabbing
        } else if self.space_held {
            Cursor::Grab
        } else {
            Cursor::Auto
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_without_space_does_not_drag() {
        let mut d = DragScroll::new();
        assert!(!d.begin(Point::new(10.0, 10.0), Vec2::ZERO));
        assert_eq!(d.update(Point::new(20.0, 20.0)), None);
        assert_eq!(d.cursor(), Cursor::Auto);
    }

    #[test]
    fn drag_recomputes_absolute_scroll() {
        let mut d = DragScroll::new();
        d.set_space(true);
        assert_eq!(d.cursor(), Cursor::Grab);
        assert!(d.begin(Point::new(100.0, 100.0), Vec2::new(50.0, 200.0)));
        assert_eq!(d.cursor(), Cursor::Grabbing);
        assert_eq!(d.update(Point::new(90.0, 130.0)), Some(Vec2::new(60.0, 170.0)));
        // Absolute, not cumulative.
        assert_eq!(d.update(Point::new(90.0, 130.0)), Some(Vec2::new(60.0, 170.0)));
        assert_eq!(d.update(Point::new(100.0, 100.0)), Some(Vec2::new(50.0, 200.0)));
    }

    #[test]
    fn releasing_space_or_pointer_ends_drag() {
        let mut d = DragScroll::new();
        d.set_space(true);
        d.begin(Point::ORIGIN, Vec2::ZERO);
        d.end();
        assert!(!d.is_dragging());
        assert!(d.space_held());

        d.begin(Point::ORIGIN, Vec2::ZERO);
        d.set_space(false);
        assert!(!d.is_dragging());
        assert_eq!(d.cursor(), Cursor::Auto);
    }
}
