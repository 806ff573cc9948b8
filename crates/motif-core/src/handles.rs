//! Resize handle overlay geometry.
//!
//! Eight anchors sit on the motif's bounding box. Dragging an anchor moves
//! the edges it touches and keeps the opposite edges fixed, producing an
//! absolute candidate box for each pointer step.

use crate::geometry::{Point, Rect};

/// Side length of a rendered handle square.
pub const HANDLE_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeHandle {
    /// Corners come first so they win over edges when both are in reach.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::Top,
        ResizeHandle::Right,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft
                | ResizeHandle::TopRight
                | ResizeHandle::BottomRight
                | ResizeHandle::BottomLeft
        )
    }

    fn moves_left(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::Left | ResizeHandle::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, ResizeHandle::TopRight | ResizeHandle::Right | ResizeHandle::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::Top | ResizeHandle::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, ResizeHandle::BottomLeft | ResizeHandle::Bottom | ResizeHandle::BottomRight)
    }

    /// Centre of this handle on `rect`.
    pub fn anchor(self, rect: &Rect) -> Point {
        let x = if self.moves_left() {
            rect.x
        } else if self.moves_right() {
            rect.right()
        } else {
            rect.x + rect.width / 2.0
        };
        let y = if self.moves_top() {
            rect.y
        } else if self.moves_bottom() {
            rect.bottom()
        } else {
            rect.y + rect.height / 2.0
        };
        Point::new(x, y)
    }

    /// CSS cursor shown while hovering this handle.
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::BottomRight => "nwse-resize",
            ResizeHandle::TopRight | ResizeHandle::BottomLeft => "nesw-resize",
            ResizeHandle::Top | ResizeHandle::Bottom => "ns-resize",
            ResizeHandle::Left | ResizeHandle::Right => "ew-resize",
        }
    }

    /// Candidate box after dragging this handle by `delta` from `origin`.
    ///
    /// The result is not validated; it may be inverted or out of bounds.
    pub fn resize_candidate(self, origin: &Rect, delta: (f64, f64)) -> Rect {
        let (dx, dy) = delta;
        let mut r = *origin;
        if self.moves_left() {
            r.x = origin.x + dx;
            r.width = origin.width - dx;
        } else if self.moves_right() {
            r.width = origin.width + dx;
        }
        if self.moves_top() {
            r.y = origin.y + dy;
            r.height = origin.height - dy;
        } else if self.moves_bottom() {
            r.height = origin.height + dy;
        }
        r
    }
}

/// Finds the handle under `pointer`, if any.
pub fn hit_test_handles(rect: &Rect, pointer: Point, tolerance: f64) -> Option<ResizeHandle> {
    let reach = tolerance.max(HANDLE_SIZE / 2.0);
    ResizeHandle::ALL.into_iter().find(|handle| {
        let a = handle.anchor(rect);
        (pointer.x - a.x).abs() <= reach && (pointer.y - a.y).abs() <= reach
    })
}
