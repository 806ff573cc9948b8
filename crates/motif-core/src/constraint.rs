//! Constraint engine: keeps the motif inside the garment bounds.
//!
//! Two different policies are applied on purpose:
//! - drags are clamped continuously, so the motif slides along an edge;
//! - resize steps are rejected outright once they leave the allowed region,
//!   so the box freezes at the limit until the gesture reverses.
//!
//! At the end of a resize [`finalize_resize`] applies one last corrective
//! clamp so the committed rectangle is always valid.

use crate::geometry::{Bounds, MIN_SIZE, Point, Rect, Size};

/// Clamps a proposed top-left drag position so a motif of `size` stays
/// inside `bounds`.
///
/// When `size` is larger than `bounds` on an axis the range is empty and
/// the lower bound wins: the motif is pinned to the bounds' leading edge.
pub fn clamp_drag_position(proposed: Point, size: Size, bounds: &Bounds) -> Point {
    Point {
        x: clamp_axis(proposed.x, size.width, bounds.x(), bounds.width()),
        y: clamp_axis(proposed.y, size.height, bounds.y(), bounds.height()),
    }
}

fn clamp_axis(value: f64, extent: f64, lo: f64, span: f64) -> f64 {
    let hi = lo + span;
    // max() last, so a degenerate range resolves to `lo`
    let mut pos = lo.max(value.min(hi - extent));
    // `hi - extent + extent` can round one ulp past `hi`
    while pos > lo && pos + extent > hi {
        pos = pos.next_down();
    }
    pos
}

/// Why a resize step was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeVerdict {
    Accepted,
    /// Width or height below [`MIN_SIZE`] (or not a finite number).
    TooSmall,
    /// Left or top edge crossed the bounds.
    OutsideLeadingEdge,
    /// Right or bottom edge crossed the bounds.
    OutsideTrailingEdge,
}

impl ResizeVerdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, ResizeVerdict::Accepted)
    }
}

/// Evaluates the resize rules in order; the first failing rule wins.
pub fn check_resize_box(new_box: &Rect, bounds: &Bounds) -> ResizeVerdict {
    if !new_box.is_finite() || new_box.width < MIN_SIZE || new_box.height < MIN_SIZE {
        return ResizeVerdict::TooSmall;
    }
    if new_box.x < bounds.x() || new_box.y < bounds.y() {
        return ResizeVerdict::OutsideLeadingEdge;
    }
    if new_box.right() > bounds.right() || new_box.bottom() > bounds.bottom() {
        return ResizeVerdict::OutsideTrailingEdge;
    }
    ResizeVerdict::Accepted
}

/// Returns `new_box` verbatim if it is a valid placement, else `old_box`.
///
/// Never returns a third value.
pub fn clamp_resize_box(old_box: Rect, new_box: Rect, bounds: &Bounds) -> Rect {
    match check_resize_box(&new_box, bounds) {
        ResizeVerdict::Accepted => new_box,
        verdict => {
            tracing::trace!(?verdict, ?new_box, "resize step rejected");
            old_box
        }
    }
}

/// Geometry of the transformed node at the moment a resize gesture ends.
///
/// A scene that resizes by scaling reports scale factors over the original
/// size; one that resizes by absolute size reports unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ResizeNode {
    /// A node with unit scale matching `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
}

/// Bakes the node's scale into an absolute size and re-clamps its position.
///
/// Returns the committed rectangle and the node with its scale reset to 1,
/// so later edits compose from absolute size rather than accumulated scale.
/// The scaled size is floored at [`MIN_SIZE`] and capped at the bounds'
/// dimensions, so the result always fits.
pub fn finalize_resize(node: ResizeNode, bounds: &Bounds) -> (Rect, ResizeNode) {
    let width = (node.width * sanitize_scale(node.scale_x))
        .max(MIN_SIZE)
        .min(bounds.width());
    let height = (node.height * sanitize_scale(node.scale_y))
        .max(MIN_SIZE)
        .min(bounds.height());

    let pos = clamp_drag_position(Point::new(node.x, node.y), Size::new(width, height), bounds);
    let rect = Rect::new(pos.x, pos.y, width, height);

    let reset = ResizeNode {
        x: pos.x,
        y: pos.y,
        width,
        height,
        scale_x: 1.0,
        scale_y: 1.0,
    };
    (rect, reset)
}
