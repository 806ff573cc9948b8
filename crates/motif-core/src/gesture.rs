//! Pointer gesture state for the motif.
//!
//! Turns raw pointer down/move/up positions (canvas pixels) into calls on
//! the [`TransformStore`]. Holds only the in-flight gesture; committed state
//! lives in the store.

use crate::constraint::ResizeNode;
use crate::geometry::{Point, Rect};
use crate::handles::{ResizeHandle, hit_test_handles};
use crate::storage::KeyValueStorage;
use crate::store::TransformStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeHandle),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do: locked, missed the motif, or no gesture in progress.
    Ignored,
    Started(GestureKind),
    /// Live geometry to render.
    Updated(Rect),
    /// Gesture finished and its result was committed.
    Committed(Rect),
    /// Gesture dropped without touching the committed transform.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
enum ActiveGesture {
    Drag {
        start: Point,
        origin: Rect,
        live: Point,
    },
    Resize {
        handle: ResizeHandle,
        start: Point,
        origin: Rect,
        live: Rect,
    },
}

#[derive(Debug, Clone)]
pub struct GestureController {
    active: Option<ActiveGesture>,
    hovered: Option<ResizeHandle>,
    /// Whether the handle overlay is on screen. Handles are only hit-tested
    /// while it is.
    handles_attached: bool,
    tolerance: f64,
}

impl GestureController {
    pub fn new(tolerance: f64) -> Self {
        Self {
            active: None,
            hovered: None,
            handles_attached: true,
            tolerance,
        }
    }

    pub fn set_handles_attached(&mut self, attached: bool) {
        self.handles_attached = attached;
        if !attached {
            self.hovered = None;
        }
    }

    fn handle_at<S: KeyValueStorage>(&self, store: &TransformStore<S>, pointer: Point) -> Option<ResizeHandle> {
        if !self.handles_attached || !store.handles_visible() {
            return None;
        }
        hit_test_handles(&store.transform(), pointer, self.tolerance)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_kind(&self) -> Option<GestureKind> {
        self.active.map(|g| match g {
            ActiveGesture::Drag { .. } => GestureKind::Drag,
            ActiveGesture::Resize { handle, .. } => GestureKind::Resize(handle),
        })
    }

    pub fn hovered_handle(&self) -> Option<ResizeHandle> {
        self.hovered
    }

    /// Rectangle to draw right now: the in-flight geometry or the committed one.
    pub fn display_rect<S: KeyValueStorage>(&self, store: &TransformStore<S>) -> Rect {
        match self.active {
            Some(ActiveGesture::Drag { origin, live, .. }) => origin.with_position(live),
            Some(ActiveGesture::Resize { live, .. }) => live,
            None => store.transform(),
        }
    }

    /// CSS cursor for the stage given the current hover/gesture state.
    pub fn cursor<S: KeyValueStorage>(&self, store: &TransformStore<S>, pointer: Option<Point>) -> &'static str {
        if store.is_locked() {
            return "default";
        }
        match self.active_kind() {
            Some(GestureKind::Drag) => return "grabbing",
            Some(GestureKind::Resize(handle)) => return handle.cursor(),
            None => {}
        }
        if let Some(handle) = self.hovered {
            return handle.cursor();
        }
        match pointer {
            Some(p) if store.transform().contains(p) => "grab",
            _ => "default",
        }
    }

    pub fn pointer_down<S: KeyValueStorage>(&mut self, store: &TransformStore<S>, pointer: Point) -> GestureOutcome {
        if store.is_locked() {
            return GestureOutcome::Ignored;
        }
        let origin = store.transform();
        if let Some(handle) = self.handle_at(store, pointer) {
            self.active = Some(ActiveGesture::Resize {
                handle,
                start: pointer,
                origin,
                live: origin,
            });
            tracing::debug!(?handle, "resize started");
            return GestureOutcome::Started(GestureKind::Resize(handle));
        }
        if origin.contains(pointer) {
            self.active = Some(ActiveGesture::Drag {
                start: pointer,
                origin,
                live: origin.position(),
            });
            tracing::debug!("drag started");
            return GestureOutcome::Started(GestureKind::Drag);
        }
        GestureOutcome::Ignored
    }

    pub fn pointer_move<S: KeyValueStorage>(
        &mut self,
        store: &mut TransformStore<S>,
        pointer: Point,
    ) -> GestureOutcome {
        let Some(active) = self.active else {
            self.hovered = self.handle_at(store, pointer);
            return GestureOutcome::Ignored;
        };

        match active {
            ActiveGesture::Drag { start, origin, .. } => {
                let proposed = origin.position().offset(pointer.x - start.x, pointer.y - start.y);
                let Some(clamped) = store.preview_drag(proposed) else {
                    return self.cancel(store);
                };
                self.active = Some(ActiveGesture::Drag {
                    start,
                    origin,
                    live: clamped,
                });
                GestureOutcome::Updated(origin.with_position(clamped))
            }
            ActiveGesture::Resize {
                handle,
                start,
                origin,
                live,
            } => {
                let candidate = handle.resize_candidate(&origin, (pointer.x - start.x, pointer.y - start.y));
                let Some(next) = store.commit_resize_step(live, candidate) else {
                    return self.cancel(store);
                };
                self.active = Some(ActiveGesture::Resize {
                    handle,
                    start,
                    origin,
                    live: next,
                });
                GestureOutcome::Updated(next)
            }
        }
    }

    pub fn pointer_up<S: KeyValueStorage>(&mut self, store: &mut TransformStore<S>) -> GestureOutcome {
        let Some(active) = self.active.take() else {
            return GestureOutcome::Ignored;
        };

        let committed = match active {
            ActiveGesture::Drag { origin, live, .. } => {
                if live == origin.position() {
                    return GestureOutcome::Cancelled;
                }
                store.commit_drag(live)
            }
            ActiveGesture::Resize { origin, live, .. } => {
                if live == origin {
                    store.cancel_resize();
                    return GestureOutcome::Cancelled;
                }
                // the stage resizes by absolute size, so the node carries unit scale
                store.commit_resize_end(ResizeNode::from_rect(live))
            }
        };

        match committed {
            Some(rect) => GestureOutcome::Committed(rect),
            None => GestureOutcome::Cancelled,
        }
    }

    /// Abandons the in-flight gesture; the committed transform is untouched.
    pub fn cancel<S: KeyValueStorage>(&mut self, store: &mut TransformStore<S>) -> GestureOutcome {
        self.hovered = None;
        if self.active.take().is_some() {
            store.cancel_resize();
            GestureOutcome::Cancelled
        } else {
            GestureOutcome::Ignored
        }
    }
}
