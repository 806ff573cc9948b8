//! Hook owning the transform store and gesture state for one designer.

use std::cell::RefCell;
use std::rc::Rc;

use motif_core::{
    DesignerConfig, GestureController, GestureOutcome, HandleOverlay, Point, Rect, ResizeHandle,
    TransformStore,
};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::storage::BrowserStorage;

type Store = TransformStore<BrowserStorage>;

/// Shared access to the store; cloning is cheap.
#[derive(Clone)]
pub struct DesignerHandle {
    store: Rc<RefCell<Store>>,
    gestures: Rc<RefCell<GestureController>>,
    redraw: UseForceUpdateHandle,
}

impl PartialEq for DesignerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl DesignerHandle {
    pub fn display_rect(&self) -> Rect {
        self.gestures.borrow().display_rect(&self.store.borrow())
    }

    pub fn is_locked(&self) -> bool {
        self.store.borrow().is_locked()
    }

    pub fn handles_visible(&self) -> bool {
        self.store.borrow().handles_visible()
    }

    pub fn hovered_handle(&self) -> Option<ResizeHandle> {
        self.gestures.borrow().hovered_handle()
    }

    pub fn cursor(&self, pointer: Option<Point>) -> &'static str {
        self.gestures.borrow().cursor(&self.store.borrow(), pointer)
    }

    /// Keeps hit-testing in step with what the overlay shows.
    pub fn set_handles_attached(&self, attached: bool) {
        self.gestures.borrow_mut().set_handles_attached(attached);
    }

    pub fn pointer_down(&self, p: Point) -> GestureOutcome {
        let out = self.gestures.borrow_mut().pointer_down(&self.store.borrow(), p);
        self.redraw_if(out);
        out
    }

    pub fn pointer_move(&self, p: Point) -> GestureOutcome {
        let hovered_before = self.gestures.borrow().hovered_handle();
        let out = self.gestures.borrow_mut().pointer_move(&mut self.store.borrow_mut(), p);
        if hovered_before != self.gestures.borrow().hovered_handle() {
            self.redraw.force_update();
        } else {
            self.redraw_if(out);
        }
        out
    }

    pub fn pointer_up(&self) -> GestureOutcome {
        let out = self.gestures.borrow_mut().pointer_up(&mut self.store.borrow_mut());
        self.redraw_if(out);
        out
    }

    pub fn cancel(&self) {
        let out = self.gestures.borrow_mut().cancel(&mut self.store.borrow_mut());
        self.redraw_if(out);
    }

    pub fn toggle_lock(&self) -> HandleOverlay {
        self.gestures.borrow_mut().cancel(&mut self.store.borrow_mut());
        let overlay = self.store.borrow_mut().toggle_lock();
        self.redraw.force_update();
        overlay
    }

    fn redraw_if(&self, out: GestureOutcome) {
        if out != GestureOutcome::Ignored {
            self.redraw.force_update();
        }
    }
}

/// Initializes the store once per component. `None` when the config is unusable.
#[hook]
pub fn use_designer(config: &DesignerConfig) -> Option<DesignerHandle> {
    let store = {
        let config = config.clone();
        use_state(move || match TransformStore::initialize(BrowserStorage::open(), &config) {
            Ok(store) => Some(Rc::new(RefCell::new(store))),
            Err(e) => {
                tracing::error!(error = %e, "cannot start the designer");
                None
            }
        })
    };
    let gestures = {
        let tolerance = config.handle_tolerance;
        use_state(move || Rc::new(RefCell::new(GestureController::new(tolerance))))
    };
    let redraw = use_force_update();

    let store = (*store).clone()?;
    Some(DesignerHandle {
        store,
        gestures: (*gestures).clone(),
        redraw,
    })
}
