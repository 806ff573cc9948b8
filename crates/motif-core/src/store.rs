//! Transform store: the motif's committed placement and the lock flag.
//!
//! Every successful mutation is followed by an explicit save. Saves are
//! fire-and-forget: a failing backend is logged and otherwise ignored, the
//! in-memory state stays authoritative for the session.

use crate::config::{ConfigError, DesignerConfig, StorageKeys};
use crate::constraint::{ResizeNode, clamp_drag_position, clamp_resize_box, finalize_resize};
use crate::geometry::{Bounds, Point, Rect};
use crate::storage::{KeyValueStorage, Loaded, load_json, save_json};

/// What the selection-handle overlay must do after a lock transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOverlay {
    /// Unlocked: attach handles to the motif.
    Attach,
    /// Locked: remove handles.
    Detach,
}

impl HandleOverlay {
    fn for_lock(locked: bool) -> Self {
        if locked {
            HandleOverlay::Detach
        } else {
            HandleOverlay::Attach
        }
    }
}

pub struct TransformStore<S> {
    bounds: Bounds,
    transform: Rect,
    locked: bool,
    /// Box shown by the resize handles mid-gesture. Never persisted.
    live_box: Option<Rect>,
    keys: StorageKeys,
    storage: S,
}

impl<S: KeyValueStorage> TransformStore<S> {
    /// Rehydrates the store from `storage`.
    ///
    /// The motif rectangle and the lock flag are read independently; each
    /// falls back to its own default when missing, unreadable, or (for the
    /// rectangle) no longer inside the garment bounds.
    pub fn initialize(storage: S, config: &DesignerConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        let keys = config.keys.clone();

        let transform = match load_json::<Rect, _>(&storage, &keys.motif) {
            Loaded::Found(rect) if rect.fits_within(&bounds) => rect,
            Loaded::Found(rect) => {
                tracing::warn!(?rect, "persisted motif is outside the garment, using default");
                config.default_motif
            }
            Loaded::Missing => {
                tracing::debug!(key = %keys.motif, "no persisted motif");
                config.default_motif
            }
            Loaded::Invalid(reason) => {
                tracing::warn!(key = %keys.motif, %reason, "unreadable motif state, using default");
                config.default_motif
            }
        };

        let locked = match load_json::<bool, _>(&storage, &keys.locked) {
            Loaded::Found(locked) => locked,
            Loaded::Missing => false,
            Loaded::Invalid(reason) => {
                tracing::warn!(key = %keys.locked, %reason, "unreadable lock state, using default");
                false
            }
        };

        tracing::info!(?transform, locked, "transform store initialized");

        Ok(Self {
            bounds,
            transform,
            locked,
            live_box: None,
            keys,
            storage,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn transform(&self) -> Rect {
        self.transform
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn handles_visible(&self) -> bool {
        !self.locked
    }

    /// The resize handles' live box, or the committed transform.
    pub fn live_rect(&self) -> Rect {
        self.live_box.unwrap_or(self.transform)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Clamped drag position for the live drag-bound callback. Commits nothing.
    pub fn preview_drag(&self, proposed: Point) -> Option<Point> {
        if self.locked {
            return None;
        }
        Some(clamp_drag_position(proposed, self.transform.size(), &self.bounds))
    }

    /// Clamps and commits a drag position. `None` when locked.
    pub fn commit_drag(&mut self, proposed: Point) -> Option<Rect> {
        let pos = self.preview_drag(proposed)?;
        self.transform = self.transform.with_position(pos);
        tracing::debug!(x = pos.x, y = pos.y, "drag committed");
        self.save_transform();
        Some(self.transform)
    }

    /// Validates one resize step; the result becomes the live box.
    pub fn commit_resize_step(&mut self, old_box: Rect, new_box: Rect) -> Option<Rect> {
        if self.locked {
            return None;
        }
        let next = clamp_resize_box(old_box, new_box, &self.bounds);
        self.live_box = Some(next);
        Some(next)
    }

    /// Bakes the end-of-gesture node into the transform and persists it.
    pub fn commit_resize_end(&mut self, node: ResizeNode) -> Option<Rect> {
        if self.locked {
            return None;
        }
        let (rect, reset) = finalize_resize(node, &self.bounds);
        // the committed box is absolute; nothing carries a scale past this point
        debug_assert_eq!(reset, ResizeNode::from_rect(rect));
        self.transform = rect;
        self.live_box = None;
        tracing::debug!(?rect, "resize committed");
        self.save_transform();
        Some(rect)
    }

    /// Drops an in-flight resize without committing it.
    pub fn cancel_resize(&mut self) {
        self.live_box = None;
    }

    pub fn toggle_lock(&mut self) -> HandleOverlay {
        let locked = !self.locked;
        self.apply_lock(locked)
    }

    /// Sets the lock flag; `None` when it already had that value.
    pub fn set_locked(&mut self, locked: bool) -> Option<HandleOverlay> {
        if self.locked == locked {
            return None;
        }
        Some(self.apply_lock(locked))
    }

    fn apply_lock(&mut self, locked: bool) -> HandleOverlay {
        self.locked = locked;
        self.live_box = None;
        tracing::info!(locked, "motif lock toggled");
        self.save_lock();
        HandleOverlay::for_lock(locked)
    }

    fn save_transform(&mut self) {
        if let Err(e) = save_json(&mut self.storage, &self.keys.motif, &self.transform) {
            tracing::warn!(key = %self.keys.motif, error = %e, "failed to persist motif transform");
        }
    }

    fn save_lock(&mut self) {
        if let Err(e) = save_json(&mut self.storage, &self.keys.locked, &self.locked) {
            tracing::warn!(key = %self.keys.locked, error = %e, "failed to persist lock state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::storage::testing::FailingStorage;

    fn fresh() -> TransformStore<MemoryStorage> {
        TransformStore::initialize(MemoryStorage::new(), &DesignerConfig::default()).unwrap()
    }

    #[test]
    fn test_initialize_defaults() {
        let store = fresh();
        assert_eq!(store.transform(), Rect::new(150.0, 150.0, 150.0, 150.0));
        assert!(!store.is_locked());
        assert!(store.handles_visible());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_initialize_from_persisted() {
        let storage = MemoryStorage::new()
            .with_item("motifProps", r#"{"x":60,"y":70,"width":80,"height":90}"#)
            .with_item("isLocked", "true");
        let store = TransformStore::initialize(storage, &DesignerConfig::default()).unwrap();
        assert_eq!(store.transform(), Rect::new(60.0, 70.0, 80.0, 90.0));
        assert!(store.is_locked());
    }

    #[test]
    fn test_fields_fall_back_independently() {
        let storage = MemoryStorage::new()
            .with_item("motifProps", "garbage")
            .with_item("isLocked", "true");
        let store = TransformStore::initialize(storage, &DesignerConfig::default()).unwrap();
        assert_eq!(store.transform(), Rect::new(150.0, 150.0, 150.0, 150.0));
        assert!(store.is_locked());

        let storage = MemoryStorage::new()
            .with_item("motifProps", r#"{"x":60,"y":70,"width":80,"height":90}"#)
            .with_item("isLocked", r#""yes""#);
        let store = TransformStore::initialize(storage, &DesignerConfig::default()).unwrap();
        assert_eq!(store.transform(), Rect::new(60.0, 70.0, 80.0, 90.0));
        assert!(!store.is_locked());
    }

    #[test]
    fn test_out_of_bounds_persisted_rect_is_ignored() {
        let storage = MemoryStorage::new().with_item("motifProps", r#"{"x":0,"y":0,"width":10,"height":10}"#);
        let store = TransformStore::initialize(storage, &DesignerConfig::default()).unwrap();
        assert_eq!(store.transform(), Rect::new(150.0, 150.0, 150.0, 150.0));
    }

    #[test]
    fn test_commit_drag_clamps_and_persists() {
        let mut store = fresh();
        let rect = store.commit_drag(Point::new(700.0, 700.0)).unwrap();
        assert_eq!(rect, Rect::new(400.0, 400.0, 150.0, 150.0));
        assert_eq!(
            store.storage().raw("motifProps"),
            Some(r#"{"x":400.0,"y":400.0,"width":150.0,"height":150.0}"#)
        );

        store.commit_drag(Point::new(0.0, 0.0));
        assert_eq!(store.transform().position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_resize_step_is_live_only() {
        let mut store = fresh();
        let old = store.transform();
        let grown = Rect::new(150.0, 150.0, 200.0, 180.0);
        assert_eq!(store.commit_resize_step(old, grown), Some(grown));
        assert_eq!(store.live_rect(), grown);
        assert_eq!(store.transform(), old);
        assert_eq!(store.storage().raw("motifProps"), None);

        // past the left edge: previous box kept
        let bad = Rect::new(40.0, 150.0, 310.0, 180.0);
        assert_eq!(store.commit_resize_step(grown, bad), Some(grown));
        assert_eq!(store.live_rect(), grown);
    }

    #[test]
    fn test_resize_end_commits() {
        let mut store = fresh();
        let node = ResizeNode {
            x: 100.0,
            y: 100.0,
            width: 150.0,
            height: 150.0,
            scale_x: 0.1,
            scale_y: 0.1,
        };
        let rect = store.commit_resize_end(node).unwrap();
        assert_eq!(rect, Rect::new(100.0, 100.0, 20.0, 20.0));
        assert_eq!(store.transform(), rect);
        assert_eq!(store.live_rect(), rect);
        assert!(store.storage().raw("motifProps").is_some());
    }

    #[test]
    fn test_locked_store_ignores_edits() {
        let mut store = fresh();
        assert_eq!(store.toggle_lock(), HandleOverlay::Detach);
        assert!(!store.handles_visible());
        let before = store.transform();

        assert_eq!(store.preview_drag(Point::new(300.0, 300.0)), None);
        assert_eq!(store.commit_drag(Point::new(300.0, 300.0)), None);
        assert_eq!(
            store.commit_resize_step(before, Rect::new(150.0, 150.0, 60.0, 60.0)),
            None
        );
        assert_eq!(store.commit_resize_end(ResizeNode::from_rect(Rect::new(60.0, 60.0, 30.0, 30.0))), None);

        assert_eq!(store.transform(), before);
        assert_eq!(store.live_rect(), before);
        assert_eq!(store.storage().raw("motifProps"), None);
        assert_eq!(store.storage().raw("isLocked"), Some("true"));
    }

    #[test]
    fn test_toggle_lock_round_trip() {
        let mut store = fresh();
        let old = store.transform();
        store.commit_resize_step(old, Rect::new(150.0, 150.0, 100.0, 100.0));
        assert_eq!(store.toggle_lock(), HandleOverlay::Detach);
        // a pending live box does not survive a lock
        assert_eq!(store.live_rect(), old);
        assert_eq!(store.toggle_lock(), HandleOverlay::Attach);
        assert_eq!(store.storage().raw("isLocked"), Some("false"));
        assert_eq!(store.set_locked(false), None);
        assert_eq!(store.set_locked(true), Some(HandleOverlay::Detach));
    }

    #[test]
    fn test_persist_then_reinitialize_is_exact() {
        let mut store = fresh();
        let node = ResizeNode {
            x: 123.456_789,
            y: 98.765_432_1,
            width: 150.0,
            height: 150.0,
            scale_x: 1.0 / 3.0,
            scale_y: 0.7,
        };
        let committed = store.commit_resize_end(node).unwrap();
        store.toggle_lock();

        let storage = store.into_storage();
        let again = TransformStore::initialize(storage, &DesignerConfig::default()).unwrap();
        let back = again.transform();
        assert_eq!(back.x.to_bits(), committed.x.to_bits());
        assert_eq!(back.y.to_bits(), committed.y.to_bits());
        assert_eq!(back.width.to_bits(), committed.width.to_bits());
        assert_eq!(back.height.to_bits(), committed.height.to_bits());
        assert!(again.is_locked());
    }

    #[test]
    fn test_fractional_garment_edge_survives_reload() {
        let config = DesignerConfig {
            garment: Rect::new(10.1, 20.7, 480.3, 460.9),
            ..DesignerConfig::default()
        };
        let mut store = TransformStore::initialize(MemoryStorage::new(), &config).unwrap();
        let node = ResizeNode {
            x: 150.0,
            y: 150.0,
            width: 150.0,
            height: 150.0,
            scale_x: 464.4 / 7.0 / 150.0,
            scale_y: 464.4 / 7.0 / 150.0,
        };
        store.commit_resize_end(node).unwrap();
        let committed = store.commit_drag(Point::new(1e4, 1e4)).unwrap();
        assert!(committed.fits_within(store.bounds()), "{committed:?}");

        let again = TransformStore::initialize(store.into_storage(), &config).unwrap();
        let back = again.transform();
        assert_eq!(back.x.to_bits(), committed.x.to_bits());
        assert_eq!(back.y.to_bits(), committed.y.to_bits());
        assert_eq!(back.width.to_bits(), committed.width.to_bits());
        assert_eq!(back.height.to_bits(), committed.height.to_bits());
    }

    #[test]
    fn test_write_failures_keep_memory_state() {
        let mut store =
            TransformStore::initialize(FailingStorage::default(), &DesignerConfig::default()).unwrap();
        let rect = store.commit_drag(Point::new(200.0, 210.0)).unwrap();
        assert_eq!(rect.position(), Point::new(200.0, 210.0));
        assert_eq!(store.transform(), rect);

        store.toggle_lock();
        assert!(store.is_locked());
        assert_eq!(store.storage().attempted_writes, 2);
    }

    #[test]
    fn test_custom_keys() {
        let mut config = DesignerConfig::default();
        config.keys.motif = "designer/motif".to_string();
        let mut store = TransformStore::initialize(MemoryStorage::new(), &config).unwrap();
        store.commit_drag(Point::new(60.0, 60.0));
        assert!(store.storage().raw("designer/motif").is_some());
        assert_eq!(store.storage().raw("motifProps"), None);
    }
}
