//! Motif Designer Core Library
//!
//! Constrained placement of a decorative motif on a garment image:
//! - [`constraint`]: pure clamp/reject rules for drag and resize
//! - [`store`]: committed transform + lock flag, persisted through [`storage`]
//! - [`gesture`] and [`handles`]: pointer wiring for any rendering surface

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constraint;
pub mod geometry;
pub mod gesture;
pub mod handles;
pub mod storage;
pub mod store;

pub use config::{ConfigError, DesignerConfig, IS_LOCKED_KEY, MOTIF_PROPS_KEY, StorageKeys};
pub use constraint::{
    ResizeNode, ResizeVerdict, check_resize_box, clamp_drag_position, clamp_resize_box,
    finalize_resize,
};
pub use geometry::{Bounds, GeometryError, MIN_SIZE, Point, Rect, Size};
pub use gesture::{GestureController, GestureKind, GestureOutcome};
pub use handles::{HANDLE_SIZE, ResizeHandle, hit_test_handles};
pub use storage::{KeyValueStorage, MemoryStorage, PersistError, StorageError};
pub use store::{HandleOverlay, TransformStore};
