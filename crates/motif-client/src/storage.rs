//! Browser storage backend for the transform store.

use motif_core::{KeyValueStorage, MemoryStorage, StorageError};
use wasm_bindgen::JsValue;

/// `localStorage` when the browser allows it, otherwise an in-memory map
/// that lasts for the page's lifetime.
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match local_storage() {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                tracing::warn!("localStorage unavailable, motif placement will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

/// Returns the window's `localStorage`, if any.
pub fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    window.local_storage().ok()?
}

fn js_err(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{e:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(js_err),
            BrowserStorage::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_err),
            BrowserStorage::Memory(storage) => storage.set_item(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_core::{DesignerConfig, Point, Rect, TransformStore};
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "$motif-designer$/test/storage";

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let mut storage = BrowserStorage::open();
        assert!(storage.is_persistent());
        storage.set_item(TEST_KEY, "true").unwrap();
        assert_eq!(storage.get_item(TEST_KEY).unwrap().as_deref(), Some("true"));
        if let Some(raw) = local_storage() {
            let _ = raw.remove_item(TEST_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn store_survives_reload() {
        let mut config = DesignerConfig::default();
        config.keys.motif = "$motif-designer$/test/motifProps".to_string();
        config.keys.locked = "$motif-designer$/test/isLocked".to_string();

        let mut store = TransformStore::initialize(BrowserStorage::open(), &config).unwrap();
        store.commit_drag(Point::new(75.0, 80.0));
        store.toggle_lock();

        let reloaded = TransformStore::initialize(BrowserStorage::open(), &config).unwrap();
        assert_eq!(reloaded.transform(), Rect::new(75.0, 80.0, 150.0, 150.0));
        assert!(reloaded.is_locked());

        if let Some(raw) = local_storage() {
            let _ = raw.remove_item(&config.keys.motif);
            let _ = raw.remove_item(&config.keys.locked);
        }
    }
}
