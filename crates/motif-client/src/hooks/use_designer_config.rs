//! Hook for loading the designer configuration.

use std::rc::Rc;

use motif_core::DesignerConfig;
use yew::prelude::*;

use crate::storage::local_storage;

const CONFIG_OVERRIDE_KEY: &str = "motif-designer-config";

/// Built-in config, optionally overridden by a JSON blob in localStorage.
///
/// An override that does not parse or does not validate is ignored.
fn load_config() -> DesignerConfig {
    let Some(raw) = local_storage().and_then(|s| s.get_item(CONFIG_OVERRIDE_KEY).ok().flatten()) else {
        return DesignerConfig::default();
    };

    let config = match DesignerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable designer config override");
            return DesignerConfig::default();
        }
    };

    match config.validate() {
        Ok(_) => {
            tracing::info!("using designer config override");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid designer config override");
            DesignerConfig::default()
        }
    }
}

#[hook]
pub fn use_designer_config() -> Rc<DesignerConfig> {
    let config = use_state(|| Rc::new(load_config()));
    (*config).clone()
}
