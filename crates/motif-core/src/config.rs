//! Designer configuration.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, GeometryError, Rect, Size};

pub const MOTIF_PROPS_KEY: &str = "motifProps";
pub const IS_LOCKED_KEY: &str = "isLocked";

/// Default hit radius around a resize handle, in canvas pixels.
pub const DEFAULT_HANDLE_TOLERANCE: f64 = 8.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("default motif {0:?} does not fit inside the garment bounds")]
    DefaultMotifOutOfBounds(Rect),
}

/// Storage keys for the two persisted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub motif: String,
    pub locked: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            motif: MOTIF_PROPS_KEY.to_string(),
            locked: IS_LOCKED_KEY.to_string(),
        }
    }
}

/// Everything the designer needs to know about its canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    pub canvas: Size,
    pub garment: Rect,
    pub default_motif: Rect,
    pub keys: StorageKeys,
    pub garment_image: String,
    pub motif_image: String,
    pub handle_tolerance: f64,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(600.0, 600.0),
            garment: Rect::new(50.0, 50.0, 500.0, 500.0),
            default_motif: Rect::new(150.0, 150.0, 150.0, 150.0),
            keys: StorageKeys::default(),
            garment_image: "assets/simpleSweater.png".to_string(),
            motif_image: "assets/motif1.jpg".to_string(),
            handle_tolerance: DEFAULT_HANDLE_TOLERANCE,
        }
    }
}

impl DesignerConfig {
    /// Parses a JSON override; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn bounds(&self) -> Result<Bounds, GeometryError> {
        Bounds::try_from(self.garment)
    }

    /// Returns the garment bounds once the whole config is known to be usable.
    pub fn validate(&self) -> Result<Bounds, ConfigError> {
        let bounds = self.bounds()?;
        if !self.default_motif.fits_within(&bounds) {
            return Err(ConfigError::DefaultMotifOutOfBounds(self.default_motif));
        }
        Ok(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DesignerConfig::default();
        let bounds = config.validate().unwrap();
        assert_eq!(bounds.as_rect(), Rect::new(50.0, 50.0, 500.0, 500.0));
        assert_eq!(config.keys.motif, "motifProps");
        assert_eq!(config.keys.locked, "isLocked");
    }

    #[test]
    fn test_partial_override() {
        let config = DesignerConfig::from_json(r#"{"motif_image":"assets/star.png"}"#).unwrap();
        assert_eq!(config.motif_image, "assets/star.png");
        assert_eq!(config.default_motif, Rect::new(150.0, 150.0, 150.0, 150.0));
    }

    #[test]
    fn test_rejects_default_outside_garment() {
        let config = DesignerConfig {
            default_motif: Rect::new(500.0, 500.0, 150.0, 150.0),
            ..DesignerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DefaultMotifOutOfBounds(_))
        ));
    }

    #[test]
    fn test_rejects_tiny_garment() {
        let config = DesignerConfig {
            garment: Rect::new(0.0, 0.0, 10.0, 10.0),
            ..DesignerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Geometry(_))));
    }
}
