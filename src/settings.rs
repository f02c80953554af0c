//! Animation settings
//!
//! Read from LocalStorage on web, where the host page writes them. Every
//! field has a default, so a stored object only needs the keys it wants to
//! override.

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_PALETTE, Rgba};
use crate::consts::{ELEMENT_COUNT, PARTICLE_COUNT};
use crate::error::Result;

/// Animation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of floating particles
    pub particle_count: usize,
    /// Number of drifting flowers
    pub element_count: usize,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Particle fill color (hex)
    pub particle_color: String,
    /// Flower colors (hex), one picked per flower
    pub palette: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            element_count: ELEMENT_COUNT,
            seed: None,
            particle_color: Rgba::WHITE.to_css(),
            palette: DEFAULT_PALETTE.iter().map(Rgba::to_css).collect(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "petal_drift_settings";

    /// Parse settings from JSON (missing keys take defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolved particle color (falls back to white)
    pub fn particle_fill(&self) -> Rgba {
        match Rgba::parse_hex(&self.particle_color) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("{e}, using white particles");
                Rgba::WHITE
            }
        }
    }

    /// Resolved flower palette. Invalid entries are skipped; an empty result
    /// falls back to the default palette.
    pub fn palette(&self) -> Vec<Rgba> {
        let colors: Vec<Rgba> = self
            .palette
            .iter()
            .filter_map(|s| match Rgba::parse_hex(s) {
                Ok(color) => Some(color),
                Err(e) => {
                    log::warn!("Skipping palette entry: {e}");
                    None
                }
            })
            .collect();

        if colors.is_empty() {
            log::warn!("Palette is empty, using default palette");
            DEFAULT_PALETTE.to_vec()
        } else {
            colors
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native has no storage, always defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_takes_defaults() {
        let settings = Settings::from_json(r#"{ "particle_count": 5, "seed": 7 }"#).unwrap();
        assert_eq!(settings.particle_count, 5);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.element_count, ELEMENT_COUNT);
        assert_eq!(settings.palette(), DEFAULT_PALETTE.to_vec());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "particle_count": -1 }"#).is_err());
    }

    #[test]
    fn test_palette_skips_invalid_entries() {
        let settings = Settings {
            palette: vec!["#123456".into(), "nope".into()],
            ..Default::default()
        };
        assert_eq!(settings.palette(), vec![Rgba::rgb(0x12, 0x34, 0x56)]);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let settings = Settings {
            palette: vec!["nope".into()],
            particle_color: "also nope".into(),
            ..Default::default()
        };
        assert_eq!(settings.palette(), DEFAULT_PALETTE.to_vec());
        assert_eq!(settings.particle_fill(), Rgba::WHITE);
    }

    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_json_roundtrip_keeps_defaults() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}
