//! Navbar configuration: branding text and the responsive breakpoint.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::DEFAULT_BREAKPOINT_PX;

pub const DEFAULT_BRAND: &str = "TMediaN";

const BUNDLED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/navbar.json"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navbar config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("breakpoint must be a positive width, got {0}")]
    Breakpoint(f64),
    #[error("brand label must not be empty")]
    EmptyBrand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarConfig {
    pub brand: String,
    pub breakpoint_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

impl NavbarConfig {
    /// Parse and validate; absent fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The config shipped in `assets/navbar.json`, or defaults if it is broken.
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_CONFIG).unwrap_or_else(|err| {
            warn!("config: bundled navbar config rejected ({err}); using defaults");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.breakpoint_px.is_finite() && self.breakpoint_px > 0.0) {
            return Err(ConfigError::Breakpoint(self.breakpoint_px));
        }
        if self.brand.trim().is_empty() {
            return Err(ConfigError::EmptyBrand);
        }
        Ok(())
    }
}
