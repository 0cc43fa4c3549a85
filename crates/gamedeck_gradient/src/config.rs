//! Interpreter configuration
//!
//! Loaded from TOML, every key is optional:
//!
//! ```toml
//! signed_angles = true
//!
//! [fallback_viewport]
//! width = 390.0
//! height = 844.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::viewport::Viewport;

/// Settings for [`GradientInterpreter`](crate::GradientInterpreter)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradientConfig {
    /// Accept negative angles such as `-90deg`
    #[serde(default = "default_true")]
    pub signed_angles: bool,
    /// Viewport used by `interpret_with_fallback`
    #[serde(default)]
    pub fallback_viewport: Viewport,
}

fn default_true() -> bool {
    true
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            signed_angles: true,
            fallback_viewport: Viewport::default(),
        }
    }
}

impl GradientConfig {
    /// Only unsigned integer angles, as in plain `[0-9]+deg`
    pub fn strict() -> Self {
        Self {
            signed_angles: false,
            ..Default::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the fallback viewport
    pub fn fallback_viewport(mut self, width: f64, height: f64) -> Self {
        self.fallback_viewport = Viewport::new(width, height);
        self
    }
}
