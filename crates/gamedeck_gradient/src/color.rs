//! Color stop extraction

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use tracing::debug;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[a-fA-F0-9]{6}").expect("Failed to create HEX_COLOR"));

static TRAILING_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)%$").expect("Failed to create TRAILING_PERCENT"));

/// A `#rrggbb` color, case preserved as written in the directive
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Find the first 6-digit hex color in `input`.
    ///
    /// Longer runs are truncated, so `#ae64efa5` yields `#ae64ef`.
    pub fn find(input: &str) -> Option<Self> {
        HEX_COLOR.find(input).map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue bytes
    pub fn rgb(&self) -> [u8; 3] {
        let digits = &self.0[1..];
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        [channel(0), channel(2), channel(4)]
    }

    /// Normalized RGBA, alpha is always opaque
    pub fn to_rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// One color of a gradient, with its position if the directive gave one
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub color: HexColor,
    /// Position along the gradient line (`percent / 100`)
    pub location: Option<f64>,
}

impl ColorStop {
    /// Extract a stop from one raw stop string.
    ///
    /// Returns `None` when the string holds no 6-digit hex color. Callers
    /// drop such stops rather than failing the whole directive.
    pub fn extract(raw: &str) -> Option<Self> {
        let Some(color) = HexColor::find(raw) else {
            debug!(stop = raw, "dropped color stop without hex color");
            return None;
        };

        let location = TRAILING_PERCENT
            .captures(raw)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .map(|pct| pct / 100.0);

        Some(Self { color, location })
    }
}
