//! `linear-gradient(...)` directive grammar
//!
//! Accepted form:
//!
//! ```text
//! linear-gradient( [<angle>deg ,] <stop> [[,] <stop>]* ) [;]
//! <stop> := #<6-8 hex digits> [<integer>%]
//! ```
//!
//! The separator between stops is optional in the grammar, so two stops
//! written without a comma land in the same raw stop string. Stop
//! extraction (see [`crate::color`]) only keeps the first color of such a
//! string.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{GradientError, Result};

static SIGNED_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^linear-gradient\(\s*(?:(-?[0-9]+)deg\s*,\s*)?((?:#[a-fA-F0-9]{6,8}(?:\s*[0-9]+%)?\s*,?\s*)+)\);?$",
    )
    .expect("Failed to create SIGNED_DIRECTIVE")
});

static UNSIGNED_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^linear-gradient\(\s*(?:([0-9]+)deg\s*,\s*)?((?:#[a-fA-F0-9]{6,8}(?:\s*[0-9]+%)?\s*,?\s*)+)\);?$",
    )
    .expect("Failed to create UNSIGNED_DIRECTIVE")
});

static STOP_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("Failed to create STOP_SEPARATOR"));

/// A directive that matched the grammar, before stop extraction
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedDirective {
    /// Angle in degrees (CSS convention: 0deg points up, clockwise)
    pub angle: Option<f64>,
    /// Raw stop strings in declared order
    pub stops: Vec<String>,
}

impl ParsedDirective {
    /// Match `input` against the grammar.
    ///
    /// With `signed_angles` off, only unsigned integer angles are accepted.
    pub fn parse(input: &str, signed_angles: bool) -> Result<Self> {
        let pattern = if signed_angles {
            &*SIGNED_DIRECTIVE
        } else {
            &*UNSIGNED_DIRECTIVE
        };

        let Some(captures) = pattern.captures(input) else {
            debug!(directive = input, signed_angles, "rejected gradient directive");
            return Err(GradientError::MalformedDirective(input.to_string()));
        };

        let angle = match captures.get(1) {
            Some(m) => Some(
                m.as_str()
                    .parse::<f64>()
                    .map_err(|_| GradientError::MalformedDirective(input.to_string()))?,
            ),
            None => None,
        };

        // Group 2 is mandatory in the pattern
        let stop_list = captures.get(2).map_or("", |m| m.as_str()).trim();
        let stops = STOP_SEPARATOR
            .split(stop_list)
            .map(str::to_string)
            .collect();

        Ok(Self { angle, stops })
    }
}
