//! Directive string to gradient geometry

use tracing::trace;

use crate::color::ColorStop;
use crate::config::GradientConfig;
use crate::directive::ParsedDirective;
use crate::error::Result;
use crate::geometry::{angle_to_gradient_points, GradientGeometry, DEFAULT_END, DEFAULT_START};
use crate::viewport::ViewportSource;

/// Turns `linear-gradient(...)` directives into [`GradientGeometry`]
#[derive(Clone, Debug, Default)]
pub struct GradientInterpreter {
    config: GradientConfig,
}

impl GradientInterpreter {
    pub fn new(config: GradientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// Interpret a directive for the surface reported by `viewport`.
    ///
    /// The viewport is only read when the directive has an angle.
    pub fn interpret(
        &self,
        directive: &str,
        viewport: &impl ViewportSource,
    ) -> Result<GradientGeometry> {
        let parsed = ParsedDirective::parse(directive, self.config.signed_angles)?;

        let stops: Vec<ColorStop> = parsed
            .stops
            .iter()
            .filter_map(|raw| ColorStop::extract(raw))
            .collect();

        let axis = match parsed.angle {
            Some(angle) => angle_to_gradient_points(angle, viewport.viewport())?,
            None => (DEFAULT_START, DEFAULT_END),
        };

        let geometry = GradientGeometry::from_stops(stops, axis);
        trace!(
            directive,
            angle = ?parsed.angle,
            start = ?geometry.start,
            end = ?geometry.end,
            colors = geometry.colors.len(),
            "interpreted gradient directive"
        );

        Ok(geometry)
    }

    /// Interpret against the configured fallback viewport
    pub fn interpret_with_fallback(&self, directive: &str) -> Result<GradientGeometry> {
        self.interpret(directive, &self.config.fallback_viewport)
    }
}

/// Interpret `directive` with the default configuration
pub fn parse_linear_gradient(
    directive: &str,
    viewport: &impl ViewportSource,
) -> Result<GradientGeometry> {
    GradientInterpreter::default().interpret(directive, viewport)
}
