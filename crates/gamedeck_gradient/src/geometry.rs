//! Gradient axis and stop geometry
//!
//! Coordinates are normalized to the rendering surface: `(0, 0)` is the
//! top-left corner and `(1, 1)` the bottom-right, which is what a two-point
//! linear gradient primitive expects.

use std::f64::consts::PI;

use serde::Serialize;

use crate::color::{ColorStop, HexColor};
use crate::error::{GradientError, Result};
use crate::viewport::Viewport;

/// 2D point in normalized surface coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis used when the directive has no angle: left to right
pub const DEFAULT_START: Point = Point::new(0.0, 0.5);
pub const DEFAULT_END: Point = Point::new(1.0, 0.5);

/// Everything a two-point linear gradient renderer needs
///
/// Serializes to the renderer's props: `colors`, `locations` (omitted when
/// absent), `start` and `end`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientGeometry {
    pub colors: Vec<HexColor>,
    /// Present only when every stop declared a position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<f64>>,
    pub start: Point,
    pub end: Point,
}

impl GradientGeometry {
    /// Assemble geometry from extracted stops and an axis
    pub fn from_stops(stops: Vec<ColorStop>, (start, end): (Point, Point)) -> Self {
        let locations: Vec<f64> = stops.iter().filter_map(|s| s.location).collect();
        let colors: Vec<HexColor> = stops.into_iter().map(|s| s.color).collect();

        let locations = (locations.len() == colors.len()).then_some(locations);

        Self {
            colors,
            locations,
            start,
            end,
        }
    }

    /// Stop positions, evenly distributed when the directive gave none
    pub fn offsets(&self) -> Vec<f64> {
        if let Some(locations) = &self.locations {
            return locations.clone();
        }

        let total = self.colors.len();
        (0..total).map(|i| default_position(i, total)).collect()
    }

    /// `(offset, color)` pairs in declared order
    pub fn stops(&self) -> Vec<(f64, HexColor)> {
        self.offsets()
            .into_iter()
            .zip(self.colors.iter().cloned())
            .collect()
    }

    pub fn is_default_axis(&self) -> bool {
        self.start == DEFAULT_START && self.end == DEFAULT_END
    }
}

/// Default position for stop `index` of `total`
fn default_position(index: usize, total: usize) -> f64 {
    if total <= 1 {
        0.0
    } else {
        index as f64 / (total - 1) as f64
    }
}

/// Convert a CSS angle to start/end points for the given viewport.
///
/// CSS angles: 0deg = to top, 90deg = to right, clockwise. The axis goes
/// through the center and its length is the viewport diagonal, so it
/// overshoots the exact CSS gradient line for angles off the diagonal.
pub fn angle_to_gradient_points(angle_deg: f64, viewport: Viewport) -> Result<(Point, Point)> {
    let diagonal = viewport.diagonal();
    if diagonal == 0.0 || !diagonal.is_finite() {
        return Err(GradientError::DegenerateViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let radian = (angle_deg + 90.0) * PI / 180.0;
    let end_x = round_half_up(diagonal * radian.cos());
    let end_y = round_half_up(diagonal * radian.sin());

    let start = Point::new(0.5 + end_x / diagonal / 2.0, 0.5 + end_y / diagonal / 2.0);
    let end = Point::new(start.x - end_x / diagonal, start.y - end_y / diagonal);

    Ok((start, end))
}

/// Round to the nearest integer, halves toward positive infinity
fn round_half_up(value: f64) -> f64 {
    // `(value + 0.5).floor()` rounds the largest f64 below 0.5 up to 1
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn stop(color: &str, location: Option<f64>) -> ColorStop {
        ColorStop {
            color: HexColor::find(color).unwrap(),
            location,
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.4), 0.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    #[test]
    fn test_zero_degrees_points_up() {
        let viewport = Viewport::new(100.0, 100.0);
        let (start, end) = angle_to_gradient_points(0.0, viewport).unwrap();
        let diagonal = viewport.diagonal();
        let half = 141.0 / diagonal / 2.0;

        assert!(approx(start.x, 0.5));
        assert!(approx(start.y, 0.5 + half));
        assert!(approx(end.x, 0.5));
        assert!(approx(end.y, 0.5 - half));
        assert!(start.y > end.y);
    }

    #[test]
    fn test_ninety_degrees_points_right() {
        let (start, end) = angle_to_gradient_points(90.0, Viewport::new(100.0, 100.0)).unwrap();
        assert!(start.x < 0.01);
        assert!(end.x > 0.99);
        assert!(approx(start.y, 0.5));
        assert!(approx(end.y, 0.5));
    }

    #[test]
    fn test_negative_ninety_points_left() {
        let (start, end) = angle_to_gradient_points(-90.0, Viewport::new(390.0, 844.0)).unwrap();
        assert!(start.x > end.x);
        assert!(approx(start.y, 0.5));
        assert!(approx(end.y, 0.5));
        // Axis stays centered
        assert!(approx((start.x + end.x) / 2.0, 0.5));
    }

    #[test]
    fn test_axis_is_centered_for_any_aspect() {
        for angle in [0.0, 43.0, 135.0, 200.0, 315.0] {
            let (start, end) = angle_to_gradient_points(angle, Viewport::new(390.0, 844.0)).unwrap();
            assert!(approx((start.x + end.x) / 2.0, 0.5));
            assert!(approx((start.y + end.y) / 2.0, 0.5));
        }
    }

    #[test]
    fn test_degenerate_viewport() {
        let result = angle_to_gradient_points(45.0, Viewport::new(0.0, 0.0));
        assert!(matches!(result, Err(GradientError::DegenerateViewport { .. })));

        let result = angle_to_gradient_points(45.0, Viewport::new(f64::INFINITY, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_locations_require_every_stop() {
        let all = GradientGeometry::from_stops(
            vec![stop("#3a83f4", Some(0.0)), stop("#09b5d3", Some(1.0))],
            (DEFAULT_START, DEFAULT_END),
        );
        assert_eq!(all.locations, Some(vec![0.0, 1.0]));

        let partial = GradientGeometry::from_stops(
            vec![stop("#3a83f4", Some(0.0)), stop("#09b5d3", None)],
            (DEFAULT_START, DEFAULT_END),
        );
        assert_eq!(partial.locations, None);
        assert_eq!(partial.colors.len(), 2);
    }

    #[test]
    fn test_offsets_fall_back_to_even_distribution() {
        let geometry = GradientGeometry::from_stops(
            vec![
                stop("#000000", None),
                stop("#808080", None),
                stop("#ffffff", None),
            ],
            (DEFAULT_START, DEFAULT_END),
        );
        assert_eq!(geometry.offsets(), vec![0.0, 0.5, 1.0]);

        let single = GradientGeometry::from_stops(
            vec![stop("#000000", None)],
            (DEFAULT_START, DEFAULT_END),
        );
        assert_eq!(single.offsets(), vec![0.0]);
    }

    #[test]
    fn test_stops_pair_offsets_with_colors() {
        let geometry = GradientGeometry::from_stops(
            vec![stop("#411ecd", Some(0.2)), stop("#ae64ef", Some(0.9))],
            (DEFAULT_START, DEFAULT_END),
        );
        let stops = geometry.stops();
        assert_eq!(stops[0].0, 0.2);
        assert_eq!(stops[1].1.as_str(), "#ae64ef");
        assert!(geometry.is_default_axis());
    }
}
