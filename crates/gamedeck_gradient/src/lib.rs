//! gamedeck gradient directives
//!
//! Interprets CSS `linear-gradient(...)` strings written inline by UI code
//! and produces the geometry a two-point linear gradient renderer draws:
//! ordered colors, optional stop locations, and a normalized start/end axis.
//!
//! # Supported Syntax
//!
//! - Optional integer angle: `43deg`, `-90deg`
//! - Hex colors with 6 or 8 digits; only the first 6 are used
//! - Optional integer percentage after each color
//! - Optional trailing `;`
//!
//! Named colors, `rgb()`/`rgba()` and direction keywords are rejected.
//!
//! # Example
//!
//! ```
//! use gamedeck_gradient::{parse_linear_gradient, Viewport};
//!
//! let geometry = parse_linear_gradient(
//!     "linear-gradient(-90deg, #3a83f4 0%, #09b5d3 100%);",
//!     &Viewport::new(390.0, 844.0),
//! )
//! .unwrap();
//!
//! assert_eq!(geometry.colors[0].as_str(), "#3a83f4");
//! assert_eq!(geometry.locations, Some(vec![0.0, 1.0]));
//! ```

pub mod color;
pub mod config;
pub mod directive;
mod error;
pub mod geometry;
mod interpreter;
pub mod viewport;

pub use color::{ColorStop, HexColor};
pub use config::GradientConfig;
pub use directive::ParsedDirective;
pub use error::{GradientError, Result};
pub use geometry::{GradientGeometry, Point};
pub use interpreter::{parse_linear_gradient, GradientInterpreter};
pub use viewport::{Viewport, ViewportSource};
