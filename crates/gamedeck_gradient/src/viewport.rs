//! Rendering surface dimensions

use serde::{Deserialize, Serialize};

/// Size of the surface a gradient is drawn on, in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

impl Default for Viewport {
    /// Portrait phone window
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// Something that can report the current viewport size.
///
/// The interpreter only asks when the directive carries an angle.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

impl<F> ViewportSource for F
where
    F: Fn() -> Viewport,
{
    fn viewport(&self) -> Viewport {
        self()
    }
}
