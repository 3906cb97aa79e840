//! Panel width as a function of position along the bellows.

use crate::config::BellowsConfig;

/// Linear taper between the top and bottom panel widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidWidth {
    /// Width at `y = 0`.
    pub top: f64,
    /// Width at `y = length`.
    pub bottom: f64,
    /// Distance between the two ends.
    pub length: f64,
}

impl TrapezoidWidth {
    /// Create a width model.
    pub fn new(top: f64, bottom: f64, length: f64) -> Self {
        Self {
            top,
            bottom,
            length,
        }
    }

    /// Width model of a configured face.
    pub fn from_config(config: &BellowsConfig) -> Self {
        Self::new(config.top_width, config.bottom_width, config.length)
    }

    /// Panel width at longitudinal position `y`.
    ///
    /// Positions outside `[0, length]` extrapolate the same line. The two
    /// ends return `top` and `bottom` exactly.
    pub fn width_at(&self, y: f64) -> f64 {
        let t = y / self.length;
        self.top * (1.0 - t) + self.bottom * t
    }
}
