//! This module contains the mean camber line of the four-digit family, made of two parabolic arcs
//! which meet with zero slope at the point of maximum camber.

use serde::{Deserialize, Serialize};

/// The mean camber line of a four-digit section. Forward of `position` (inclusive) the line follows
/// the front arc, aft of it the rear arc. The arcs are only evaluated when their denominators are
/// non-zero: with `position == 0` the front arc is disabled and with `position == 1` the rear arc is
/// disabled, and positions which land in a disabled arc evaluate to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CamberLine {
    /// Maximum camber as a fraction of the chord
    max_camber: f64,

    /// Chordwise position of the maximum camber as a fraction of the chord
    position: f64,
}

impl CamberLine {
    pub fn new(max_camber: f64, position: f64) -> Self {
        Self {
            max_camber,
            position,
        }
    }

    pub fn max_camber(&self) -> f64 {
        self.max_camber
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Height `yc` of the camber line above the chord at the chordwise position `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use naca4::CamberLine;
    /// let line = CamberLine::new(0.02, 0.4);
    /// assert!((line.height(0.4) - 0.02).abs() < 1.0e-15);
    /// ```
    pub fn height(&self, x: f64) -> f64 {
        let (m, p) = (self.max_camber, self.position);
        if x <= p {
            if p > 0.0 {
                m / p.powi(2) * (2.0 * p * x - x.powi(2))
            } else {
                0.0
            }
        } else if p < 1.0 {
            m / (1.0 - p).powi(2) * (1.0 - 2.0 * p + 2.0 * p * x - x.powi(2))
        } else {
            0.0
        }
    }

    /// Slope `dyc/dx` of the camber line at the chordwise position `x`.
    pub fn slope(&self, x: f64) -> f64 {
        let (m, p) = (self.max_camber, self.position);
        if x <= p {
            if p > 0.0 {
                2.0 * m / p.powi(2) * (p - x)
            } else {
                0.0
            }
        } else if p < 1.0 {
            2.0 * m / (1.0 - p).powi(2) * (p - x)
        } else {
            0.0
        }
    }

    /// Local inclination of the camber line in radians, `atan(dyc/dx)`. The thickness is laid off
    /// perpendicular to the camber line at this angle.
    pub fn angle(&self, x: f64) -> f64 {
        self.slope(x).atan()
    }
}
