//! This module contains the closed-form geometry of the NACA four-digit airfoil family: the
//! thickness envelope, the piecewise mean camber line, and the profile which combines them into
//! upper and lower surface coordinates.
//!
//! All positions are fractions of a unit chord, with the leading edge at `x = 0` and the trailing
//! edge at `x = 1`. Every evaluation is independent per position, so the outputs always have the
//! same length as the input and the input order is preserved.

mod camber;
mod profile;
pub mod thickness;

pub use camber::CamberLine;
pub use profile::{AirfoilProfile, AirfoilSurfaces};
