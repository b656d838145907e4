//! Surface geometry of NACA four-digit airfoil sections.
//!
//! The four-digit family describes a section with three numbers: the maximum camber, the chordwise
//! position of the maximum camber, and the maximum thickness. This crate evaluates the closed-form
//! thickness envelope and mean camber line of such a section at caller-supplied chordwise
//! positions, and combines them into the upper and lower surface coordinates on a unit chord.
//!
//! ```
//! use naca4::AirfoilProfile;
//! use naca4::common::cosine_space;
//!
//! let profile = AirfoilProfile::new(2.0, 4.0, 12.0);
//! let x = cosine_space(50);
//! let (xu, yu) = profile.upper(&x);
//! let (xl, yl) = profile.lower(&x);
//! assert_eq!(xu.len(), 50);
//! assert_eq!(xl.len(), 50);
//! assert!(yu[25] > yl[25]);
//! ```

use std::error::Error;

pub mod airfoil;
pub mod common;
mod errors;

pub use airfoil::{AirfoilProfile, AirfoilSurfaces, CamberLine};
pub use errors::ProfileError;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub type Point2 = parry2d_f64::na::Point2<f64>;
