//! This module contains the four-digit airfoil profile, which lays the thickness envelope off
//! perpendicular to the mean camber line to produce the upper and lower surfaces.

use crate::airfoil::camber::CamberLine;
use crate::airfoil::thickness::half_thickness;
use crate::common::are_in_ascending_order;
use crate::errors::ProfileError;
use crate::{Point2, Result};
use itertools::izip;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A NACA four-digit airfoil section on a unit chord. The profile holds only its three shape
/// parameters and is never modified after construction, so it can be shared freely between
/// threads and evaluated any number of times.
///
/// Every evaluation method takes a slice of chordwise positions and returns outputs of the same
/// length, with each position evaluated independently of the others. Positions outside [0, 1] are
/// not rejected: a negative position produces NaN from the thickness term, and that NaN is carried
/// through to any surface coordinate which depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirfoilProfile {
    /// Maximum camber as a fraction of the chord
    max_camber: f64,

    /// Chordwise position of the maximum camber as a fraction of the chord
    camber_position: f64,

    /// Maximum thickness as a fraction of the chord
    max_thickness: f64,
}

impl AirfoilProfile {
    /// Create a new profile from the three numbers of a four-digit designation. No range checking
    /// is done, values outside the designation ranges produce geometrically defined (if not very
    /// useful) sections. Use `try_new` to reject them instead.
    ///
    /// # Arguments
    ///
    /// * `m`: maximum camber in percent of the chord, nominally 0 to 9
    /// * `p`: position of the maximum camber in tenths of the chord, nominally 0 to 9
    /// * `t`: maximum thickness in percent of the chord, nominally 0 to 99
    ///
    /// returns: AirfoilProfile
    ///
    /// # Examples
    ///
    /// ```
    /// use naca4::AirfoilProfile;
    /// let naca2412 = AirfoilProfile::new(2.0, 4.0, 12.0);
    /// assert_eq!(naca2412.max_camber(), 0.02);
    /// assert_eq!(naca2412.camber_position(), 0.4);
    /// assert_eq!(naca2412.max_thickness(), 0.12);
    /// ```
    pub fn new(m: f64, p: f64, t: f64) -> Self {
        Self {
            max_camber: 0.01 * m,
            camber_position: 0.1 * p,
            max_thickness: 0.01 * t,
        }
    }

    /// Create a new profile from the three numbers of a four-digit designation, failing if any of
    /// them is not finite or lies outside its designation range. Values are never clamped.
    ///
    /// # Arguments
    ///
    /// * `m`: maximum camber in percent of the chord, 0 to 9
    /// * `p`: position of the maximum camber in tenths of the chord, 0 to 9
    /// * `t`: maximum thickness in percent of the chord, 0 to 99
    ///
    /// returns: Result<AirfoilProfile, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use naca4::{AirfoilProfile, ProfileError};
    /// assert!(AirfoilProfile::try_new(4.0, 4.0, 15.0).is_ok());
    ///
    /// let err = AirfoilProfile::try_new(12.0, 4.0, 15.0).unwrap_err();
    /// assert!(matches!(
    ///     err.downcast_ref::<ProfileError>(),
    ///     Some(ProfileError::OutOfRange { parameter: "m", .. })
    /// ));
    /// ```
    pub fn try_new(m: f64, p: f64, t: f64) -> Result<Self> {
        check_range("m", m, 9.0)?;
        check_range("p", p, 9.0)?;
        check_range("t", t, 99.0)?;
        Ok(Self::new(m, p, t))
    }

    /// Create a new profile directly from chord fractions, with no scaling and no range checking.
    pub fn from_fractions(max_camber: f64, camber_position: f64, max_thickness: f64) -> Self {
        Self {
            max_camber,
            camber_position,
            max_thickness,
        }
    }

    pub fn max_camber(&self) -> f64 {
        self.max_camber
    }

    pub fn camber_position(&self) -> f64 {
        self.camber_position
    }

    pub fn max_thickness(&self) -> f64 {
        self.max_thickness
    }

    /// The mean camber line of this profile
    pub fn camber_line(&self) -> CamberLine {
        CamberLine::new(self.max_camber, self.camber_position)
    }

    /// Format the four-digit designation of this profile, such as "2412", rounding each parameter
    /// to its nearest digit(s). Profiles built from out of range values produce a label with more
    /// digits than the standard four.
    ///
    /// # Examples
    ///
    /// ```
    /// use naca4::AirfoilProfile;
    /// assert_eq!(AirfoilProfile::new(2.0, 4.0, 12.0).designation(), "2412");
    /// assert_eq!(AirfoilProfile::new(0.0, 0.0, 9.0).designation(), "0009");
    /// ```
    pub fn designation(&self) -> String {
        format!(
            "{}{}{:02}",
            (self.max_camber * 100.0).round() as i64,
            (self.camber_position * 10.0).round() as i64,
            (self.max_thickness * 100.0).round() as i64
        )
    }

    /// Computes the half-thickness `yt` at each chordwise position.
    ///
    /// # Arguments
    ///
    /// * `x`: chordwise positions, expected in [0, 1]
    ///
    /// returns: Vec<f64, Global>
    pub fn thickness(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|&xi| half_thickness(self.max_thickness, xi))
            .collect()
    }

    /// Computes the height `yc` of the mean camber line at each chordwise position.
    pub fn camber(&self, x: &[f64]) -> Vec<f64> {
        let line = self.camber_line();
        x.iter().map(|&xi| line.height(xi)).collect()
    }

    /// Computes the inclination of the mean camber line, in radians, at each chordwise position.
    pub fn camber_angle(&self, x: &[f64]) -> Vec<f64> {
        let line = self.camber_line();
        x.iter().map(|&xi| line.angle(xi)).collect()
    }

    /// Computes the upper surface coordinates at each chordwise position, returned as the separate
    /// x and y vectors `(xu, yu)`.
    ///
    /// # Arguments
    ///
    /// * `x`: chordwise positions on the camber line, expected in [0, 1]
    ///
    /// returns: (Vec<f64, Global>, Vec<f64, Global>)
    ///
    /// # Examples
    ///
    /// ```
    /// use naca4::AirfoilProfile;
    /// let profile = AirfoilProfile::new(0.0, 0.0, 12.0);
    /// let (xu, yu) = profile.upper(&[0.0, 0.5, 1.0]);
    /// assert_eq!(xu, vec![0.0, 0.5, 1.0]);
    /// assert_eq!(yu, profile.thickness(&[0.0, 0.5, 1.0]));
    /// ```
    pub fn upper(&self, x: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let yt = self.thickness(x);
        let yc = self.camber(x);
        let theta = self.camber_angle(x);

        izip!(x, yt, yc, theta)
            .map(|(&x, thickness, camber, angle)| {
                Station {
                    x,
                    thickness,
                    camber,
                    angle,
                }
                .upper()
            })
            .unzip()
    }

    /// Computes the lower surface coordinates at each chordwise position, returned as the separate
    /// x and y vectors `(xl, yl)`.
    pub fn lower(&self, x: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let yt = self.thickness(x);
        let yc = self.camber(x);
        let theta = self.camber_angle(x);

        izip!(x, yt, yc, theta)
            .map(|(&x, thickness, camber, angle)| {
                Station {
                    x,
                    thickness,
                    camber,
                    angle,
                }
                .lower()
            })
            .unzip()
    }

    /// Evaluates the thickness, camber and camber angle once per position and produces both
    /// surfaces from them. The values are identical to those of the individual methods.
    pub fn surfaces(&self, x: &[f64]) -> AirfoilSurfaces {
        let stations = x.iter().map(|&xi| self.station(xi)).collect::<Vec<_>>();
        AirfoilSurfaces::from_stations(&stations)
    }

    /// The same as `surfaces`, but with the positions evaluated in parallel. Since each position
    /// is evaluated on its own, the result is bit-identical to `surfaces`. This is only worth
    /// using for large sets of positions.
    pub fn par_surfaces(&self, x: &[f64]) -> AirfoilSurfaces {
        let stations = x
            .par_iter()
            .map(|&xi| self.station(xi))
            .collect::<Vec<_>>();
        AirfoilSurfaces::from_stations(&stations)
    }

    /// Computes the upper surface at each chordwise position as a vec of points.
    pub fn upper_points(&self, x: &[f64]) -> Vec<Point2> {
        let (xu, yu) = self.upper(x);
        to_points(&xu, &yu)
    }

    /// Computes the lower surface at each chordwise position as a vec of points.
    pub fn lower_points(&self, x: &[f64]) -> Vec<Point2> {
        let (xl, yl) = self.lower(x);
        to_points(&xl, &yl)
    }

    /// Computes the mean camber line at each chordwise position as a vec of points.
    pub fn camber_points(&self, x: &[f64]) -> Vec<Point2> {
        to_points(x, &self.camber(x))
    }

    /// Builds the full section outline as a single ordered loop of points. The loop starts at the
    /// trailing edge on the upper surface, runs forward to the leading edge and then back aft along
    /// the lower surface. When the positions start at exactly 0 the upper and lower surfaces share
    /// the leading edge point, and it appears only once. The loop is not explicitly closed, and
    /// because the four-digit trailing edge has a finite thickness the last point is not the first.
    ///
    /// A NaN position has no place in the ordering and is reported as
    /// `ProfileError::NanPosition` before the order is checked.
    ///
    /// # Arguments
    ///
    /// * `x`: chordwise positions in ascending order, typically from 0 to 1
    ///
    /// returns: Result<Vec<OPoint<f64, Const<2>>, Global>, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use naca4::AirfoilProfile;
    /// use naca4::common::cosine_space;
    ///
    /// let profile = AirfoilProfile::new(4.0, 4.0, 12.0);
    /// let outline = profile.outline(&cosine_space(21)).unwrap();
    /// assert_eq!(outline.len(), 41);
    /// ```
    pub fn outline(&self, x: &[f64]) -> Result<Vec<Point2>> {
        if let Some(index) = x.iter().position(|v| v.is_nan()) {
            return Err(ProfileError::NanPosition { index }.into());
        }

        if !are_in_ascending_order(x) {
            return Err(ProfileError::Unordered.into());
        }

        let surfaces = self.surfaces(x);
        let mut points = surfaces.upper_points();
        points.reverse();

        let skip = usize::from(x.first() == Some(&0.0));
        points.extend(surfaces.lower_points().into_iter().skip(skip));

        Ok(points)
    }

    fn station(&self, x: f64) -> Station {
        let line = self.camber_line();
        Station {
            x,
            thickness: half_thickness(self.max_thickness, x),
            camber: line.height(x),
            angle: line.angle(x),
        }
    }
}

/// The full set of intermediate and surface values of a profile evaluated at a set of chordwise
/// positions. All vectors have the same length as `x`, and entry `i` of each belongs to `x[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirfoilSurfaces {
    /// The chordwise positions the profile was evaluated at
    pub x: Vec<f64>,

    /// Half-thickness `yt`
    pub thickness: Vec<f64>,

    /// Camber line height `yc`
    pub camber: Vec<f64>,

    /// Camber line inclination in radians
    pub angle: Vec<f64>,

    pub x_upper: Vec<f64>,
    pub y_upper: Vec<f64>,
    pub x_lower: Vec<f64>,
    pub y_lower: Vec<f64>,
}

impl AirfoilSurfaces {
    fn from_stations(stations: &[Station]) -> Self {
        let mut result = Self::default();
        for s in stations {
            let (xu, yu) = s.upper();
            let (xl, yl) = s.lower();
            result.x.push(s.x);
            result.thickness.push(s.thickness);
            result.camber.push(s.camber);
            result.angle.push(s.angle);
            result.x_upper.push(xu);
            result.y_upper.push(yu);
            result.x_lower.push(xl);
            result.y_lower.push(yl);
        }
        result
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn upper_points(&self) -> Vec<Point2> {
        to_points(&self.x_upper, &self.y_upper)
    }

    pub fn lower_points(&self) -> Vec<Point2> {
        to_points(&self.x_lower, &self.y_lower)
    }

    pub fn camber_points(&self) -> Vec<Point2> {
        to_points(&self.x, &self.camber)
    }
}

/// The values of a profile at a single chordwise position
#[derive(Debug, Clone, Copy)]
struct Station {
    x: f64,
    thickness: f64,
    camber: f64,
    angle: f64,
}

impl Station {
    fn upper(&self) -> (f64, f64) {
        (
            self.x - self.thickness * self.angle.sin(),
            self.camber + self.thickness * self.angle.cos(),
        )
    }

    fn lower(&self) -> (f64, f64) {
        (
            self.x + self.thickness * self.angle.sin(),
            self.camber - self.thickness * self.angle.cos(),
        )
    }
}

fn check_range(
    parameter: &'static str,
    value: f64,
    max: f64,
) -> std::result::Result<(), ProfileError> {
    if !value.is_finite() {
        return Err(ProfileError::NonFinite { parameter });
    }

    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::OutOfRange {
            parameter,
            value,
            min: 0.0,
            max,
        })
    }
}

fn to_points(xs: &[f64], ys: &[f64]) -> Vec<Point2> {
    xs.iter()
        .zip(ys.iter())
        .map(|(x, y)| Point2::new(*x, *y))
        .collect()
}
