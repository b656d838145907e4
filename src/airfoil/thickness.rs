//! The half-thickness envelope shared by every section of the four-digit family.

/// Polynomial coefficients `a0..a4` of the thickness distribution. `a0` multiplies `sqrt(x)`, the
/// rest multiply increasing powers of `x` starting at `x^1`.
pub const THICKNESS_COEFFICIENTS: [f64; 5] = [0.2969, -0.126, -0.3516, 0.2843, -0.1015];

/// Half-thickness at `x = 1` per unit of maximum thickness, `5 * (a0 + a1 + a2 + a3 + a4)`. The
/// four-digit envelope does not close at the trailing edge with these coefficients.
pub const TRAILING_EDGE_FACTOR: f64 = 0.0105;

/// Computes the half-thickness `yt` of the section at the chordwise position `x`, measured
/// perpendicular to the camber line.
///
/// A negative `x` produces NaN from the square root term, which is returned as is.
///
/// # Arguments
///
/// * `max_thickness`: maximum thickness as a fraction of the chord
/// * `x`: chordwise position, expected in [0, 1]
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use naca4::airfoil::thickness::half_thickness;
/// assert_eq!(half_thickness(0.12, 0.0), 0.0);
/// assert!(half_thickness(0.12, -0.1).is_nan());
/// ```
pub fn half_thickness(max_thickness: f64, x: f64) -> f64 {
    let [a0, a1, a2, a3, a4] = THICKNESS_COEFFICIENTS;
    let polynomial = a0 * x.sqrt() + a1 * x + a2 * x.powi(2) + a3 * x.powi(3) + a4 * x.powi(4);
    max_thickness * 5.0 * polynomial
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn trailing_edge_factor_matches_coefficients() {
        let sum: f64 = THICKNESS_COEFFICIENTS.iter().sum();
        assert_relative_eq!(5.0 * sum, TRAILING_EDGE_FACTOR, epsilon = 1.0e-12);
    }

    #[test_case(0.06)]
    #[test_case(0.12)]
    #[test_case(0.99)]
    fn trailing_edge_residual(t: f64) {
        let yt = half_thickness(t, 1.0);
        assert_relative_eq!(yt, t * TRAILING_EDGE_FACTOR, epsilon = 1.0e-12);
    }

    #[test]
    fn maximum_is_near_thirty_percent_chord() {
        // The envelope is normalized so that the full thickness 2 * yt peaks at about t near x = 0.3
        let t = 0.12;
        assert_relative_eq!(2.0 * half_thickness(t, 0.3), t, epsilon = 1.0e-3);
        assert!(half_thickness(t, 0.3) > half_thickness(t, 0.2));
        assert!(half_thickness(t, 0.3) > half_thickness(t, 0.4));
    }

    #[test]
    fn scales_linearly_with_thickness() {
        assert_relative_eq!(
            half_thickness(0.24, 0.37),
            2.0 * half_thickness(0.12, 0.37),
            epsilon = 1.0e-15
        );
    }
}
