//! Helpers for producing chordwise sampling positions.

use std::f64::consts::PI;

/// Generate a vec of values which are linearly spaced between `start` and `end` and which have a
/// count of `count`. The first value will be `start` and the last value will be `end`. A count of
/// one produces only `start`, and a count of zero produces an empty vec.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `count`: the total number of discrete, evenly spaced values in the domain
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use naca4::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 3);
/// assert_eq!(domain, vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start; count];
    }

    let step = (end - start) / (count - 1) as f64;
    let mut result = Vec::with_capacity(count);
    for i in 0..count - 1 {
        result.push(start + i as f64 * step);
    }
    result.push(end);
    result
}

/// Generate `count` chordwise positions on [0, 1] using cosine spacing, which clusters the
/// samples near the leading and trailing edges where the surface curvature is highest. The
/// positions are `(1 - cos(pi * i / (count - 1))) / 2`. Only the forward half is evaluated, the aft
/// half is its mirror `1 - x`, so the first value is exactly 0, the last is exactly 1, and with an
/// odd count the middle value is exactly 0.5.
///
/// # Examples
///
/// ```
/// use naca4::common::cosine_space;
/// let x = cosine_space(3);
/// assert_eq!(x, vec![0.0, 0.5, 1.0]);
/// ```
pub fn cosine_space(count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![0.0; count];
    }

    let last = count - 1;
    let mut result = vec![0.0; count];
    for i in 0..=last / 2 {
        let x = 0.5 * (1.0 - (PI * i as f64 / last as f64).cos());
        result[i] = x;
        result[last - i] = 1.0 - x;
    }
    if last % 2 == 0 {
        result[last / 2] = 0.5;
    }
    result
}

/// Returns true if every value is less than or equal to the value which follows it. NaN values
/// compare false and therefore fail the check.
pub(crate) fn are_in_ascending_order(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
