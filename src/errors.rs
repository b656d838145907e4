use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised when a profile is built through a checked constructor, or when a set of chordwise
/// positions cannot be used for an operation that depends on their order.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A shape parameter was NaN or infinite
    NonFinite { parameter: &'static str },

    /// A shape parameter fell outside the range of the four-digit designation
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A chordwise position was NaN where the operation depends on position order
    NanPosition { index: usize },

    /// The chordwise positions were not in ascending order
    Unordered,
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::NonFinite { parameter } => {
                write!(f, "parameter '{}' must be finite", parameter)
            }
            ProfileError::OutOfRange {
                parameter,
                value,
                min,
                max,
            } => write!(
                f,
                "parameter '{}' = {} is outside the range [{}, {}]",
                parameter, value, min, max
            ),
            ProfileError::NanPosition { index } => {
                write!(f, "chordwise position at index {} is NaN", index)
            }
            ProfileError::Unordered => {
                write!(f, "chordwise positions must be in ascending order")
            }
        }
    }
}

impl Error for ProfileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_parameter() {
        let e = ProfileError::OutOfRange {
            parameter: "m",
            value: 12.0,
            min: 0.0,
            max: 9.0,
        };
        assert_eq!(e.to_string(), "parameter 'm' = 12 is outside the range [0, 9]");
    }

    #[test]
    fn nan_position_message_names_the_index() {
        let e = ProfileError::NanPosition { index: 3 };
        assert_eq!(e.to_string(), "chordwise position at index 3 is NaN");
    }

    #[test]
    fn converts_into_crate_result() {
        fn fails() -> crate::Result<()> {
            Err(ProfileError::Unordered.into())
        }

        let err = fails().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProfileError>(),
            Some(&ProfileError::Unordered)
        );
    }
}
