use std::fmt;

/// Recoverable numeric conditions raised by the vector and color math.
///
/// None of these ever escape a simulation step or a field build: the integrator
/// and the field sampler turn [`Error::DegenerateVector`] into a skipped
/// contribution, and every normalization inside the crate falls back to `0.0`
/// on [`Error::DegenerateRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A zero-length vector was asked to be stretched to a magnitude.
    DegenerateVector,
    /// A value was normalized against a range whose bounds are equal.
    DegenerateRange {
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateVector => write!(f, "cannot stretch a zero-length vector"),
            Self::DegenerateRange { min, max } => {
                write!(f, "cannot normalize against degenerate range [{}, {}]", min, max)
            }
        }
    }
}

impl std::error::Error for Error {}
