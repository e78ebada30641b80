use crate::error::Error;

/// Two-dimensional `f64` vector used for positions, velocities and accelerations.
///
/// Addition, subtraction and scaling come from [`glam`]; the magnitude is
/// [`DVec2::length`](glam::DVec2::length).
pub type Vector2D = glam::DVec2;

/// Vectors that can be rescaled to a given magnitude while keeping their direction.
pub trait Stretch: Sized {
    /// Scalar type of the target magnitude.
    type Scalar;

    /// Returns a vector with the same direction as `self` and a magnitude of exactly `magnitude`.
    ///
    /// Fails with [`Error::DegenerateVector`] when `self` has no direction.
    fn stretch(self, magnitude: Self::Scalar) -> Result<Self, Error>;
}

impl Stretch for Vector2D {
    type Scalar = f64;

    #[inline]
    fn stretch(self, magnitude: f64) -> Result<Self, Error> {
        let len = self.length();

        if len == 0.0 {
            return Err(Error::DegenerateVector);
        }

        Ok(self * (magnitude / len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1E-12;

    #[test]
    fn stretch_keeps_direction() {
        let v = Vector2D::new(3.0, 4.0);
        let stretched = v.stretch(10.0).unwrap();

        assert!((stretched - Vector2D::new(6.0, 8.0)).length() < EPSILON);
        assert!((stretched.length() - 10.0).abs() < EPSILON);
    }

    #[test]
    fn stretch_to_negative_magnitude_flips() {
        let stretched = Vector2D::new(0.0, 2.0).stretch(-1.0).unwrap();

        assert!((stretched - Vector2D::new(0.0, -1.0)).length() < EPSILON);
    }

    #[test]
    fn stretch_zero_vector() {
        assert_eq!(Vector2D::ZERO.stretch(1.0), Err(Error::DegenerateVector));
    }
}
