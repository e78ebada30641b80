use crate::{particle::Particle, vector::Stretch, vector::Vector2D};

/// Outcome of evaluating the pull of one body at one location.
///
/// Coincident positions have no direction to pull in and are reported as
/// [`Contribution::Skipped`] rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// The acceleration vector produced by the body.
    Acceleration(Vector2D),
    /// The separation was zero, the body contributes nothing.
    Skipped,
}

impl Contribution {
    /// Gravitational acceleration `attractor` exerts on a body at `attracted`.
    ///
    /// `|a| = mass / |d|²` along `d = attractor - attracted`.
    #[inline]
    pub fn gravity(attracted: Vector2D, attractor: Vector2D, mass: f64) -> Self {
        let dir = attractor - attracted;

        dir.stretch(mass / dir.length_squared()).into()
    }

    /// Field contribution of `body` at `point`.
    ///
    /// `origin` maps the body into the point's space. The distance is clamped to the body's
    /// radius so that samples inside a body stay finite.
    #[inline]
    pub fn field(point: Vector2D, origin: Vector2D, body: &Particle) -> Self {
        let dir = body.position + origin - point;
        let denom = dir.length().max(body.radius);

        dir.stretch(body.mass / (denom * denom)).into()
    }

    /// The acceleration if any, for callers that fold contributions.
    #[inline]
    pub fn acceleration(self) -> Option<Vector2D> {
        match self {
            Self::Acceleration(acceleration) => Some(acceleration),
            Self::Skipped => None,
        }
    }
}

impl<E> From<Result<Vector2D, E>> for Contribution {
    #[inline]
    fn from(result: Result<Vector2D, E>) -> Self {
        result.map_or(Self::Skipped, Self::Acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_points_toward_attractor() {
        let contribution =
            Contribution::gravity(Vector2D::new(-5.0, 0.0), Vector2D::new(5.0, 0.0), 10.0);

        let acceleration = contribution.acceleration().unwrap();
        assert!((acceleration - Vector2D::new(0.1, 0.0)).length() < 1E-12);
    }

    #[test]
    fn gravity_self_pair_is_skipped() {
        let p = Vector2D::new(1.0, 2.0);

        assert_eq!(Contribution::gravity(p, p, 5.0), Contribution::Skipped);
    }

    #[test]
    fn field_clamped_inside_radius() {
        let body = Particle::new(0, 8.0, 2.0, Vector2D::ZERO, Vector2D::ZERO);

        let inside = Contribution::field(Vector2D::new(1.0, 0.0), Vector2D::ZERO, &body);
        let edge = Contribution::field(Vector2D::new(2.0, 0.0), Vector2D::ZERO, &body);

        // Both are clamped to radius 2: 8 / 2² = 2.
        assert!((inside.acceleration().unwrap().length() - 2.0).abs() < 1E-12);
        assert!((edge.acceleration().unwrap().length() - 2.0).abs() < 1E-12);
    }

    #[test]
    fn field_applies_origin() {
        let body = Particle::new(0, 1.0, 0.5, Vector2D::ZERO, Vector2D::ZERO);
        let origin = Vector2D::new(10.0, 10.0);

        assert_eq!(
            Contribution::field(Vector2D::new(10.0, 10.0), origin, &body),
            Contribution::Skipped
        );
    }
}
