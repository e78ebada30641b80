use serde::{Deserialize, Serialize};

use crate::vector::Vector2D;

/// A point mass and its kinematic state.
///
/// `id`, `mass` and `radius` are fixed for the lifetime of a simulation. `position`,
/// `velocity` and `acceleration` are rewritten once per step by a
/// [`ComputeMethod`](crate::compute_method::ComputeMethod).
///
/// `acceleration` only feeds logging and coloring; it is never integrated.
///
/// ```
/// # use gravfield::prelude::*;
/// let body = Particle::new(0, 10.0, 4.0, Vector2D::new(-5.0, 0.0), Vector2D::ZERO);
///
/// assert_eq!(body.acceleration, Vector2D::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Identifier used for labels, never reassigned.
    pub id: u32,
    /// Mass of the particle, with a gravitational constant of 1.
    pub mass: f64,
    /// Radius of the particle, also used to clamp the force field near its center.
    pub radius: f64,
    /// Position in simulation space.
    pub position: Vector2D,
    /// Velocity, in distance per step.
    pub velocity: Vector2D,
    /// Acceleration recorded during the last step.
    #[serde(default)]
    pub acceleration: Vector2D,
}

impl Particle {
    /// Creates a particle at rest acceleration-wise.
    #[inline]
    pub fn new(id: u32, mass: f64, radius: f64, position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            id,
            mass,
            radius,
            position,
            velocity,
            acceleration: Vector2D::ZERO,
        }
    }

    /// Mass-weighted average position of the given particles.
    ///
    /// Returns `None` if their total mass is zero.
    pub fn barycenter(particles: &[Particle]) -> Option<Vector2D> {
        let (weighted, total_mass) = particles
            .iter()
            .fold((Vector2D::ZERO, 0.0), |(weighted, mass), p| {
                (weighted + p.position * p.mass, mass + p.mass)
            });

        (total_mass != 0.0).then(|| weighted / total_mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, mass: f64) -> Particle {
        Particle::new(0, mass, 1.0, Vector2D::new(x, y), Vector2D::ZERO)
    }

    #[test]
    fn barycenter_weighted_by_mass() {
        let particles = [at(0.0, 0.0, 3.0), at(4.0, 8.0, 1.0)];

        assert_eq!(
            Particle::barycenter(&particles),
            Some(Vector2D::new(1.0, 2.0))
        );
    }

    #[test]
    fn barycenter_without_mass() {
        assert_eq!(Particle::barycenter(&[]), None);
        assert_eq!(Particle::barycenter(&[at(1.0, 1.0, 0.0)]), None);
    }
}
