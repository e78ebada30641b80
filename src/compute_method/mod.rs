#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use serde::{Deserialize, Serialize};

use crate::{
    contribution::Contribution, extrema::StepExtrema, field::Field, frame::FrameSize,
    particle::Particle, vector::Vector2D,
};

/// What [`Particle::acceleration`] holds after a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelerationMode {
    /// The contribution of the last attractor that was not skipped.
    ///
    /// This is not the net acceleration of the particle, but it is what the
    /// acceleration coloring and logs have always been based on.
    #[default]
    LastContribution,
    /// The sum of the contributions of every attractor.
    Net,
}

/// State of a particle after a step, before it is committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyUpdate {
    /// Velocity after every attractor was applied.
    pub velocity: Vector2D,
    /// Acceleration to record, according to the [`AccelerationMode`].
    pub acceleration: Vector2D,
    /// Position for the next step, `position + velocity`.
    pub position: Vector2D,
}

impl BodyUpdate {
    /// Computes the update of the particle at `index` from a snapshot of every particle.
    ///
    /// Attractors are applied in snapshot order, each contribution being added to the
    /// velocity as soon as it is computed. Only positions and masses of the other
    /// particles are read, so the updates of different indices are independent.
    pub fn compute(index: usize, snapshot: &[Particle], mode: AccelerationMode) -> Self {
        let attracted = &snapshot[index];

        let mut velocity = attracted.velocity;
        let mut last = attracted.acceleration;
        let mut net = Vector2D::ZERO;

        for attractor in snapshot {
            let contribution =
                Contribution::gravity(attracted.position, attractor.position, attractor.mass);

            if let Contribution::Acceleration(acceleration) = contribution {
                velocity += acceleration;
                last = acceleration;
                net += acceleration;
            }
        }

        let acceleration = match mode {
            AccelerationMode::LastContribution => last,
            AccelerationMode::Net => net,
        };

        Self {
            velocity,
            acceleration,
            position: attracted.position + velocity,
        }
    }
}

/// Trait for algorithms advancing [`Particles`](Particle) and sampling their force field.
///
/// Implementations must treat `snapshot` as read-only: the caller commits the returned
/// updates once every particle has been processed.
pub trait ComputeMethod {
    /// Computes the update of every particle, in order, and the extrema of their new
    /// velocity and acceleration magnitudes.
    fn step(
        &mut self,
        snapshot: &[Particle],
        mode: AccelerationMode,
    ) -> (Vec<BodyUpdate>, StepExtrema);

    /// Samples the force field of `particles` at every pixel of `frame`.
    fn field(&mut self, particles: &[Particle], frame: FrameSize) -> Field;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{extrema::Extrema, field};

    const EPSILON: f64 = 1E-12;

    fn body(id: u32, mass: f64, x: f64, y: f64) -> Particle {
        Particle::new(id, mass, 1.0, Vector2D::new(x, y), Vector2D::ZERO)
    }

    pub fn lone_particle_stays_at_rest<C: ComputeMethod>(mut cm: C) {
        let snapshot = [body(0, 100.0, 3.0, -2.0)];

        let (updates, extrema) = cm.step(&snapshot, AccelerationMode::LastContribution);

        assert_eq!(
            updates,
            vec![BodyUpdate {
                velocity: Vector2D::ZERO,
                acceleration: Vector2D::ZERO,
                position: Vector2D::new(3.0, -2.0),
            }]
        );
        assert_eq!(extrema.velocity, Extrema::at(0.0));
    }

    pub fn symmetric_two_body<C: ComputeMethod>(mut cm: C) {
        let snapshot = [body(0, 10.0, -5.0, 0.0), body(1, 10.0, 5.0, 0.0)];

        let (updates, extrema) = cm.step(&snapshot, AccelerationMode::LastContribution);

        assert!((updates[0].velocity - Vector2D::new(0.1, 0.0)).length() < EPSILON);
        assert!((updates[1].velocity - Vector2D::new(-0.1, 0.0)).length() < EPSILON);
        assert!((updates[0].position - Vector2D::new(-4.9, 0.0)).length() < EPSILON);
        assert!((updates[1].position - Vector2D::new(4.9, 0.0)).length() < EPSILON);
        assert!((extrema.velocity.max - 0.1).abs() < EPSILON);
        assert!((extrema.acceleration.min - 0.1).abs() < EPSILON);
    }

    // Pulls on the first body are (1, 0) then (0, 1).
    fn right_angle() -> [Particle; 3] {
        [body(0, 1.0, 0.0, 0.0), body(1, 1.0, 1.0, 0.0), body(2, 4.0, 0.0, 2.0)]
    }

    pub fn last_contribution_recorded<C: ComputeMethod>(mut cm: C) {
        let (updates, _) = cm.step(&right_angle(), AccelerationMode::LastContribution);

        assert_eq!(updates[0].velocity, Vector2D::new(1.0, 1.0));
        assert_eq!(updates[0].acceleration, Vector2D::new(0.0, 1.0));
    }

    pub fn net_acceleration_recorded<C: ComputeMethod>(mut cm: C) {
        let (updates, extrema) = cm.step(&right_angle(), AccelerationMode::Net);

        assert_eq!(updates[0].velocity, Vector2D::new(1.0, 1.0));
        assert_eq!(updates[0].acceleration, Vector2D::new(1.0, 1.0));
        assert!(extrema.acceleration.contains(2.0_f64.sqrt()));
    }

    pub fn coincident_bodies_keep_acceleration<C: ComputeMethod>(mut cm: C) {
        let mut first = body(0, 1.0, 0.0, 0.0);
        first.acceleration = Vector2D::new(3.0, 4.0);
        let snapshot = [first, body(1, 2.0, 0.0, 0.0)];

        let (updates, extrema) = cm.step(&snapshot, AccelerationMode::LastContribution);

        assert_eq!(updates[0].velocity, Vector2D::ZERO);
        assert_eq!(updates[0].acceleration, Vector2D::new(3.0, 4.0));
        assert_eq!(updates[0].position, Vector2D::ZERO);
        assert_eq!(updates[1].acceleration, Vector2D::ZERO);
        assert_eq!(extrema.acceleration, Extrema { min: 0.0, max: 5.0 });
    }

    pub fn field_matches_samples<C: ComputeMethod>(mut cm: C) {
        let particles = [body(0, 20.0, -3.0, 1.0), body(1, 5.0, 4.0, -2.0)];
        let frame = FrameSize::new(16, 12);

        let computed = cm.field(&particles, frame);

        let mut extrema = Extrema::EMPTY;
        for (x, y, value) in computed.pixels() {
            let point = Vector2D::new(x as f64, y as f64);
            let expected = field::sample(point, &particles, frame.origin());
            assert_eq!(value, expected);
            extrema = extrema.observe(expected);
        }
        assert_eq!(computed.values().len(), frame.pixel_count());
        assert_eq!(computed.extrema(), extrema);
    }
}
