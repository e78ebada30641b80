use rayon::prelude::*;

use super::{AccelerationMode, BodyUpdate};
use crate::{
    extrema::{Extrema, StepExtrema},
    field::{self, Field},
    frame::FrameSize,
    particle::Particle,
    vector::Vector2D,
};

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// Each particle (or each row of pixels) is owned by one worker and extrema are merged
/// with [`Extrema::merge`], so results are identical to [`sequential::BruteForce`](super::sequential::BruteForce).
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl super::ComputeMethod for BruteForce {
    fn step(
        &mut self,
        snapshot: &[Particle],
        mode: AccelerationMode,
    ) -> (Vec<BodyUpdate>, StepExtrema) {
        let updates: Vec<BodyUpdate> = (0..snapshot.len())
            .into_par_iter()
            .map(|i| BodyUpdate::compute(i, snapshot, mode))
            .collect();

        let extrema = updates
            .par_iter()
            .fold(StepExtrema::default, |extrema, update| {
                extrema.observe(update.velocity.length(), update.acceleration.length())
            })
            .reduce(StepExtrema::default, StepExtrema::merge);

        (updates, extrema)
    }

    fn field(&mut self, particles: &[Particle], frame: FrameSize) -> Field {
        let origin = frame.origin();
        let mut values = vec![0.0; frame.pixel_count()];

        if frame.width > 0 {
            values
                .par_chunks_mut(frame.width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, value) in row.iter_mut().enumerate() {
                        let point = Vector2D::new(x as f64, y as f64);
                        *value = field::sample(point, particles, origin);
                    }
                });
        }

        let extrema = values
            .par_iter()
            .fold(|| Extrema::EMPTY, |extrema, &value| extrema.observe(value))
            .reduce(|| Extrema::EMPTY, Extrema::merge);

        Field::new(frame, values, extrema)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{sequential, tests, ComputeMethod};
    use super::*;
    use crate::{config::SimulationConfig, simulation::SimulationState};

    #[test]
    fn lone_particle() {
        tests::lone_particle_stays_at_rest(BruteForce);
    }

    #[test]
    fn two_body() {
        tests::symmetric_two_body(BruteForce);
    }

    #[test]
    fn last_contribution() {
        tests::last_contribution_recorded(BruteForce);
    }

    #[test]
    fn net_acceleration() {
        tests::net_acceleration_recorded(BruteForce);
    }

    #[test]
    fn coincident_bodies() {
        tests::coincident_bodies_keep_acceleration(BruteForce);
    }

    #[test]
    fn field() {
        tests::field_matches_samples(BruteForce);
    }

    #[test]
    fn matches_sequential() {
        let snapshot: Vec<_> = (0..64)
            .map(|i| {
                let angle = i as f64 * 0.7;
                let position = Vector2D::new(angle.cos(), angle.sin()) * (10.0 + i as f64);
                let velocity = Vector2D::new(0.0, 0.01 * i as f64);
                Particle::new(i, 1.0 + (i % 5) as f64, 1.0, position, velocity)
            })
            .collect();

        for mode in [AccelerationMode::LastContribution, AccelerationMode::Net] {
            assert_eq!(
                BruteForce.step(&snapshot, mode),
                sequential::BruteForce.step(&snapshot, mode)
            );
        }

        let frame = FrameSize::new(33, 21);
        assert_eq!(
            BruteForce.field(&snapshot, frame),
            sequential::BruteForce.field(&snapshot, frame)
        );
    }

    #[test]
    fn simulation_matches_sequential() {
        let particles: Vec<_> = (0..24)
            .map(|i| {
                let angle = i as f64 * 1.3;
                let position = Vector2D::new(angle.cos(), angle.sin()) * (20.0 + 2.0 * i as f64);
                let velocity = Vector2D::new(-angle.sin(), angle.cos()) * 0.3;
                Particle::new(i, 2.0 + (i % 3) as f64, 1.5, position, velocity)
            })
            .collect();
        let frame = FrameSize::new(48, 48);

        for mode in [AccelerationMode::LastContribution, AccelerationMode::Net] {
            let config = SimulationConfig {
                acceleration_mode: mode,
            };
            let mut threaded =
                SimulationState::with_method(particles.clone(), frame, BruteForce, config);
            let mut single = SimulationState::with_method(
                particles.clone(),
                frame,
                sequential::BruteForce,
                config,
            );

            for _ in 0..15 {
                assert_eq!(threaded.advance(), single.advance());
            }

            assert_eq!(threaded.history(), single.history());
            assert_eq!(threaded.extrema(), single.extrema());
            assert_eq!(threaded.particles(), single.particles());
            assert_eq!(threaded.field(), single.field());
        }
    }
}
