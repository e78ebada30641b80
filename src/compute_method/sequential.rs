use super::{AccelerationMode, BodyUpdate};
use crate::{extrema::StepExtrema, field::Field, frame::FrameSize, particle::Particle};

/// A brute-force [`ComputeMethod`](super::ComputeMethod) using the CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl super::ComputeMethod for BruteForce {
    #[inline]
    fn step(
        &mut self,
        snapshot: &[Particle],
        mode: AccelerationMode,
    ) -> (Vec<BodyUpdate>, StepExtrema) {
        let mut extrema = StepExtrema::default();

        let updates = (0..snapshot.len())
            .map(|i| {
                let update = BodyUpdate::compute(i, snapshot, mode);
                extrema = extrema.observe(update.velocity.length(), update.acceleration.length());
                update
            })
            .collect();

        (updates, extrema)
    }

    #[inline]
    fn field(&mut self, particles: &[Particle], frame: FrameSize) -> Field {
        Field::build(particles, frame)
    }
}
