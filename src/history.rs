use crate::{particle::Particle, vector::Vector2D};

/// Per-step logs of every particle, index-aligned with the particle sequence.
///
/// Row `k` holds the state after `k` steps, row 0 being the initial state.
/// The three logs always have the same number of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    positions: Vec<Vec<Vector2D>>,
    velocities: Vec<Vec<f64>>,
    accelerations: Vec<Vec<f64>>,
}

impl History {
    /// History seeded with the initial state of `particles`.
    ///
    /// Accelerations of the initial row are logged as zero.
    pub fn new(particles: &[Particle]) -> Self {
        Self {
            positions: vec![particles.iter().map(|p| p.position).collect()],
            velocities: vec![particles.iter().map(|p| p.velocity.length()).collect()],
            accelerations: vec![vec![0.0; particles.len()]],
        }
    }

    /// Appends one row to each log.
    pub(crate) fn push(
        &mut self,
        positions: Vec<Vector2D>,
        velocities: Vec<f64>,
        accelerations: Vec<f64>,
    ) {
        debug_assert!(
            positions.len() == velocities.len() && velocities.len() == accelerations.len()
        );

        self.positions.push(positions);
        self.velocities.push(velocities);
        self.accelerations.push(accelerations);
    }

    /// Number of logged rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether nothing was logged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Logged positions, one row per step.
    #[inline]
    pub fn positions(&self) -> &[Vec<Vector2D>] {
        &self.positions
    }

    /// Logged velocity magnitudes, one row per step.
    #[inline]
    pub fn velocities(&self) -> &[Vec<f64>] {
        &self.velocities
    }

    /// Logged acceleration magnitudes, one row per step.
    #[inline]
    pub fn accelerations(&self) -> &[Vec<f64>] {
        &self.accelerations
    }

    /// Iterates over the trail segments of every particle.
    ///
    /// Yields `(row, index, from, to)` where `to` is the position of particle `index`
    /// at `row` and `from` its position at `row - 1`, for every row but the first.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize, Vector2D, Vector2D)> + '_ {
        self.positions
            .windows(2)
            .enumerate()
            .flat_map(|(i, rows)| {
                rows[0]
                    .iter()
                    .zip(&rows[1])
                    .enumerate()
                    .map(move |(j, (&from, &to))| (i + 1, j, from, to))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particles() -> Vec<Particle> {
        vec![
            Particle::new(0, 1.0, 1.0, Vector2D::ZERO, Vector2D::new(3.0, 4.0)),
            Particle::new(1, 1.0, 1.0, Vector2D::ONE, Vector2D::ZERO),
        ]
    }

    #[test]
    fn seeded_with_initial_state() {
        let history = History::new(&particles());

        assert_eq!(history.len(), 1);
        assert_eq!(history.positions()[0], vec![Vector2D::ZERO, Vector2D::ONE]);
        assert_eq!(history.velocities()[0], vec![5.0, 0.0]);
        assert_eq!(history.accelerations()[0], vec![0.0, 0.0]);
    }

    #[test]
    fn segments_link_consecutive_rows() {
        let mut history = History::new(&particles());
        history.push(
            vec![Vector2D::X, Vector2D::Y],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        );

        let segments: Vec<_> = history.segments().collect();

        assert_eq!(
            segments,
            vec![
                (1, 0, Vector2D::ZERO, Vector2D::X),
                (1, 1, Vector2D::ONE, Vector2D::Y),
            ]
        );
    }
}
