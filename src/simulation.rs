use tracing::{debug, trace};

use crate::{
    compute_method::{sequential, ComputeMethod},
    config::SimulationConfig,
    extrema::{Extrema, StepExtrema},
    field::{self, Field},
    frame::FrameSize,
    history::History,
    particle::Particle,
    vector::Vector2D,
};

/// Everything produced by one call to [`SimulationState::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Number of steps taken, including this one.
    pub step: usize,
    /// Committed positions, in particle order.
    pub positions: Vec<Vector2D>,
    /// Velocity magnitudes, in particle order.
    pub velocity_magnitudes: Vec<f64>,
    /// Acceleration magnitudes, in particle order.
    pub acceleration_magnitudes: Vec<f64>,
    /// Extrema of this step's magnitudes only.
    pub step_extrema: StepExtrema,
    /// Extrema of the whole run, this step included.
    pub extrema: StepExtrema,
}

/// A running simulation: particles, step counter, logs and run-wide extrema.
///
/// ```
/// # use gravfield::prelude::*;
/// let particles = vec![
///     Particle::new(0, 10.0, 2.0, Vector2D::new(-5.0, 0.0), Vector2D::ZERO),
///     Particle::new(1, 10.0, 2.0, Vector2D::new(5.0, 0.0), Vector2D::ZERO),
/// ];
/// let mut simulation = SimulationState::new(particles, FrameSize::new(64, 64));
///
/// let result = simulation.advance();
///
/// assert_eq!(result.step, 1);
/// assert_eq!(simulation.history().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationState<C = sequential::BruteForce> {
    particles: Vec<Particle>,
    frame: FrameSize,
    step_count: usize,
    history: History,
    extrema: StepExtrema,
    config: SimulationConfig,
    method: C,
}

impl SimulationState {
    /// Creates a sequential simulation with the default [`SimulationConfig`].
    pub fn new(particles: Vec<Particle>, frame: FrameSize) -> Self {
        Self::with_method(particles, frame, sequential::BruteForce, SimulationConfig::default())
    }
}

impl<C: ComputeMethod> SimulationState<C> {
    /// Creates a simulation advanced by `method`.
    ///
    /// Velocity extrema start at the initial velocity magnitudes, acceleration extrema at 0.
    pub fn with_method(
        particles: Vec<Particle>,
        frame: FrameSize,
        method: C,
        config: SimulationConfig,
    ) -> Self {
        let history = History::new(&particles);
        let extrema = StepExtrema {
            velocity: Extrema::of(history.velocities()[0].iter().copied()),
            acceleration: Extrema::at(0.0),
        };

        debug!(
            particles = particles.len(),
            width = frame.width,
            height = frame.height,
            acceleration_mode = ?config.acceleration_mode,
            "simulation created"
        );

        Self {
            particles,
            frame,
            step_count: 0,
            history,
            extrema,
            config,
            method,
        }
    }

    /// Advances every particle by one step.
    ///
    /// Forces are evaluated against the positions of the previous step only; new
    /// positions are committed once every particle has been processed.
    pub fn advance(&mut self) -> StepResult {
        let (updates, step_extrema) = self
            .method
            .step(&self.particles, self.config.acceleration_mode);

        for (particle, update) in self.particles.iter_mut().zip(&updates) {
            particle.velocity = update.velocity;
            particle.acceleration = update.acceleration;
            particle.position = update.position;
        }

        let positions: Vec<_> = updates.iter().map(|u| u.position).collect();
        let velocity_magnitudes: Vec<_> = updates.iter().map(|u| u.velocity.length()).collect();
        let acceleration_magnitudes: Vec<_> =
            updates.iter().map(|u| u.acceleration.length()).collect();

        self.extrema = self.extrema.merge(step_extrema);
        self.history.push(
            positions.clone(),
            velocity_magnitudes.clone(),
            acceleration_magnitudes.clone(),
        );
        self.step_count += 1;

        trace!(
            step = self.step_count,
            max_velocity = self.extrema.velocity.max,
            max_acceleration = self.extrema.acceleration.max,
            "step committed"
        );

        StepResult {
            step: self.step_count,
            positions,
            velocity_magnitudes,
            acceleration_magnitudes,
            step_extrema,
            extrema: self.extrema,
        }
    }

    /// Field value at a point in frame space.
    #[inline]
    pub fn sample_field(&self, point: Vector2D) -> f64 {
        field::sample(point, &self.particles, self.frame.origin())
    }

    /// Samples the field at every pixel of the frame.
    pub fn field(&mut self) -> Field {
        let field = self.method.field(&self.particles, self.frame);

        debug!(
            width = self.frame.width,
            height = self.frame.height,
            min = field.extrema().min,
            max = field.extrema().max,
            "field sampled"
        );

        field
    }

    /// Mass-weighted average position of the particles, in simulation space.
    #[inline]
    pub fn barycenter(&self) -> Option<Vector2D> {
        Particle::barycenter(&self.particles)
    }
}

impl<C> SimulationState<C> {
    /// The particles, in their fixed order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Size of the frame the simulation is rendered to.
    #[inline]
    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    /// Number of steps taken.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Logs of every step, initial state included.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Velocity and acceleration extrema of the whole run.
    #[inline]
    pub fn extrema(&self) -> StepExtrema {
        self.extrema
    }

    /// Options of the integrator.
    #[inline]
    pub fn config(&self) -> SimulationConfig {
        self.config
    }
}
