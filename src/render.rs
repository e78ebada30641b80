use tracing::trace;

use crate::{
    color::{normalize_or, Color},
    compute_method::ComputeMethod,
    config::{Coloring, DrawingConfig, RenderOptions},
    extrema::{Extrema, StepExtrema},
    field::Field,
    particle::Particle,
    simulation::SimulationState,
    vector::Vector2D,
};

/// A drawing surface in frame coordinates.
///
/// Implemented by the caller on top of whatever image or window library it uses.
pub trait Canvas {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Draws a line segment.
    fn line(&mut self, from: Vector2D, to: Vector2D, color: Color);

    /// Draws a filled circle.
    fn ellipse(&mut self, center: Vector2D, radius: f64, color: Color);

    /// Draws a text label anchored at `at`.
    fn text(&mut self, at: Vector2D, text: &str, color: Color);

    /// Writes a single pixel.
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Color of a trail segment that is `age` steps old.
///
/// Channels fade geometrically and are capped at 255.
#[inline]
pub fn trail_color(color: Color, fade: f64, age: usize) -> Color {
    let factor = fade.powi(age as i32);

    color.map(|c| ((c as f64 * factor) as i32).min(255))
}

/// Render color of a particle for the chosen [`Coloring`].
///
/// Dependent colorings normalize against the run-wide `extrema`; a degenerate range maps to
/// the start of the gradient.
pub fn particle_color(
    particle: &Particle,
    coloring: Coloring,
    extrema: StepExtrema,
    config: &DrawingConfig,
) -> Color {
    let along = |value: f64, Extrema { min, max }: Extrema| normalize_or(value, min, max, 0.0);

    match coloring {
        Coloring::Fixed => config.particle_color,
        Coloring::Velocity => config
            .velocity_gradient
            .at(along(particle.velocity.length(), extrema.velocity)),
        Coloring::Acceleration => config
            .acceleration_gradient
            .at(along(particle.acceleration.length(), extrema.acceleration)),
    }
}

/// Draws the current state of a simulation.
///
/// The canvas is cleared, then trails, particles with their labels and velocity vectors,
/// and the barycenter are drawn depending on `options`.
pub fn draw_frame<C, K>(
    simulation: &SimulationState<C>,
    options: &RenderOptions,
    config: &DrawingConfig,
    canvas: &mut K,
) where
    C: ComputeMethod,
    K: Canvas + ?Sized,
{
    let frame = simulation.frame();

    canvas.clear(config.background_color);

    if options.draw_trails {
        let rows = simulation.history().len();

        for (row, _, from, to) in simulation.history().segments() {
            let color = trail_color(config.trail_color, config.trails_fade, rows - row);
            canvas.line(frame.to_frame(to), frame.to_frame(from), color);
        }
    }

    for particle in simulation.particles() {
        let color = particle_color(particle, options.coloring, simulation.extrema(), config);
        let position = frame.to_frame(particle.position);

        canvas.ellipse(position, particle.radius, color);
        canvas.text(position, &particle.id.to_string(), config.particle_label_color);

        if options.draw_velocity_vectors {
            let tip = position + particle.velocity * config.vel_vect_multiplier;
            canvas.line(position, tip, config.velocity_vectors_color);
        }
    }

    if options.draw_barycenter {
        if let Some(barycenter) = simulation.barycenter() {
            canvas.ellipse(
                frame.to_frame(barycenter),
                config.barycenter_radius,
                config.barycenter_color,
            );
        }
    }

    trace!(step = simulation.step_count(), "frame drawn");
}

/// Paints every pixel of `field` along the heatmap gradient.
///
/// Values are normalized against the field's own extrema and compressed with
/// [`DrawingConfig::heatmap_gamma`]; a uniform field is painted with the gradient start.
pub fn draw_heatmap<K>(field: &Field, config: &DrawingConfig, canvas: &mut K)
where
    K: Canvas + ?Sized,
{
    let normalized = field.normalized(config.heatmap_gamma);

    for ((x, y, _), t) in field.pixels().zip(normalized) {
        canvas.put_pixel(x, y, config.heatmap_gradient.at(t));
    }

    trace!(
        width = field.frame().width,
        height = field.frame().height,
        "heatmap drawn"
    );
}
