use crate::{
    color::{gamma, normalize_or},
    contribution::Contribution,
    extrema::Extrema,
    frame::FrameSize,
    particle::Particle,
    vector::Vector2D,
};

/// Magnitude of the summed pull of every particle at `point`.
///
/// `point` is in frame space and particles are mapped into it with `origin`.
/// Each particle pulls with `mass / max(distance, radius)²`, so the value stays
/// finite inside bodies. Particles located exactly at `point` are skipped.
///
/// ```
/// # use gravfield::prelude::*;
/// let body = Particle::new(0, 4.0, 1.0, Vector2D::ZERO, Vector2D::ZERO);
///
/// assert_eq!(field::sample(Vector2D::new(2.0, 0.0), &[body], Vector2D::ZERO), 1.0);
/// ```
pub fn sample(point: Vector2D, particles: &[Particle], origin: Vector2D) -> f64 {
    particles
        .iter()
        .filter_map(|body| Contribution::field(point, origin, body).acceleration())
        .fold(Vector2D::ZERO, |sum, acceleration| sum + acceleration)
        .length()
}

/// Force magnitudes sampled at every pixel of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    frame: FrameSize,
    values: Vec<f64>,
    extrema: Extrema,
}

impl Field {
    pub(crate) fn new(frame: FrameSize, values: Vec<f64>, extrema: Extrema) -> Self {
        debug_assert_eq!(values.len(), frame.pixel_count());

        Self {
            frame,
            values,
            extrema,
        }
    }

    /// Samples every pixel of `frame` sequentially.
    pub fn build(particles: &[Particle], frame: FrameSize) -> Self {
        let origin = frame.origin();

        let values: Vec<f64> = (0..frame.height)
            .flat_map(|y| (0..frame.width).map(move |x| (x, y)))
            .map(|(x, y)| sample(Vector2D::new(x as f64, y as f64), particles, origin))
            .collect();

        let extrema = Extrema::of(values.iter().copied());

        Self::new(frame, values, extrema)
    }

    /// Size of the sampled frame.
    #[inline]
    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    /// Sampled values, row by row.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest sampled values.
    #[inline]
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    /// Value sampled at pixel `(x, y)`, if inside the frame.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.frame.width || y >= self.frame.height {
            return None;
        }

        self.values
            .get(y as usize * self.frame.width as usize + x as usize)
            .copied()
    }

    /// Iterates over `(x, y, value)` for every pixel.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        let width = self.frame.width;

        (0..self.frame.height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .zip(&self.values)
            .map(|((x, y), &value)| (x, y, value))
    }

    /// Every value mapped to `[0, 1]` against the field's extrema, then raised to `exponent`.
    ///
    /// A uniform field maps to 0 everywhere.
    pub fn normalized(&self, exponent: f64) -> Vec<f64> {
        let Extrema { min, max } = self.extrema;

        self.values
            .iter()
            .map(|&value| gamma(normalize_or(value, min, max, 0.0), exponent))
            .collect()
    }
}
