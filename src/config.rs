//! Parameters handed to the simulation and to the renderer.
//!
//! Every struct derives [`serde::Deserialize`] so callers can load them from the format
//! of their choice, e.g. a YAML drawing section:
//!
//! ```yaml
//! background_color: [0, 0, 0]
//! particle_color: [255, 255, 255]
//! trails_fade: 0.99
//! heatmap_gradient:
//!   start: [0, 0, 64]
//!   end: [255, 64, 0]
//! ```
//!
//! Missing fields take their [`Default`] value. Nothing in this crate reads a file.

use serde::{Deserialize, Serialize};

use crate::{
    color::{Color, Gradient},
    compute_method::AccelerationMode,
};

/// Colors and scales used to draw frames and heatmaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Color the frame is cleared with.
    pub background_color: Color,
    /// Particle color when coloring is [`Coloring::Fixed`].
    pub particle_color: Color,
    /// Color of the id drawn on each particle.
    pub particle_label_color: Color,
    /// Color of the newest trail segments.
    pub trail_color: Color,
    /// Factor applied to the trail color per step of age.
    pub trails_fade: f64,
    /// Gradient from the slowest to the fastest particle of the run.
    pub velocity_gradient: Gradient,
    /// Gradient from the least to the most accelerated particle of the run.
    pub acceleration_gradient: Gradient,
    /// Gradient from the weakest to the strongest field value of a heatmap.
    pub heatmap_gradient: Gradient,
    /// Exponent applied to normalized heatmap values.
    pub heatmap_gamma: f64,
    /// Color of velocity vectors.
    pub velocity_vectors_color: Color,
    /// Length of a drawn velocity vector per unit of speed.
    pub vel_vect_multiplier: f64,
    /// Color of the barycenter marker.
    pub barycenter_color: Color,
    /// Radius of the barycenter marker.
    pub barycenter_radius: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            background_color: Color::BLACK,
            particle_color: Color::WHITE,
            particle_label_color: Color::new(255, 0, 0),
            trail_color: Color::new(128, 128, 128),
            trails_fade: 0.99,
            velocity_gradient: Gradient::new(Color::new(0, 0, 255), Color::new(255, 0, 0)),
            acceleration_gradient: Gradient::new(Color::new(0, 255, 0), Color::new(255, 0, 255)),
            heatmap_gradient: Gradient::new(Color::BLACK, Color::new(255, 160, 0)),
            heatmap_gamma: 0.2,
            velocity_vectors_color: Color::new(0, 255, 0),
            vel_vect_multiplier: 10.0,
            barycenter_color: Color::new(255, 255, 0),
            barycenter_radius: 5.0,
        }
    }
}

/// How particles are colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coloring {
    /// Every particle uses [`DrawingConfig::particle_color`].
    #[default]
    Fixed,
    /// Colored along [`DrawingConfig::velocity_gradient`] by velocity magnitude.
    Velocity,
    /// Colored along [`DrawingConfig::acceleration_gradient`] by acceleration magnitude.
    Acceleration,
}

/// What to draw on a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw each particle's velocity as a line.
    pub draw_velocity_vectors: bool,
    /// Draw the barycenter of the particles.
    pub draw_barycenter: bool,
    /// Draw the path of each particle since the first step.
    pub draw_trails: bool,
    /// Particle coloring.
    pub coloring: Coloring,
}

/// Options of the integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// What each particle's acceleration holds after a step.
    pub acceleration_mode: AccelerationMode,
}
