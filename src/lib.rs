//! # Gravfield
//!
//! Gravfield simulates point masses attracting each other in two dimensions and derives
//! the numbers needed to visualize them: per-step positions, velocity and acceleration
//! magnitudes with their run-wide extrema, and the force-magnitude field over every pixel
//! of a frame.
//!
//! ## Goals
//!
//! The simulation uses a fixed step and exact pairwise summation with a gravitational
//! constant of 1. Each step evaluates every force against the positions of the previous
//! step and commits the new positions at once. Drawing is left to the caller through the
//! [`Canvas`](render::Canvas) trait.
//!
//! The force computations can run on multiple threads thanks to [rayon](https://github.com/rayon-rs/rayon).
//! Enable the "parallel" feature to access the available compute methods.
//!
//! # Using Gravfield
//!
//! ## Setting up the simulation
//!
//! ```
//! # use gravfield::prelude::*;
//! let particles = vec![
//!     Particle::new(0, 10.0, 2.0, Vector2D::new(-5.0, 0.0), Vector2D::ZERO),
//!     Particle::new(1, 10.0, 2.0, Vector2D::new(5.0, 0.0), Vector2D::ZERO),
//! ];
//!
//! let mut simulation = SimulationState::new(particles, FrameSize::new(200, 200));
//! ```
//!
//! ## Stepping and coloring
//!
//! ```
//! # use gravfield::prelude::*;
//! # let particles = vec![
//! #     Particle::new(0, 10.0, 2.0, Vector2D::new(-5.0, 0.0), Vector2D::ZERO),
//! #     Particle::new(1, 10.0, 2.0, Vector2D::new(5.0, 0.0), Vector2D::ZERO),
//! # ];
//! # let mut simulation = SimulationState::new(particles, FrameSize::new(200, 200));
//! let gradient = Gradient::new(Color::new(0, 0, 255), Color::new(255, 0, 0));
//!
//! for _ in 0..10 {
//!     let result = simulation.advance();
//!     let velocity = result.extrema.velocity;
//!
//!     for speed in result.velocity_magnitudes {
//!         let t = normalize_or(speed, velocity.min, velocity.max, 0.0);
//!         let _color = gradient.at(t);
//!     }
//! }
//! ```
//!
//! ## Sampling the force field
//!
//! ```
//! # use gravfield::prelude::*;
//! # let particles = vec![Particle::new(0, 10.0, 2.0, Vector2D::ZERO, Vector2D::ZERO)];
//! # let mut simulation = SimulationState::new(particles, FrameSize::new(32, 32));
//! let field = simulation.field();
//! let heat = field.normalized(0.2);
//!
//! assert_eq!(heat.len(), 32 * 32);
//! ```

#![warn(missing_docs)]

/// Pixel colors and the scalar-to-color mapping.
pub mod color;

/// Trait for advancing particles and types implementing it for the user to choose from.
pub mod compute_method;

/// Plain configuration structs.
pub mod config;

/// Tagged result of a single pairwise evaluation.
pub mod contribution;

/// Error conditions of the vector and color math.
pub mod error;

/// Running minimum and maximum accumulators.
pub mod extrema;

/// Force field sampling.
pub mod field;

/// Frame geometry.
pub mod frame;

/// Per-step logs.
pub mod history;

/// Bodies of the simulation.
pub mod particle;

/// Composition of frames and heatmaps onto a caller-provided canvas.
pub mod render;

/// Simulation state and stepping.
pub mod simulation;

/// Vector type and the stretch operation.
pub mod vector;

pub use error::Error;

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::color::{gamma, lerp_color, normalize, normalize_or, Color, Gradient};
    pub use crate::compute_method::*;
    pub use crate::config::{Coloring, DrawingConfig, RenderOptions, SimulationConfig};
    pub use crate::contribution::Contribution;
    pub use crate::error::Error;
    pub use crate::extrema::{Extrema, StepExtrema};
    pub use crate::field::{self, Field};
    pub use crate::frame::FrameSize;
    pub use crate::particle::Particle;
    pub use crate::render::{draw_frame, draw_heatmap, Canvas};
    pub use crate::simulation::{SimulationState, StepResult};
    pub use crate::vector::{Stretch, Vector2D};
}
