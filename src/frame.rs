use serde::{Deserialize, Serialize};

use crate::vector::Vector2D;

/// Size of the rendered frame in pixels.
///
/// Simulation space is centered on the frame: the simulation origin lands on
/// [`FrameSize::origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Creates a frame size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Frame coordinates of the simulation origin, `(width / 2, height / 2)` rounded down.
    #[inline]
    pub fn origin(&self) -> Vector2D {
        Vector2D::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// Converts a point in simulation space to frame space.
    #[inline]
    pub fn to_frame(&self, point: Vector2D) -> Vector2D {
        point + self.origin()
    }

    /// Number of pixels in the frame.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
