use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An RGB color with integer channels.
///
/// Channels are not clamped: interpolating outside of `[0, 1]` produces out-of-gamut
/// values, which are only saturated by [`Color::to_rgb8`] when handed to a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Color {
    /// Red channel.
    pub r: i32,
    /// Green channel.
    pub g: i32,
    /// Blue channel.
    pub b: i32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Channels saturated to the `0..=255` range.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| c.clamp(0, 255) as u8)
    }

    /// Applies `f` to every channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[i32; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [i32; 3] {
    #[inline]
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// Linearly maps `value` from `[min, max]` to `[0, 1]`.
///
/// Fails with [`Error::DegenerateRange`] when `min == max`.
///
/// ```
/// # use gravfield::color::normalize;
/// assert_eq!(normalize(15.0, 10.0, 20.0), Ok(0.5));
/// assert!(normalize(1.0, 2.0, 2.0).is_err());
/// ```
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64, Error> {
    let span = max - min;

    if span == 0.0 {
        return Err(Error::DegenerateRange { min, max });
    }

    Ok((value - min) / span)
}

/// Same as [`normalize`], returning `fallback` for a degenerate range.
#[inline]
pub fn normalize_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    normalize(value, min, max).unwrap_or(fallback)
}

/// Power correction `t^exponent`, used to compress the heatmap range.
#[inline]
pub fn gamma(t: f64, exponent: f64) -> f64 {
    t.powf(exponent)
}

/// Interpolates every channel from `c1` (at `t = 0`) to `c2` (at `t = 1`), truncating toward zero.
#[inline]
pub fn lerp_color(c1: Color, c2: Color, t: f64) -> Color {
    let lerp = |a: i32, b: i32| (a as f64 + t * (b - a) as f64) as i32;

    Color::new(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b))
}

/// Two-color linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    /// Color at `t = 0`.
    pub start: Color,
    /// Color at `t = 1`.
    pub end: Color,
}

impl Gradient {
    /// Creates a gradient between two colors.
    #[inline]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color at `t` along the gradient.
    #[inline]
    pub fn at(&self, t: f64) -> Color {
        lerp_color(self.start, self.end, t)
    }
}
