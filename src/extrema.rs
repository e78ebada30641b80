use serde::{Deserialize, Serialize};

/// Running minimum and maximum of a scalar.
///
/// [`Extrema::EMPTY`] is the identity of [`Extrema::merge`], so partial
/// extrema computed by different workers can be combined in any grouping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    /// Smallest value seen so far.
    pub min: f64,
    /// Largest value seen so far.
    pub max: f64,
}

impl Default for Extrema {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extrema {
    /// Extrema that have not seen any value.
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Extrema that have seen exactly `value`.
    #[inline]
    pub const fn at(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Extrema of all the given values.
    #[inline]
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values.into_iter().fold(Self::EMPTY, Self::observe)
    }

    /// Returns whether no value was observed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Extends the extrema with a value.
    #[inline]
    pub fn observe(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Smallest extrema containing both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns whether `value` lies within the extrema.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Velocity and acceleration magnitude extrema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepExtrema {
    /// Extrema of velocity magnitudes.
    pub velocity: Extrema,
    /// Extrema of acceleration magnitudes.
    pub acceleration: Extrema,
}

impl StepExtrema {
    /// Extends both extrema with the magnitudes of one particle.
    #[inline]
    pub fn observe(self, velocity: f64, acceleration: f64) -> Self {
        Self {
            velocity: self.velocity.observe(velocity),
            acceleration: self.acceleration.observe(acceleration),
        }
    }

    /// Combines two partial results, component by component.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            velocity: self.velocity.merge(other.velocity),
            acceleration: self.acceleration.merge(other.acceleration),
        }
    }
}
