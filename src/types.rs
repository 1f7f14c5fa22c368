//! Core types shared by the animation engine and the renderer.

/// Direction of motion, for a single node's progress and for chain traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Progress grows from 0 toward 1; traversal walks toward higher indices.
    Forward,

    /// Progress shrinks from 1 toward 0; traversal walks toward lower indices.
    Backward,
}

impl Direction {
    /// Returns `1.0` for `Forward` and `-1.0` for `Backward`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Direction that moves away from a committed value: forward from 0, backward from 1.
    #[inline]
    pub(crate) fn away_from(committed: f32) -> Self {
        if committed < 0.5 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// How stroked line ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineCap {
    /// Flat end exactly at the endpoint.
    Butt,

    /// Rounded end extending half the line width past the endpoint.
    #[default]
    Round,

    /// Square end extending half the line width past the endpoint.
    Square,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No palette colors provided.
    EmptyPalette,

    /// Part count of zero.
    ZeroParts,

    /// Step is not finite, lies outside `(0, 1]`, or needs more than `u32::MAX` ticks.
    InvalidStep,

    /// Canvas size or a geometry divisor is not finite and positive.
    InvalidGeometry,

    /// Tick period of zero.
    ZeroTickPeriod,

    /// Palette capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyPalette => {
                write!(f, "palette must have at least one color")
            }
            ConfigError::ZeroParts => {
                write!(f, "part count must be at least one")
            }
            ConfigError::InvalidStep => {
                write!(f, "step must be a finite value in (0, 1] reachable in u32 ticks")
            }
            ConfigError::InvalidGeometry => {
                write!(f, "canvas size and geometry factors must be finite and positive")
            }
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
            ConfigError::CapacityExceeded => {
                write!(f, "palette capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
