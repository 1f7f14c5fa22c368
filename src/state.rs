//! Per-node progress state.
//!
//! A state moves in discrete one-unit steps: from a committed 0 up to 1, or
//! from a committed 1 back down to 0. Each step is started explicitly and ends
//! with a single settle edge, after which the state is idle again.
//!
//! Ticks are counted as integers and progress is derived from the count, so a
//! step always takes exactly `ceil(1 / step)` ticks regardless of float
//! rounding.

use crate::types::{ConfigError, Direction};

/// A validated progress increment together with the tick count it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepSize {
    size: f32,
    ticks: u32,
}

impl StepSize {
    /// Validates a per-tick progress increment.
    ///
    /// # Errors
    /// * `InvalidStep` - `size` is not finite, outside `(0, 1]`, or so small
    ///   that one step needs more than `u32::MAX` ticks
    pub fn new(size: f32) -> Result<Self, ConfigError> {
        if !size.is_finite() || size <= 0.0 || size > 1.0 {
            return Err(ConfigError::InvalidStep);
        }

        let ticks = libm::ceilf(1.0 / size);
        if !ticks.is_finite() || ticks >= u32::MAX as f32 {
            return Err(ConfigError::InvalidStep);
        }

        Ok(Self {
            size,
            ticks: ticks as u32,
        })
    }

    /// Progress advanced per tick.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Ticks one step takes: `ceil(1 / size)`.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Progress, direction and last committed value of one animated node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    progress: f32,
    direction: Option<Direction>,
    committed: f32,
    elapsed_ticks: u32,
    step: StepSize,
}

impl AnimationState {
    /// Creates an idle state at progress 0, advancing by `step` per tick once started.
    pub fn new(step: StepSize) -> Self {
        Self {
            progress: 0.0,
            direction: None,
            committed: 0.0,
            elapsed_ticks: 0,
            step,
        }
    }

    /// Advances progress by one tick.
    ///
    /// Returns `true` exactly once per step, on the tick where progress has
    /// moved a full unit away from the committed value. Progress is snapped to
    /// the target and committed, and the state becomes idle. Idle states are
    /// left untouched and return `false`.
    pub fn update(&mut self) -> bool {
        let Some(direction) = self.direction else {
            return false;
        };

        self.elapsed_ticks += 1;

        if self.elapsed_ticks >= self.step.ticks() {
            self.progress = self.committed + direction.sign();
            self.direction = None;
            self.committed = self.progress;
            self.elapsed_ticks = 0;
            return true;
        }

        let travelled = self.elapsed_ticks as f32 * self.step.size();
        self.progress = self.committed + direction.sign() * travelled;
        false
    }

    /// Starts a step away from the committed value.
    ///
    /// Returns `false` without changing anything if a step is already in progress.
    pub fn start_updating(&mut self) -> bool {
        if self.direction.is_some() {
            return false;
        }

        self.direction = Some(Direction::away_from(self.committed));
        self.elapsed_ticks = 0;
        true
    }

    /// Current progress.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current direction, `None` while idle.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Last settled progress value.
    pub fn committed(&self) -> f32 {
        self.committed
    }

    /// Progress advanced per tick.
    pub fn step(&self) -> f32 {
        self.step.size()
    }

    /// Ticks taken by the step in progress so far.
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Returns true if no step is in progress.
    pub fn is_idle(&self) -> bool {
        self.direction.is_none()
    }
}
