//! Icon configuration with validated construction.

use crate::colors::{BACKGROUND, DEFAULT_PALETTE};
use crate::state::StepSize;
use crate::time::TimeDuration;
use crate::types::ConfigError;
use heapless::Vec;
use palette::Srgb;

/// Default tick period in milliseconds.
pub const DEFAULT_TICK_MILLIS: u64 = 20;

/// Ticks one sub-fraction window takes when no step is set.
///
/// The default step is `1 / (DEFAULT_TICKS_PER_PART * parts)`, i.e. `0.02 / parts`.
pub const DEFAULT_TICKS_PER_PART: f32 = 50.0;

/// Default canvas width and height.
pub const DEFAULT_CANVAS: (f32, f32) = (400.0, 400.0);

/// Divisor of the smaller canvas side giving the line width.
pub const DEFAULT_STROKE_FACTOR: f32 = 90.0;

/// Divisor of the smaller canvas side giving the square size.
pub const DEFAULT_SIZE_FACTOR: f32 = 6.9;

/// Divisor of the smaller canvas side giving the full eye radius.
pub const DEFAULT_EYE_FACTOR: f32 = 15.9;

/// Everything the controller, renderer and tick driver need to know.
///
/// Built with [`FaceBoxConfig::builder`] or one of the presets. The palette
/// length fixes the number of face boxes in the chain.
///
/// # Type Parameters
/// * `D` - The duration type used for the tick period
/// * `N` - Maximum number of palette colors
#[derive(Debug, Clone)]
pub struct FaceBoxConfig<D: TimeDuration, const N: usize> {
    palette: Vec<Srgb, N>,
    background: Srgb,
    parts: u32,
    step: StepSize,
    tick_period: D,
    canvas: (f32, f32),
    stroke_factor: f32,
    size_factor: f32,
    eye_factor: f32,
    normalized: bool,
    eyes_as_cutouts: bool,
}

impl<D: TimeDuration, const N: usize> FaceBoxConfig<D, N> {
    /// Creates a new empty configuration builder.
    pub fn builder() -> ConfigBuilder<D, N> {
        ConfigBuilder::new()
    }

    /// Four-part variant: raw sub-fraction windows and eyes in the palette color.
    pub fn four_part() -> ConfigBuilder<D, N> {
        ConfigBuilder::new()
            .palette(&DEFAULT_PALETTE)
            .parts(4)
            .normalized(false)
            .eyes_as_cutouts(false)
    }

    /// Five-part variant: normalized sub-fraction windows and eyes cut out in the background color.
    pub fn five_part() -> ConfigBuilder<D, N> {
        ConfigBuilder::new()
            .palette(&DEFAULT_PALETTE)
            .parts(5)
            .normalized(true)
            .eyes_as_cutouts(true)
    }

    /// Palette colors in chain order.
    pub fn palette(&self) -> &Vec<Srgb, N> {
        &self.palette
    }

    /// Background color.
    pub fn background(&self) -> Srgb {
        self.background
    }

    /// Number of sub-fraction windows progress is split into.
    pub fn parts(&self) -> u32 {
        self.parts
    }

    /// Progress advanced per tick.
    pub fn step(&self) -> f32 {
        self.step.size()
    }

    /// Validated step with its tick count.
    pub fn step_size(&self) -> StepSize {
        self.step
    }

    /// Time between ticks while animating.
    pub fn tick_period(&self) -> D {
        self.tick_period
    }

    /// Canvas size as `(width, height)`.
    pub fn canvas(&self) -> (f32, f32) {
        self.canvas
    }

    /// Line width divisor.
    pub fn stroke_factor(&self) -> f32 {
        self.stroke_factor
    }

    /// Square size divisor.
    pub fn size_factor(&self) -> f32 {
        self.size_factor
    }

    /// Eye radius divisor.
    pub fn eye_factor(&self) -> f32 {
        self.eye_factor
    }

    /// Returns true if sub-fractions are scaled to `[0, 1]`.
    pub fn normalized(&self) -> bool {
        self.normalized
    }

    /// Returns true if eyes are filled with the background color.
    pub fn eyes_as_cutouts(&self) -> bool {
        self.eyes_as_cutouts
    }

    /// Number of ticks one step takes: `ceil(1 / step)`.
    pub fn ticks_per_step(&self) -> u32 {
        self.step.ticks()
    }
}

/// Builder for validated [`FaceBoxConfig`] values.
#[derive(Debug)]
pub struct ConfigBuilder<D: TimeDuration, const N: usize> {
    palette: Vec<Srgb, N>,
    overflowed: bool,
    background: Srgb,
    parts: u32,
    step: Option<f32>,
    tick_period: D,
    canvas: (f32, f32),
    stroke_factor: f32,
    size_factor: f32,
    eye_factor: f32,
    normalized: bool,
    eyes_as_cutouts: bool,
}

impl<D: TimeDuration, const N: usize> ConfigBuilder<D, N> {
    /// Creates a builder with an empty palette and the stock constants.
    pub fn new() -> Self {
        Self {
            palette: Vec::new(),
            overflowed: false,
            background: BACKGROUND,
            parts: 4,
            step: None,
            tick_period: D::from_millis(DEFAULT_TICK_MILLIS),
            canvas: DEFAULT_CANVAS,
            stroke_factor: DEFAULT_STROKE_FACTOR,
            size_factor: DEFAULT_SIZE_FACTOR,
            eye_factor: DEFAULT_EYE_FACTOR,
            normalized: false,
            eyes_as_cutouts: false,
        }
    }

    /// Appends one palette color.
    ///
    /// Colors beyond capacity `N` make [`build`](Self::build) fail with
    /// `CapacityExceeded`.
    pub fn color(mut self, color: Srgb) -> Self {
        if self.palette.push(color).is_err() {
            self.overflowed = true;
        }
        self
    }

    /// Replaces the palette.
    pub fn palette(mut self, colors: &[Srgb]) -> Self {
        self.palette.clear();
        self.overflowed = false;
        for &color in colors {
            self = self.color(color);
        }
        self
    }

    /// Sets the background color.
    pub fn background(mut self, color: Srgb) -> Self {
        self.background = color;
        self
    }

    /// Sets the sub-fraction part count.
    ///
    /// Unless [`step`](Self::step) is set, the step becomes `1 / (50 * parts)`.
    pub fn parts(mut self, parts: u32) -> Self {
        self.parts = parts;
        self
    }

    /// Sets the progress advanced per tick.
    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    /// Sets the time between ticks.
    pub fn tick_period(mut self, period: D) -> Self {
        self.tick_period = period;
        self
    }

    /// Sets the canvas size.
    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas = (width, height);
        self
    }

    /// Sets the line width divisor.
    pub fn stroke_factor(mut self, factor: f32) -> Self {
        self.stroke_factor = factor;
        self
    }

    /// Sets the square size divisor.
    pub fn size_factor(mut self, factor: f32) -> Self {
        self.size_factor = factor;
        self
    }

    /// Sets the eye radius divisor.
    pub fn eye_factor(mut self, factor: f32) -> Self {
        self.eye_factor = factor;
        self
    }

    /// Scales sub-fractions to `[0, 1]` instead of `[0, 1/parts]`.
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Fills eyes with the background color instead of the palette color.
    pub fn eyes_as_cutouts(mut self, cutouts: bool) -> Self {
        self.eyes_as_cutouts = cutouts;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` colors were added
    /// * `EmptyPalette` - No colors were added
    /// * `ZeroParts` - Part count is zero
    /// * `InvalidStep` - Step is not finite, outside `(0, 1]`, or needs more
    ///   than `u32::MAX` ticks
    /// * `ZeroTickPeriod` - Tick period is zero
    /// * `InvalidGeometry` - Canvas size or a divisor is not finite and positive
    pub fn build(self) -> Result<FaceBoxConfig<D, N>, ConfigError> {
        if self.overflowed {
            return Err(ConfigError::CapacityExceeded);
        }

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        if self.parts == 0 {
            return Err(ConfigError::ZeroParts);
        }

        let step = StepSize::new(
            self.step
                .unwrap_or(1.0 / (DEFAULT_TICKS_PER_PART * self.parts as f32)),
        )?;

        if self.tick_period.as_millis() == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let (width, height) = self.canvas;
        let geometry = [
            width,
            height,
            self.stroke_factor,
            self.size_factor,
            self.eye_factor,
        ];
        if geometry.iter().any(|&value| !value.is_finite() || value <= 0.0) {
            return Err(ConfigError::InvalidGeometry);
        }

        Ok(FaceBoxConfig {
            palette: self.palette,
            background: self.background,
            parts: self.parts,
            step,
            tick_period: self.tick_period,
            canvas: self.canvas,
            stroke_factor: self.stroke_factor,
            size_factor: self.size_factor,
            eye_factor: self.eye_factor,
            normalized: self.normalized,
            eyes_as_cutouts: self.eyes_as_cutouts,
        })
    }
}

impl<D: TimeDuration, const N: usize> Default for ConfigBuilder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}
