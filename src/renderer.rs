//! Face box drawing and the [`DrawSurface`] trait for canvas abstraction.
//!
//! Provides [`FaceBoxRenderer`], which turns a progress value into primitive
//! draw calls. The renderer holds geometry and colors only; it keeps no
//! animation state.

use crate::config::FaceBoxConfig;
use crate::progress::{clamped_linear, divide_scale, ease};
use crate::time::TimeDuration;
use crate::types::LineCap;
use heapless::Vec;
use palette::Srgb;

/// Number of animated sub-parts of one face box: square slide, eye-line,
/// eye radius and eye spread.
pub const ANIMATED_PARTS: usize = 4;

/// Stroke style passed with every stroked primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Srgb,

    /// Line width in surface units.
    pub width: f32,

    /// Line end style.
    pub cap: LineCap,
}

impl Stroke {
    /// Creates a new stroke style.
    #[inline]
    pub fn new(color: Srgb, width: f32, cap: LineCap) -> Self {
        Self { color, width, cap }
    }
}

/// Trait for abstracting a 2D drawing surface.
///
/// Implement this for your canvas (framebuffer, display driver, vector
/// recorder, etc.) to let the renderer draw on it. Style is always passed
/// with the call; the renderer never reads style back off the surface.
/// Drawing cannot fail; handle backend errors internally.
pub trait DrawSurface {
    /// Pushes the current translation so a later [`restore`](Self::restore) can pop it.
    fn save(&mut self);

    /// Pops the translation pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Translates the origin of subsequent draw calls.
    fn translate(&mut self, x: f32, y: f32);

    /// Strokes a straight line.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: &Stroke);

    /// Fills a circle.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Srgb);

    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: &Stroke);

    /// Fills a rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Srgb);
}

/// Draws square face boxes for a given palette and canvas size.
///
/// # Type Parameters
/// * `N` - Maximum number of palette colors
#[derive(Debug, Clone)]
pub struct FaceBoxRenderer<const N: usize> {
    palette: Vec<Srgb, N>,
    background: Srgb,
    width: f32,
    height: f32,
    parts: u32,
    normalized: bool,
    eyes_as_cutouts: bool,
    stroke_factor: f32,
    size_factor: f32,
    eye_factor: f32,
}

impl<const N: usize> FaceBoxRenderer<N> {
    /// Creates a renderer from a validated configuration.
    pub fn new<D: TimeDuration>(config: &FaceBoxConfig<D, N>) -> Self {
        let (width, height) = config.canvas();
        Self {
            palette: config.palette().clone(),
            background: config.background(),
            width,
            height,
            parts: config.parts(),
            normalized: config.normalized(),
            eyes_as_cutouts: config.eyes_as_cutouts(),
            stroke_factor: config.stroke_factor(),
            size_factor: config.size_factor(),
            eye_factor: config.eye_factor(),
        }
    }

    /// Paints the whole canvas with the background color.
    pub fn clear<S: DrawSurface>(&self, surface: &mut S) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, self.background);
    }

    /// Draws the face box for palette entry `color_index` at progress `scale`.
    ///
    /// The eased progress is split into four sub-fractions: `f0` slides the
    /// square up from below the canvas, `f1` reveals the eye-line, `f2` grows
    /// the eyes and `f3` spreads them apart. Every `save` issued here is
    /// restored before returning.
    ///
    /// `color_index` must be within the palette. Debug builds panic on an
    /// out-of-range index; release builds fall back to the last color.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, color_index: usize, scale: f32) {
        debug_assert!(
            color_index < self.palette.len(),
            "color index out of palette bounds"
        );
        let color = self
            .palette
            .get(color_index)
            .or_else(|| self.palette.last())
            .copied()
            .unwrap_or(self.background);

        let [f0, f1, f2, f3] = self.fractions(scale);

        let min_side = self.width.min(self.height);
        let size = min_side / self.size_factor;
        let eye_radius = min_side / self.eye_factor;
        let stroke = Stroke::new(color, min_side / self.stroke_factor, LineCap::Round);
        let eye_color = if self.eyes_as_cutouts {
            self.background
        } else {
            color
        };
        let eye_y = -size / 6.0;

        surface.save();
        surface.translate(
            self.width / 2.0,
            self.height / 2.0 + (self.height / 2.0 + size) * (1.0 - f0),
        );
        surface.stroke_rect(-size / 2.0, -size / 2.0, size, size, &stroke);
        surface.draw_line(
            -size / 2.0,
            eye_y,
            -size / 2.0 + size * f1,
            eye_y,
            &stroke,
        );
        for side in [-1.0, 1.0] {
            surface.fill_circle(side * (size / 4.0) * f3, eye_y, eye_radius * f2, eye_color);
        }
        surface.restore();
    }

    /// Returns the four sub-fractions for progress `scale`.
    pub fn fractions(&self, scale: f32) -> [f32; ANIMATED_PARTS] {
        let eased = ease(scale);
        core::array::from_fn(|k| {
            if self.normalized {
                divide_scale(eased, k as u32, self.parts)
            } else {
                clamped_linear(eased, k as u32, self.parts)
            }
        })
    }

    /// Number of palette colors.
    pub fn color_count(&self) -> usize {
        self.palette.len()
    }

    /// Canvas size as `(width, height)`.
    pub fn canvas(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
