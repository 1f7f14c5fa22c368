//! Tap-driven animator tying the chain, the renderer and the tick driver together.
//!
//! Provides [`FaceBoxAnimator`], which owns a drawing surface and runs the
//! face box chain from tap events and clock polls.

use crate::config::FaceBoxConfig;
use crate::controller::SquareFaceBox;
use crate::driver::{DriverState, TickDriver};
use crate::renderer::{DrawSurface, FaceBoxRenderer};
use crate::time::{TimeInstant, TimeSource};

/// Result of a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapOutcome {
    /// The active face box started a step and ticking began.
    Started,
    /// A step is already in progress; nothing changed.
    Ignored,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// The active face box settled on this tick and ticking stopped.
    pub settled: bool,
}

/// Timing information returned by [`FaceBoxAnimator::service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// A step is in progress. Service again after this delay.
    Delay(D),

    /// Nothing is animating. No servicing is needed until the next tap.
    Idle,
}

/// Runs the face box icon on a drawing surface.
///
/// A tap starts one step of the active face box and begins ticking. Each
/// tick advances the step and redraws. When the step settles, ticking stops,
/// the chain moves on and a final frame is drawn.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Drawing surface type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of face boxes
pub struct FaceBoxAnimator<'t, I: TimeInstant, S: DrawSurface, T: TimeSource<I>, const N: usize> {
    surface: S,
    time_source: &'t T,
    config: FaceBoxConfig<I::Duration, N>,
    controller: SquareFaceBox<N>,
    renderer: FaceBoxRenderer<N>,
    driver: TickDriver<I>,
}

impl<'t, I: TimeInstant, S: DrawSurface, T: TimeSource<I>, const N: usize>
    FaceBoxAnimator<'t, I, S, T, N>
{
    /// Creates an idle animator and draws the first frame.
    pub fn new(surface: S, time_source: &'t T, config: FaceBoxConfig<I::Duration, N>) -> Self {
        let mut animator = Self {
            surface,
            time_source,
            controller: SquareFaceBox::from_config(&config),
            renderer: FaceBoxRenderer::new(&config),
            driver: TickDriver::new(config.tick_period()),
            config,
        };
        animator.render();
        animator
    }

    /// Handles a tap.
    ///
    /// Starts a step on the active face box, starts the tick driver and
    /// redraws. Taps during a step are ignored.
    pub fn tap(&mut self) -> TapOutcome {
        if !self.controller.start_updating() {
            return TapOutcome::Ignored;
        }

        crate::trace!("tap accepted on face box {}", self.controller.active_index());
        self.driver.start(self.time_source.now());
        self.render();
        TapOutcome::Started
    }

    /// Runs one tick regardless of the clock.
    ///
    /// The chain is updated before the frame is drawn, so a frame never shows
    /// a half-updated state. Does nothing while the driver is idle.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.driver.is_running() {
            return TickOutcome { settled: false };
        }

        let settled = self.controller.update();
        if settled {
            self.driver.stop();
        }
        self.render();

        TickOutcome { settled }
    }

    /// Runs every tick that is due on the clock.
    ///
    /// Stops early when the step settles.
    ///
    /// # Returns
    /// - `ServiceTiming::Delay(duration)` - Step in progress, service again after this delay
    /// - `ServiceTiming::Idle` - Nothing is animating
    pub fn service(&mut self) -> ServiceTiming<I::Duration> {
        let now = self.time_source.now();

        for _ in 0..self.driver.due_ticks(now) {
            if self.tick().settled {
                break;
            }
        }

        match self.driver.time_until_next(now) {
            Some(delay) => ServiceTiming::Delay(delay),
            None => ServiceTiming::Idle,
        }
    }

    /// Redraws the whole canvas: background, then the active face box.
    pub fn render(&mut self) {
        self.renderer.clear(&mut self.surface);
        self.controller.render(&mut self.surface, &self.renderer);
    }

    /// Returns the face box chain.
    pub fn controller(&self) -> &SquareFaceBox<N> {
        &self.controller
    }

    /// Returns the tick driver state.
    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    /// Returns true if a step is being animated.
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FaceBoxConfig<I::Duration, N> {
        &self.config
    }

    /// Returns the drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the drawing surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the animator and returns the drawing surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
