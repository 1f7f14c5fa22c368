#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SquareFaceBox`**: The chain of face boxes, its active node and traversal direction
//! - **`SequenceNode`**: One face box in the chain, linked to its neighbors by index
//! - **`AnimationState`**: A node's progress, moving one discrete unit per step
//! - **`TickDriver`**: Idle/running tick schedule pumped by the caller
//! - **`FaceBoxAnimator`**: Ties chain, renderer and driver to taps and a clock
//! - **`FaceBoxRenderer`**: Turns a progress value into primitive draw calls
//! - **`DrawSurface`**: Trait to implement for your canvas
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`FaceBoxConfig`**: Palette, part count, step, tick period and geometry factors
//!
//! Colors are `Srgb<f32>` (0.0-1.0 range). When implementing `DrawSurface` for
//! your canvas, convert these values to your device's native format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        defmt::debug!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;

pub mod animator;
pub mod colors;
pub mod config;
pub mod controller;
pub mod driver;
pub mod node;
pub mod progress;
pub mod renderer;
pub mod state;
pub mod time;
pub mod types;

pub use animator::{FaceBoxAnimator, ServiceTiming, TapOutcome, TickOutcome};
pub use colors::{BACKGROUND, DEFAULT_PALETTE};
pub use config::{ConfigBuilder, FaceBoxConfig};
pub use controller::SquareFaceBox;
pub use driver::{DriverState, TickDriver};
pub use node::SequenceNode;
pub use progress::{clamped_linear, divide_scale, ease};
pub use renderer::{DrawSurface, FaceBoxRenderer, Stroke};
pub use state::{AnimationState, StepSize};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ConfigError, Direction, LineCap};

/// Face box chain sized for the default five-color palette.
pub type SquareFaceBox5 = SquareFaceBox<5>;
