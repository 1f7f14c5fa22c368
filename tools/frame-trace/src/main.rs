//! Frame trace for square-face-box
//!
//! Taps the icon a few times, pumps it with a simulated 20ms clock and prints
//! the draw calls of every tenth frame, so geometry changes can be checked
//! without a display.
//!
//! Usage:
//!   cd tools/frame-trace
//!   cargo run --release -- [four|five] [taps]

use palette::Srgb;
use square_face_box::{
    DrawSurface, FaceBoxAnimator, FaceBoxConfig, ServiceTiming, Stroke, TimeDuration,
    TimeInstant, TimeSource,
};
use std::cell::Cell;
use std::env;
use std::process::ExitCode;

const FRAME_MILLIS: u64 = 20;
const TRACE_EVERY: u64 = 10;

// ============================================================================
// Simulated Clock
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Millis(u64);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        Millis(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        Millis(self.0.saturating_sub(other.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Instant(u64);

impl TimeInstant for Instant {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Millis(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(Instant)
    }
}

struct SimulatedClock {
    now: Cell<Instant>,
}

impl SimulatedClock {
    fn advance(&self, millis: u64) {
        let now = self.now.get();
        self.now.set(Instant(now.0 + millis));
    }
}

impl TimeSource<Instant> for SimulatedClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// ============================================================================
// Printing Surface
// ============================================================================

#[derive(Default)]
struct PrintSurface {
    frame: u64,
    enabled: bool,
}

impl PrintSurface {
    fn emit(&self, line: String) {
        if self.enabled {
            println!("  {line}");
        }
    }
}

fn hex(color: Srgb) -> String {
    let color: Srgb<u8> = color.into_format();
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

impl DrawSurface for PrintSurface {
    fn save(&mut self) {
        self.emit("save".to_string());
    }

    fn restore(&mut self) {
        self.emit("restore".to_string());
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.emit(format!("translate {x:.1} {y:.1}"));
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: &Stroke) {
        self.emit(format!(
            "line ({x0:.1}, {y0:.1}) -> ({x1:.1}, {y1:.1}) {} w={:.2}",
            hex(stroke.color),
            stroke.width
        ));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Srgb) {
        self.emit(format!("circle ({cx:.1}, {cy:.1}) r={radius:.2} {}", hex(color)));
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: &Stroke) {
        self.emit(format!(
            "outline ({x:.1}, {y:.1}) {width:.1}x{height:.1} {}",
            hex(stroke.color)
        ));
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, color: Srgb) {
        self.frame += 1;
        self.enabled = self.frame % TRACE_EVERY == 1;
        if self.enabled {
            println!("frame {} background {}", self.frame, hex(color));
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let variant = args.next().unwrap_or_else(|| "four".to_string());
    let taps: u32 = match args.next().map(|taps| taps.parse()) {
        None => 2,
        Some(Ok(taps)) => taps,
        Some(Err(err)) => {
            eprintln!("invalid tap count: {err}");
            return ExitCode::FAILURE;
        }
    };

    let builder = match variant.as_str() {
        "four" => FaceBoxConfig::<Millis, 5>::four_part(),
        "five" => FaceBoxConfig::<Millis, 5>::five_part(),
        other => {
            eprintln!("unknown variant '{other}', expected 'four' or 'five'");
            return ExitCode::FAILURE;
        }
    };

    let config = match builder.build() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{variant}-part icon: {} face boxes, {} ticks per step",
        config.palette().len(),
        config.ticks_per_step()
    );

    let clock = SimulatedClock {
        now: Cell::new(Instant(0)),
    };
    let mut animator = FaceBoxAnimator::new(PrintSurface::default(), &clock, config);

    for tap in 1..=taps {
        println!(
            "tap {tap} on face box {}",
            animator.controller().active_index()
        );
        animator.tap();

        while let ServiceTiming::Delay(delay) = animator.service() {
            clock.advance(delay.as_millis().max(FRAME_MILLIS));
        }
    }

    println!(
        "done after {} frames, next face box {}",
        animator.surface().frame,
        animator.controller().active_index()
    );
    ExitCode::SUCCESS
}
