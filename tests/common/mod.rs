//! Shared test infrastructure for square-face-box integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use square_face_box::{DrawSurface, Srgb, Stroke, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Surface
// ============================================================================

/// One primitive call made on a [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, stroke: Stroke },
    Circle { cx: f32, cy: f32, radius: f32, color: Srgb },
    StrokeRect { x: f32, y: f32, width: f32, height: f32, stroke: Stroke },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Srgb },
}

/// Drawing surface that records every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    depth: i32,
    max_depth: i32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Current save/restore nesting depth; zero when balanced
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Number of face boxes drawn, counted by their outline rectangles
    pub fn face_boxes_drawn(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::StrokeRect { .. }))
            .count()
    }

    /// Number of full-canvas background fills
    pub fn frames_drawn(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect { .. }))
            .count()
    }

    /// Last translation applied, if any
    pub fn last_translation(&self) -> Option<(f32, f32)> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Translate { x, y } => Some((*x, *y)),
            _ => None,
        })
    }

    /// Circles of the most recent face box
    pub fn last_circles(&self) -> Vec<(f32, f32, f32, Srgb)> {
        let start = self
            .calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::Save))
            .unwrap_or(0);
        self.calls[start..]
            .iter()
            .filter_map(|call| match call {
                DrawCall::Circle { cx, cy, radius, color } => Some((*cx, *cy, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    /// Outline stroke of the most recent face box
    pub fn last_outline(&self) -> Option<Stroke> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::StrokeRect { stroke, .. } => Some(*stroke),
            _ => None,
        })
    }

    /// Eye-line of the most recent face box as `(x0, x1)`
    pub fn last_eye_line(&self) -> Option<(f32, f32)> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Line { x0, x1, .. } => Some((*x0, *x1)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::Translate { x, y });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: &Stroke) {
        self.calls.push(DrawCall::Line { x0, y0, x1, y1, stroke: *stroke });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Srgb) {
        self.calls.push(DrawCall::Circle { cx, cy, radius, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: &Stroke) {
        self.calls.push(DrawCall::StrokeRect { x, y, width, height, stroke: *stroke });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Srgb) {
        self.calls.push(DrawCall::FillRect { x, y, width, height, color });
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 1e-4;
    (a - b).abs() < EPSILON
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
