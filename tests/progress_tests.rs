//! Integration tests for progress arithmetic

mod common;
use common::*;

use square_face_box::progress::{clamped_linear, divide_scale, ease};

fn samples() -> impl Iterator<Item = f32> {
    (0..=100).map(|i| i as f32 / 100.0)
}

#[test]
fn clamped_linear_stays_within_window_bounds() {
    for n in [1, 4, 5] {
        for i in 0..n {
            for scale in samples() {
                let value = clamped_linear(scale, i, n);
                assert!(value >= 0.0, "negative window for i={i} n={n} scale={scale}");
                assert!(value <= 1.0 / n as f32 + 1e-6);
            }
        }
    }
}

#[test]
fn clamped_linear_is_monotonic_in_scale() {
    for n in [4, 5] {
        for i in 0..n {
            let mut last = 0.0;
            for scale in samples() {
                let value = clamped_linear(scale, i, n);
                assert!(value >= last);
                last = value;
            }
        }
    }
}

#[test]
fn windows_open_one_after_another() {
    // Halfway through the second window of four
    let scale = 0.375;
    assert!(approx_eq(clamped_linear(scale, 0, 4), 0.25));
    assert!(approx_eq(clamped_linear(scale, 1, 4), 0.125));
    assert_eq!(clamped_linear(scale, 2, 4), 0.0);
    assert_eq!(clamped_linear(scale, 3, 4), 0.0);
}

#[test]
fn divide_scale_spans_zero_to_one() {
    for i in 0..5 {
        assert_eq!(divide_scale(0.0, i, 5), 0.0);
        assert!(approx_eq(divide_scale(1.0, i, 5), 1.0));
    }
    assert!(approx_eq(divide_scale(0.5, 2, 5), 0.5));
}

#[test]
fn ease_hits_zero_one_zero() {
    assert!(approx_eq(ease(0.0), 0.0));
    assert!(approx_eq(ease(0.5), 1.0));
    assert!(approx_eq(ease(1.0), 0.0));
}

#[test]
fn ease_is_symmetric_around_midpoint() {
    for scale in samples() {
        assert!(approx_eq(ease(scale), ease(1.0 - scale)));
    }
}
