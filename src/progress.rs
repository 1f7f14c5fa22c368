//! Progress arithmetic: sub-fraction windows and sinusoidal easing.
//!
//! A node's progress is split into `n` consecutive windows. Window `i` starts
//! growing once the progress passes `i / n` and saturates at `(i + 1) / n`, so
//! each visual sub-part moves in turn.

use core::f32::consts::PI;

/// Returns the raw window fraction of part `i` out of `n`, in `[0, 1/n]`.
///
/// `n` must be non-zero.
#[inline]
pub fn clamped_linear(scale: f32, i: u32, n: u32) -> f32 {
    debug_assert!(n > 0, "part count must be non-zero");
    let n = n as f32;
    (scale - i as f32 / n).max(0.0).min(1.0 / n)
}

/// Returns the window fraction of part `i` out of `n`, normalized to `[0, 1]`.
#[inline]
pub fn divide_scale(scale: f32, i: u32, n: u32) -> f32 {
    clamped_linear(scale, i, n) * n as f32
}

/// Maps linear progress onto `sin(scale * PI)`: zero at both ends, one at the midpoint.
#[inline]
pub fn ease(scale: f32) -> f32 {
    libm::sinf(scale * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn window_stays_closed_until_its_start() {
        assert_eq!(clamped_linear(0.2, 1, 4), 0.0);
        assert_eq!(clamped_linear(0.25, 1, 4), 0.0);
    }

    #[test]
    fn window_grows_then_saturates() {
        assert!((clamped_linear(0.3, 1, 4) - 0.05).abs() < EPSILON);
        assert!((clamped_linear(0.9, 1, 4) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn divided_window_is_normalized() {
        assert!((divide_scale(0.3, 1, 5) - 0.5).abs() < EPSILON);
        assert!((divide_scale(1.0, 4, 5) - 1.0).abs() < EPSILON);
        assert_eq!(divide_scale(0.0, 0, 5), 0.0);
    }

    #[test]
    fn ease_peaks_in_the_middle() {
        assert!(ease(0.0).abs() < EPSILON);
        assert!((ease(0.5) - 1.0).abs() < EPSILON);
        assert!(ease(1.0).abs() < EPSILON);
    }
}
