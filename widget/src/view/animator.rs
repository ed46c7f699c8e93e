//! # Progress Animator
//!
//! Drives the sun along the track when an animation is started: the ratio
//! moves linearly from 0 to a target computed from the current wall-clock
//! time, over a fixed duration, sampled at whatever frame rate the host
//! delivers. The animator owns no clock of its own; the widget feeds it the
//! per-frame delta, which keeps the whole thing deterministic under test.

use log::warn;

use crate::model::Time;

/// Fixed animation duration in seconds.
pub const ANIMATION_DURATION_SECS: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum AnimatorState {
    Idle,
    Running { target: f32, elapsed: f32 },
}

/// Idle -> Running -> Idle state machine with linear interpolation.
///
/// Starting while already running restarts from ratio 0, replacing the
/// in-flight animation. There is no pause/resume and no cancel-without-replace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimator {
    state: AnimatorState,
}

impl ProgressAnimator {
    pub fn new() -> Self {
        Self {
            state: AnimatorState::Idle,
        }
    }

    /// Begin a new animation toward `target`, restarting from ratio 0.
    pub fn start(&mut self, target: f32) {
        self.state = AnimatorState::Running {
            target,
            elapsed: 0.0,
        };
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running { .. })
    }

    /// Advance by one frame delta (seconds) and return the new ratio, or
    /// `None` while idle. On the final sample the ratio is exactly the
    /// target and the animator returns to idle.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        match self.state {
            AnimatorState::Idle => None,
            AnimatorState::Running { target, elapsed } => {
                let elapsed = elapsed + dt.max(0.0);
                if elapsed >= ANIMATION_DURATION_SECS {
                    self.state = AnimatorState::Idle;
                    Some(target)
                } else {
                    self.state = AnimatorState::Running { target, elapsed };
                    Some(target * (elapsed / ANIMATION_DURATION_SECS))
                }
            }
        }
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of the sunrise-to-sunset window that has elapsed at `current`,
/// clamped to [0, 1].
///
/// A window of zero or negative width (sunset at or before sunrise) would
/// divide by zero; that case is defined as ratio 0 so NaN/infinity never
/// reaches the drawing code.
pub fn target_ratio(sunrise: Time, sunset: Time, current: Time) -> f32 {
    let sunrise_minutes = sunrise.to_minutes() as f32;
    let sunset_minutes = sunset.to_minutes() as f32;
    if sunset_minutes <= sunrise_minutes {
        warn!(
            "degenerate sunrise/sunset window ({}:{:02} -> {}:{:02}), treating ratio as 0",
            sunrise.hour, sunrise.minute, sunset.hour, sunset.minute
        );
        return 0.0;
    }
    let ratio = (current.to_minutes() as f32 - sunrise_minutes) / (sunset_minutes - sunrise_minutes);
    ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_target_ratio_at_window_edges() {
        let sunrise = Time::new(6, 17);
        let sunset = Time::new(18, 32);
        assert_eq!(target_ratio(sunrise, sunset, Time::new(6, 17)), 0.0);
        assert_eq!(target_ratio(sunrise, sunset, Time::new(18, 32)), 1.0);
    }

    #[test]
    fn test_target_ratio_clamps_outside_window() {
        let sunrise = Time::new(6, 17);
        let sunset = Time::new(18, 32);
        assert_eq!(target_ratio(sunrise, sunset, Time::new(4, 0)), 0.0);
        assert_eq!(target_ratio(sunrise, sunset, Time::new(22, 45)), 1.0);
    }

    #[test]
    fn test_target_ratio_midday() {
        let ratio = target_ratio(Time::new(6, 0), Time::new(18, 0), Time::new(12, 0));
        assert!((ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_target_ratio_degenerate_window_is_zero() {
        let noon = Time::new(12, 0);
        assert_eq!(target_ratio(noon, noon, Time::new(13, 0)), 0.0);
        // Reversed window behaves the same.
        assert_eq!(
            target_ratio(Time::new(18, 0), Time::new(6, 0), Time::new(12, 0)),
            0.0
        );
    }

    #[test]
    fn test_animation_is_monotonic_and_ends_exactly_on_target() {
        let target = 0.73;
        let mut animator = ProgressAnimator::new();
        animator.start(target);

        let mut previous = 0.0;
        let mut last = 0.0;
        while let Some(ratio) = animator.advance(FRAME) {
            assert!(ratio >= previous, "ratio must never decrease");
            assert!(ratio <= target + 1e-6);
            previous = ratio;
            last = ratio;
        }
        assert_eq!(last, target);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_advance_while_idle_returns_none() {
        let mut animator = ProgressAnimator::new();
        assert_eq!(animator.advance(FRAME), None);
    }

    #[test]
    fn test_restart_replaces_in_flight_animation() {
        let mut animator = ProgressAnimator::new();
        animator.start(1.0);
        let midway = animator.advance(ANIMATION_DURATION_SECS / 2.0).unwrap();
        assert!(midway > 0.4);

        // A second start resets to ratio 0 with the new target.
        animator.start(0.25);
        let first = animator.advance(FRAME).unwrap();
        assert!(first < midway);
        assert!(first < 0.01);
    }

    #[test]
    fn test_oversized_frame_delta_finishes_in_one_step() {
        let mut animator = ProgressAnimator::new();
        animator.start(0.5);
        assert_eq!(animator.advance(10.0), Some(0.5));
        assert!(!animator.is_running());
        assert_eq!(animator.advance(FRAME), None);
    }
}
