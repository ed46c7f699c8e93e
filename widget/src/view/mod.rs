//! # Sunrise Sunset View
//!
//! The widget itself, plus its supporting modules:
//! - `geometry.rs` - pure track/shadow/sun position math
//! - `animator.rs` - the Idle/Running animation state machine
//! - `rendering.rs` - fixed-order painting from geometry and style
//! - `styling.rs` - the appearance configuration
//!
//! The view owns the mutable widget state (times, ratio, style, formatter,
//! animator) and wires it all together in [`SunriseSunsetView::show`], which
//! is called once per frame from the host's egui update loop.

pub mod animator;
pub mod geometry;
pub mod rendering;
pub mod styling;

pub use styling::StyleConfig;

use egui::{Response, Sense, Ui};
use log::debug;

use crate::error::SunriseSunsetViewError;
use crate::formatter::{SimpleSunriseSunsetLabelFormatter, SunriseSunsetLabelFormatter};
use crate::model::Time;
use animator::{target_ratio, ProgressAnimator};

/// Default radius of the sun marker in points.
pub const DEFAULT_SUN_RADIUS: f32 = 20.0;

/// A semicircular day/night track with an animated sun marker.
///
/// Create one, hand it the sunrise and sunset times, call
/// [`start_animate`](Self::start_animate), then call [`show`](Self::show)
/// every frame. The widget keeps requesting repaints while the animation is
/// in flight and goes quiet once the sun has reached its target position.
pub struct SunriseSunsetView {
    /// Current elapsed-daylight ratio. < 0 means before sunrise, > 1 after
    /// sunset; clamped to [0, 1] by the renderer before drawing.
    ratio: f32,
    sun_radius: f32,
    sunrise_time: Option<Time>,
    sunset_time: Option<Time>,
    style: StyleConfig,
    label_formatter: Box<dyn SunriseSunsetLabelFormatter>,
    animator: ProgressAnimator,
}

impl SunriseSunsetView {
    pub fn new() -> Self {
        Self::with_style(StyleConfig::default())
    }

    pub fn with_style(style: StyleConfig) -> Self {
        Self {
            ratio: 0.0,
            sun_radius: DEFAULT_SUN_RADIUS,
            sunrise_time: None,
            sunset_time: None,
            style,
            label_formatter: Box::new(SimpleSunriseSunsetLabelFormatter),
            animator: ProgressAnimator::new(),
        }
    }

    pub fn sunrise_time(&self) -> Option<Time> {
        self.sunrise_time
    }

    pub fn set_sunrise_time(&mut self, sunrise: Time) {
        self.sunrise_time = Some(sunrise);
    }

    pub fn sunset_time(&self) -> Option<Time> {
        self.sunset_time
    }

    pub fn set_sunset_time(&mut self, sunset: Time) {
        self.sunset_time = Some(sunset);
    }

    pub fn sun_radius(&self) -> f32 {
        self.sun_radius
    }

    pub fn set_sun_radius(&mut self, sun_radius: f32) {
        self.sun_radius = sun_radius;
    }

    pub fn label_formatter(&self) -> &dyn SunriseSunsetLabelFormatter {
        self.label_formatter.as_ref()
    }

    pub fn set_label_formatter(&mut self, formatter: Box<dyn SunriseSunsetLabelFormatter>) {
        self.label_formatter = formatter;
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    /// Current elapsed-daylight ratio (raw, unclamped).
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Set the ratio directly. This is the hook for hosts that drive the sun
    /// from their own animation source instead of [`start_animate`]; the
    /// value is stored as-is and clamped only at draw time.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio;
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Start animating the sun from the left end of the track to the position
    /// matching the current local time.
    ///
    /// Fails with [`SunriseSunsetViewError::MissingTimeConfiguration`] if
    /// either time is unset, leaving the widget state untouched. Starting
    /// while a previous animation is still running restarts from ratio 0.
    pub fn start_animate(&mut self) -> Result<(), SunriseSunsetViewError> {
        self.start_animate_at(Time::from(chrono::Local::now().time()))
    }

    /// Like [`start_animate`](Self::start_animate), but with an explicit
    /// "current time" instead of the wall clock.
    pub fn start_animate_at(&mut self, current: Time) -> Result<(), SunriseSunsetViewError> {
        let (Some(sunrise), Some(sunset)) = (self.sunrise_time, self.sunset_time) else {
            return Err(SunriseSunsetViewError::MissingTimeConfiguration);
        };
        let target = target_ratio(sunrise, sunset, current);
        debug!("starting sunrise/sunset animation toward ratio {target}");
        self.ratio = 0.0;
        self.animator.start(target);
        Ok(())
    }

    /// Lay out and draw the widget for this frame.
    ///
    /// The board rectangle is recomputed from the available width and the
    /// configured padding on every call (the widget's height derives from its
    /// width: half the padded width is the track radius). The animator is
    /// advanced by the frame delta before drawing, so the redraw always sees
    /// the updated ratio.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let desired = geometry::desired_size(ui.available_width(), self.style.padding);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());

        if self.animator.is_running() {
            let dt = ui.input(|i| i.stable_dt);
            if let Some(ratio) = self.animator.advance(dt) {
                self.ratio = ratio;
            }
            if self.animator.is_running() {
                ui.ctx().request_repaint();
            }
        }

        if ui.is_rect_visible(rect) {
            let layout = geometry::board_layout(rect, self.style.padding);
            // Labels are skipped until both times are configured.
            let labels = match (self.sunrise_time, self.sunset_time) {
                (Some(sunrise), Some(sunset)) => Some((
                    self.label_formatter.format_sunrise_label(sunrise),
                    self.label_formatter.format_sunset_label(sunset),
                )),
                _ => None,
            };
            rendering::draw(
                ui.painter(),
                &layout,
                &self.style,
                self.ratio,
                self.sun_radius,
                labels.as_ref().map(|(a, b)| (a.as_str(), b.as_str())),
            );
        }

        response
    }
}

impl Default for SunriseSunsetView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animator::ANIMATION_DURATION_SECS;

    #[test]
    fn test_start_animate_requires_both_times() {
        let mut view = SunriseSunsetView::new();
        view.set_sunrise_time(Time::new(6, 17));
        view.set_ratio(0.4);

        let result = view.start_animate_at(Time::new(12, 0));
        assert_eq!(
            result,
            Err(SunriseSunsetViewError::MissingTimeConfiguration)
        );
        // The failed call must leave the widget untouched.
        assert_eq!(view.ratio(), 0.4);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_start_animate_resets_ratio_and_runs_to_target() {
        let mut view = SunriseSunsetView::new();
        view.set_sunrise_time(Time::new(6, 0));
        view.set_sunset_time(Time::new(18, 0));
        view.set_ratio(0.9);

        view.start_animate_at(Time::new(12, 0)).unwrap();
        assert_eq!(view.ratio(), 0.0);
        assert!(view.is_animating());

        // One oversized step finishes the animation exactly on target.
        let ratio = view.animator.advance(ANIMATION_DURATION_SECS).unwrap();
        assert!((ratio - 0.5).abs() < 1e-6);
        assert!(!view.animator.is_running());
    }

    #[test]
    fn test_set_ratio_stores_raw_value() {
        let mut view = SunriseSunsetView::new();
        view.set_ratio(-0.25); // before sunrise; clamped at draw time only
        assert_eq!(view.ratio(), -0.25);
        view.set_ratio(1.5);
        assert_eq!(view.ratio(), 1.5);
    }

    #[test]
    fn test_default_configuration() {
        let view = SunriseSunsetView::new();
        assert_eq!(view.sun_radius(), DEFAULT_SUN_RADIUS);
        assert!(view.sunrise_time().is_none());
        assert!(view.sunset_time().is_none());
        assert_eq!(
            view.label_formatter().format_sunrise_label(Time::new(6, 17)),
            "6:17"
        );
    }
}
