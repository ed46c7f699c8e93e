//! # Sunrise Sunset Widget
//!
//! This crate provides a semicircular day/night track widget for egui. It draws
//! a dashed semicircle between a sunrise label on the left and a sunset label on
//! the right, fills the elapsed part of the day with a shadow, and animates a
//! sun marker along the arc based on the current wall-clock time.
//!
//! ## Key Components:
//! - [`SunriseSunsetView`] - the widget itself (state, setters, `show`)
//! - [`Time`] - a plain hour/minute pair supplied by the host
//! - [`SunriseSunsetLabelFormatter`] - customizable label formatting
//! - [`StyleConfig`] - colors, stroke widths, gaps
//!
//! ## Usage:
//! ```no_run
//! use sunrise_sunset_widget::{SunriseSunsetView, Time};
//!
//! let mut view = SunriseSunsetView::new();
//! view.set_sunrise_time(Time::new(6, 17));
//! view.set_sunset_time(Time::new(18, 32));
//! view.start_animate().unwrap();
//! // in your egui update loop:
//! // view.show(ui);
//! ```
//!
//! The widget never computes sunrise/sunset from geolocation; both times are
//! supplied by the caller.

pub mod error;
pub mod formatter;
pub mod model;
pub mod view;

pub use error::SunriseSunsetViewError;
pub use formatter::{SimpleSunriseSunsetLabelFormatter, SunriseSunsetLabelFormatter};
pub use model::Time;
pub use view::{StyleConfig, SunriseSunsetView};
