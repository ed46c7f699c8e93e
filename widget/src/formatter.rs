//! # Label Formatting
//!
//! Hosts control how the sunrise and sunset labels are rendered by supplying
//! an implementation of [`SunriseSunsetLabelFormatter`]. The default,
//! [`SimpleSunriseSunsetLabelFormatter`], formats times as `"6:17"` with no
//! zero-padding; applications wanting `"06h 17m"` or locale-aware output
//! plug in their own implementation.

use crate::model::Time;

/// Converts sunrise/sunset times into display strings.
///
/// Implementations must be side-effect-free: the same input always produces
/// the same string.
pub trait SunriseSunsetLabelFormatter {
    fn format_sunrise_label(&self, sunrise: Time) -> String;

    fn format_sunset_label(&self, sunset: Time) -> String;
}

/// Default formatter producing `"{hour}:{minute}"` without zero-padding.
#[derive(Debug, Clone, Default)]
pub struct SimpleSunriseSunsetLabelFormatter;

impl SimpleSunriseSunsetLabelFormatter {
    pub fn format_time(&self, time: Time) -> String {
        format!("{}:{}", time.hour, time.minute)
    }
}

impl SunriseSunsetLabelFormatter for SimpleSunriseSunsetLabelFormatter {
    fn format_sunrise_label(&self, sunrise: Time) -> String {
        self.format_time(sunrise)
    }

    fn format_sunset_label(&self, sunset: Time) -> String {
        self.format_time(sunset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_formatter_no_zero_padding() {
        let formatter = SimpleSunriseSunsetLabelFormatter;
        assert_eq!(formatter.format_sunrise_label(Time::new(6, 5)), "6:5");
        assert_eq!(formatter.format_sunset_label(Time::new(18, 32)), "18:32");
    }

    #[test]
    fn test_formatter_is_pure() {
        let formatter = SimpleSunriseSunsetLabelFormatter;
        let time = Time::new(7, 3);
        assert_eq!(
            formatter.format_sunrise_label(time),
            formatter.format_sunrise_label(time)
        );
        assert_eq!(
            formatter.format_sunset_label(time),
            formatter.format_sunset_label(time)
        );
    }

    #[test]
    fn test_out_of_range_passes_through() {
        // No validation is enforced; formatting is plain pass-through.
        let formatter = SimpleSunriseSunsetLabelFormatter;
        assert_eq!(formatter.format_time(Time::new(25, 61)), "25:61");
    }
}
