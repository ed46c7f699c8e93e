//! # Time Model
//!
//! A minimal hour/minute pair used for sunrise and sunset times. The widget
//! only ever needs minutes-since-midnight, so this deliberately stays simpler
//! than a full `chrono` time: no seconds, no timezone, no validation beyond
//! caller discipline.

use chrono::{NaiveTime, Timelike};

/// Minutes in one hour, used for the minutes-since-midnight conversion.
pub const MINUTES_PER_HOUR: u32 = 60;

/// An hour/minute pair (24-hour clock).
///
/// Expected ranges are hour 0-23 and minute 0-59, but nothing enforces them;
/// out-of-range values flow through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
}

impl Time {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Minutes since midnight.
    pub fn to_minutes(self) -> u32 {
        self.hour * MINUTES_PER_HOUR + self.minute
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}
