//! Error types for the sunrise/sunset widget.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SunriseSunsetViewError {
    /// `start_animate` was called before both times were supplied. The call
    /// aborts with no partial state change.
    #[error("both sunrise and sunset times must be set before starting the animation")]
    MissingTimeConfiguration,
}
