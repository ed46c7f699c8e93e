//! # Widget Styling
//!
//! Colors, stroke widths and gaps for the sunrise/sunset view, gathered into
//! one configuration struct so a host can restyle the widget in a single
//! place. The defaults reproduce the classic white-on-colored-background
//! look: a dashed white track, a translucent white shadow, a stroked white
//! sun and white time labels.

use egui::{Color32, Margin};

/// Appearance configuration, immutable per draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    // Track (the static dashed semicircle)
    pub track_color: Color32,
    pub track_width: f32,
    /// Dash/gap lengths in points; `None` draws a solid track.
    pub track_dash: Option<(f32, f32)>,

    // Shadow (filled region under the track for elapsed daylight)
    pub shadow_color: Color32,

    // Sun marker
    pub sun_color: Color32,
    pub sun_stroke_width: f32,
    /// Draw the sun as a filled disc instead of a stroked circle.
    pub sun_filled: bool,

    // Sunrise/sunset labels
    pub label_color: Color32,
    pub label_font_size: f32,
    pub label_horizontal_gap: f32,
    pub label_vertical_gap: f32,

    /// Space between the widget bounds and the board rectangle.
    pub padding: Margin,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            track_color: Color32::WHITE,
            track_width: 4.0,
            track_dash: Some((15.0, 15.0)),

            shadow_color: Color32::from_rgba_unmultiplied(255, 255, 255, 0x32),

            sun_color: Color32::WHITE,
            sun_stroke_width: 4.0,
            sun_filled: false,

            label_color: Color32::WHITE,
            label_font_size: 40.0,
            label_horizontal_gap: 20.0,
            label_vertical_gap: 10.0,

            padding: Margin::same(20.0),
        }
    }
}
