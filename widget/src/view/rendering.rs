//! # Rendering
//!
//! Draws the widget from the current geometry and style. This module is a
//! pure consumer: it holds no state and produces the same draw operations for
//! the same inputs, in a fixed order — track arc, shadow fill, sun marker,
//! then the two labels.

use egui::{pos2, Align2, FontFamily, FontId, Painter, Shape, Stroke};

use super::geometry::{self, BoardLayout};
use super::styling::StyleConfig;

/// Redraw the whole widget. The ratio may be any float; it is clamped to
/// [0, 1] here before it is used as a drawing parameter.
pub fn draw(
    painter: &Painter,
    layout: &BoardLayout,
    style: &StyleConfig,
    ratio: f32,
    sun_radius: f32,
    labels: Option<(&str, &str)>,
) {
    let ratio = ratio.clamp(0.0, 1.0);

    draw_track(painter, layout, style);
    draw_shadow(painter, layout, style, ratio);
    draw_sun(painter, layout, style, ratio, sun_radius);
    if let Some((sunrise_label, sunset_label)) = labels {
        draw_labels(painter, layout, style, sunrise_label, sunset_label);
    }
}

/// The static dashed semicircle.
fn draw_track(painter: &Painter, layout: &BoardLayout, style: &StyleConfig) {
    let points = geometry::track_points(layout.board, layout.radius);
    let stroke = Stroke::new(style.track_width, style.track_color);
    match style.track_dash {
        Some((dash_length, gap_length)) => {
            painter.extend(Shape::dashed_line(&points, stroke, dash_length, gap_length));
        }
        None => {
            painter.add(Shape::line(points, stroke));
        }
    }
}

/// Filled region under the track representing elapsed daylight.
fn draw_shadow(painter: &Painter, layout: &BoardLayout, style: &StyleConfig, ratio: f32) {
    if ratio <= 0.0 {
        return;
    }
    let points = geometry::shadow_points(layout.board, layout.radius, ratio);
    painter.add(Shape::convex_polygon(
        points,
        style.shadow_color,
        Stroke::NONE,
    ));
}

fn draw_sun(
    painter: &Painter,
    layout: &BoardLayout,
    style: &StyleConfig,
    ratio: f32,
    sun_radius: f32,
) {
    let center = geometry::sun_position(layout.board, layout.radius, ratio);
    if style.sun_filled {
        painter.circle_filled(center, sun_radius, style.sun_color);
    } else {
        painter.circle_stroke(
            center,
            sun_radius,
            Stroke::new(style.sun_stroke_width, style.sun_color),
        );
    }
}

/// Sunrise label bottom-left, sunset label bottom-right.
fn draw_labels(
    painter: &Painter,
    layout: &BoardLayout,
    style: &StyleConfig,
    sunrise_label: &str,
    sunset_label: &str,
) {
    let font = FontId::new(style.label_font_size, FontFamily::Proportional);
    let baseline_y = layout.board.bottom() - style.label_vertical_gap;

    painter.text(
        pos2(layout.board.left() + style.label_horizontal_gap, baseline_y),
        Align2::LEFT_BOTTOM,
        sunrise_label,
        font.clone(),
        style.label_color,
    );
    painter.text(
        pos2(layout.board.right() - style.label_horizontal_gap, baseline_y),
        Align2::RIGHT_BOTTOM,
        sunset_label,
        font,
        style.label_color,
    );
}
