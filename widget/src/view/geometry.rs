//! # Track Geometry
//!
//! Pure geometry for the semicircular day track. Everything in here maps the
//! progress ratio (0 = sunrise, 1 = sunset) and the board rectangle to screen
//! positions; no painting happens in this module.
//!
//! The track is the upper half of the circle of `radius` centered at
//! `(board.left + radius, board.bottom)`. A ratio of 0 puts the sun at the
//! left end of the track, 0.5 at the apex, 1 at the right end; ratios outside
//! [0, 1] extrapolate the same formula and land below the track line.

use std::f32::consts::PI;

use egui::{pos2, vec2, Margin, Pos2, Rect, Vec2};

/// Board rectangle and track radius derived from an allocated widget rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Drawable area after padding.
    pub board: Rect,
    /// Radius of the semicircular track (half the board width).
    pub radius: f32,
}

/// Size the widget wants for a given available width: the track radius is
/// half the padded width, and the height follows from it (semicircle plus
/// vertical padding), not the other way around.
pub fn desired_size(available_width: f32, padding: Margin) -> Vec2 {
    let radius = (available_width - padding.left - padding.right) / 2.0;
    vec2(available_width, radius + padding.top + padding.bottom)
}

/// Compute the board rectangle and track radius from the rect the host
/// allocated. Recomputed on every layout pass.
pub fn board_layout(allocated: Rect, padding: Margin) -> BoardLayout {
    let board = Rect::from_min_max(
        pos2(allocated.min.x + padding.left, allocated.min.y + padding.top),
        pos2(allocated.max.x - padding.right, allocated.max.y - padding.bottom),
    );
    BoardLayout {
        board,
        radius: board.width() / 2.0,
    }
}

/// Position of the sun marker for a given ratio.
pub fn sun_position(board: Rect, radius: f32, ratio: f32) -> Pos2 {
    let angle = PI * ratio;
    pos2(
        board.left() + radius - radius * angle.cos(),
        board.bottom() - radius * angle.sin(),
    )
}

/// Polyline for the full static track semicircle, left end to right end.
pub fn track_points(board: Rect, radius: f32) -> Vec<Pos2> {
    arc_points(board, radius, PI)
}

/// Closed polygon for the elapsed-daylight shadow at the given ratio: the arc
/// from the left end of the track through `PI * ratio`, dropped to the bottom
/// edge at the current sun x-position. Zero area at ratio 0, the full
/// semicircle at ratio 1. The ratio must already be clamped to [0, 1].
pub fn shadow_points(board: Rect, radius: f32, ratio: f32) -> Vec<Pos2> {
    let mut points = arc_points(board, radius, PI * ratio);
    let sun = sun_position(board, radius, ratio);
    points.push(pos2(sun.x, board.bottom()));
    points
}

/// Sample an arc starting at the left end of the track and sweeping by
/// `sweep` radians, as a series of points suitable for line or polygon
/// drawing (egui has no native arc shape).
fn arc_points(board: Rect, radius: f32, sweep: f32) -> Vec<Pos2> {
    // Roughly 3 pixels per segment for a smooth appearance, within bounds.
    let num_segments = ((sweep.abs() * radius / 3.0).ceil() as usize).clamp(8, 100);

    let angle_step = sweep / num_segments as f32;
    (0..=num_segments)
        .map(|i| {
            let angle = angle_step * i as f32;
            pos2(
                board.left() + radius - radius * angle.cos(),
                board.bottom() - radius * angle.sin(),
            )
        })
        .collect()
}
