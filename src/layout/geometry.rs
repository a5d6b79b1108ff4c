//! Distance primitives backing every clearance rule
//!
//! Both functions are pure and total: they never fail and never return a
//! negative distance. Overlapping or touching shapes are at distance zero.

use crate::core::types::{Circle, Rect};

/// Euclidean distance from a circle's boundary to a rectangle's boundary.
///
/// Uses the clamped closest-point method: the nearest point of the rectangle
/// to the circle's center is found by clamping the center onto the
/// rectangle, and the radius is subtracted from the center-to-point
/// distance. A center inside or on the rectangle yields zero regardless of
/// radius.
pub fn circle_to_rect_edge_distance(circle: &Circle, rect: &Rect) -> f64 {
    let closest_x = circle.center.x.clamp(rect.x, rect.max_x());
    let closest_y = circle.center.y.clamp(rect.y, rect.max_y());
    let dx = circle.center.x - closest_x;
    let dy = circle.center.y - closest_y;
    (dx.hypot(dy) - circle.radius).max(0.0)
}

/// Gap between two axis-aligned rectangles, edge to edge.
///
/// The per-axis gaps (zero when the projections overlap) combine as a
/// Euclidean distance, so diagonal separation is measured corner to corner.
pub fn rect_to_rect_edge_distance(a: &Rect, b: &Rect) -> f64 {
    let dx = (a.x - b.max_x()).max(b.x - a.max_x()).max(0.0);
    let dy = (a.y - b.max_y()).max(b.y - a.max_y()).max(0.0);
    dx.hypot(dy)
}
