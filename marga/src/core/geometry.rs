//! Distance primitives used by the proximity checker and routers.

use super::Point2D;

/// Segments shorter than this are treated as a single point.
const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    a.distance(&b)
}

/// Distance from `p` to the closed segment `seg_start`..`seg_end`.
///
/// The projection of `p` onto the segment is clamped to its extent, so points
/// beyond either end measure against that endpoint. A zero-length segment
/// degrades to point distance.
///
/// # Example
/// ```
/// use marga::core::{Point2D, distance_to_segment};
///
/// let a = Point2D::new(0.0, 0.0);
/// let b = Point2D::new(10.0, 0.0);
/// assert!((distance_to_segment(Point2D::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-6);
/// // Past the end: measured to the endpoint, not the extended line
/// assert!((distance_to_segment(Point2D::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-6);
/// ```
pub fn distance_to_segment(p: Point2D, seg_start: Point2D, seg_end: Point2D) -> f32 {
    let seg = seg_end - seg_start;
    let len_sq = seg.dot(&seg);
    if len_sq < DEGENERATE_LENGTH_SQ {
        return p.distance(&seg_start);
    }

    let t = ((p - seg_start).dot(&seg) / len_sq).clamp(0.0, 1.0);
    p.distance(&(seg_start + seg * t))
}

/// Perpendicular distance from `p` to the infinite line through
/// `line_start` and `line_end`.
///
/// This ignores the extent of the segment: an obstacle far beyond the end of a
/// short route still measures as close if it lies near the extended line.
/// Used by [`ClearanceMode::InfiniteLine`](crate::query::ClearanceMode).
pub fn distance_to_line(p: Point2D, line_start: Point2D, line_end: Point2D) -> f32 {
    let d = line_end - line_start;
    let len_sq = d.dot(&d);
    if len_sq < DEGENERATE_LENGTH_SQ {
        return p.distance(&line_start);
    }

    (d.cross(&(p - line_start))).abs() / len_sq.sqrt()
}
