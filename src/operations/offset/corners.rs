use crate::error::{DegeneracyError, Result};
use crate::math::distance_2d::line_closest_point;
use crate::math::intersect_2d::line_intersection;
use crate::math::polygon_2d::left_normal;
use crate::math::{cross, Point2};

use super::segments::ShiftedSegment;

/// Endpoints closer than this are joined without intersecting the lines.
const JOIN_TOLERANCE: f64 = 1e-6;

/// Whether an offset corner bulges out of the shifted segments or folds back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    /// Both segments have to be extended forward to meet: the corner can be
    /// rounded or chamfered.
    Outside,
    Inside,
    /// The segments lie on one line, heading the same way.
    Straight,
}

/// Meeting point of two consecutive shifted segments, extended as lines.
///
/// # Errors
///
/// Returns `DegeneracyError::ParallelCorner` if the segments are parallel
/// and do not already touch. Segments continuing each other along one line
/// join halfway across the gap. `index` names the corner.
pub fn sharp_corner(
    prev: &ShiftedSegment,
    next: &ShiftedSegment,
    index: usize,
    eps: f64,
) -> Result<Point2> {
    if (prev.end - next.start).norm() < JOIN_TOLERANCE {
        return Ok(prev.end);
    }
    if let Some(corner) = line_intersection(&prev.start, &prev.end, &next.start, &next.end, eps) {
        return Ok(corner);
    }
    if is_straight(prev, next) {
        return Ok(nalgebra::center(&prev.end, &next.start));
    }
    Err(DegeneracyError::ParallelCorner(index).into())
}

/// Parallel, same heading and on the same line.
fn is_straight(prev: &ShiftedSegment, next: &ShiftedSegment) -> bool {
    let a = prev.end - prev.start;
    let b = next.end - next.start;
    let scale = a.norm() * b.norm();
    scale > 0.0
        && cross(&a, &b).abs() <= JOIN_TOLERANCE * scale
        && a.dot(&b) > 0.0
        && (line_closest_point(&next.start, &prev.start, &prev.end) - next.start).norm()
            < JOIN_TOLERANCE
}

#[must_use]
pub fn corner_kind(prev: &ShiftedSegment, next: &ShiftedSegment, corner: &Point2) -> CornerKind {
    if is_straight(prev, next) {
        return CornerKind::Straight;
    }
    let forward_next = (next.end - next.start).dot(&(next.start - corner)) > 0.0;
    let forward_prev = (prev.end - prev.start).dot(&(corner - prev.end)) > 0.0;
    if forward_next && forward_prev {
        CornerKind::Outside
    } else {
        CornerKind::Inside
    }
}

/// Points of an arc about `center` from `from` to `to`, both included,
/// sweeping the shorter way round.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn round_corner(center: &Point2, from: &Point2, to: &Point2, points: usize) -> Vec<Point2> {
    let u = from - center;
    let v = to - center;
    let radius = u.norm();
    let start = u.y.atan2(u.x);
    let sweep = (u.x * v.y - u.y * v.x).atan2(u.dot(&v));
    let steps = points.max(2) - 1;
    (0..=steps)
        .map(|i| {
            let a = start + sweep * (i as f64 / steps as f64);
            Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Replaces a sharp corner with a flat cut at distance `|d|` from `center`.
///
/// The chord between the two tangent points `from` and `to` is moved along
/// the corner bisector until it lies `d` away from `center`, then clipped
/// by the two sharp-corner lines.
#[must_use]
pub fn chamfer_corner(
    center: &Point2,
    from: &Point2,
    sharp: &Point2,
    to: &Point2,
    d: f64,
    eps: f64,
) -> Vec<Point2> {
    let chord = to - from;
    let len = chord.norm();
    if len <= eps {
        return vec![*sharp];
    }
    let foot = line_closest_point(center, from, to);
    let dist = d.signum() * (center - foot).norm();
    let shift = left_normal(chord / len) * (d - dist);
    let (c0, c1) = (from + shift, to + shift);
    match (
        line_intersection(&c0, &c1, from, sharp, eps),
        line_intersection(&c0, &c1, sharp, to, eps),
    ) {
        (Some(a), Some(b)) => vec![a, b],
        _ => vec![*sharp],
    }
}

/// Angle between `a - center` and `b - center`, in degrees.
#[must_use]
pub fn corner_angle(center: &Point2, a: &Point2, b: &Point2) -> f64 {
    let u = a - center;
    let v = b - center;
    (u.x * v.y - u.y * v.x).abs().atan2(u.dot(&v)).to_degrees()
}
