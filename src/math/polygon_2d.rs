use super::{approx_eq, Point2, Vector2};
use crate::error::{InputError, Result};

/// Winding direction of a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Zero signed area (fewer than 3 points or collinear).
    Degenerate,
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the winding direction of a polygon.
#[must_use]
pub fn orientation(points: &[Point2]) -> Orientation {
    let area = signed_area(points);
    if area < 0.0 {
        Orientation::Clockwise
    } else if area > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Degenerate
    }
}

#[must_use]
pub fn is_polygon_clockwise(points: &[Point2]) -> bool {
    signed_area(points) < 0.0
}

/// Returns the polygon with its vertex order reversed, keeping the start vertex.
#[must_use]
pub fn reverse_polygon(points: &[Point2]) -> Vec<Point2> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(points.len());
    out.push(first);
    out.extend(rest.iter().rev().copied());
    out
}

/// Returns the polygon wound clockwise.
#[must_use]
pub fn clockwise_polygon(points: &[Point2]) -> Vec<Point2> {
    if signed_area(points) > 0.0 {
        reverse_polygon(points)
    } else {
        points.to_vec()
    }
}

/// Returns the polygon wound counter-clockwise.
#[must_use]
pub fn ccw_polygon(points: &[Point2]) -> Vec<Point2> {
    if signed_area(points) < 0.0 {
        reverse_polygon(points)
    } else {
        points.to_vec()
    }
}

/// Area-weighted centroid of a simple polygon. `None` when the area is zero.
#[must_use]
pub fn polygon_centroid(points: &[Point2]) -> Option<Point2> {
    let n = points.len();
    let area = signed_area(points);
    if n < 3 || area == 0.0 {
        return None;
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let w = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    let scale = 1.0 / (6.0 * area);
    Some(Point2::new(cx * scale, cy * scale))
}

/// Removes consecutive points closer than `eps`.
///
/// For closed paths the last point is also dropped when it repeats the first.
/// A path never shrinks below one point.
#[must_use]
pub fn deduplicate(points: &[Point2], closed: bool, eps: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if out.last().is_some_and(|last| approx_eq(last, &pt, eps)) {
            continue;
        }
        out.push(pt);
    }
    if closed && out.len() > 1 && approx_eq(&out[0], &out[out.len() - 1], eps) {
        out.pop();
    }
    out
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `InputError::RepeatedPoint` if the segment is shorter than `eps`;
/// `index` names the segment in the caller's path.
pub fn segment_direction(a: &Point2, b: &Point2, index: usize, eps: f64) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len <= eps {
        return Err(InputError::RepeatedPoint(index).into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
