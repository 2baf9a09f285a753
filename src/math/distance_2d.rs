use super::{cross, Point2};

/// Returns the point on segment `a→b` closest to `p`, with its clamped parameter.
#[must_use]
pub fn segment_closest_point(p: &Point2, a: &Point2, b: &Point2) -> (Point2, f64) {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (*a, 0.0);
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (a + d * t, t)
}

/// Returns the point on the infinite line through `a` and `b` closest to `p`.
#[must_use]
pub fn line_closest_point(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        return *a;
    }
    a + d * ((p - a).dot(&d) / len_sq)
}

/// Returns the minimum distance from `p` to the segment `a→b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let (closest, _) = segment_closest_point(p, a, b);
    (p - closest).norm()
}

/// Returns `true` if `p` lies on the segment `a→b` within `eps`.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2, eps: f64) -> bool {
    point_to_segment_dist(p, a, b) <= eps
}

/// Returns the projection parameter of `p` on `a→b` if `p` touches the open
/// interior of the segment: perpendicular distance below `eps` and the
/// parameter strictly inside `(eps, 1 - eps)`.
#[must_use]
pub fn interior_touch(p: &Point2, a: &Point2, b: &Point2, eps: f64) -> Option<f64> {
    let d = b - a;
    let len = d.norm();
    if len <= eps {
        return None;
    }
    let w = p - a;
    let t = w.dot(&d) / (len * len);
    (cross(&w, &d).abs() < eps * len && t > eps && t < 1.0 - eps).then_some(t)
}

/// Minimum distance from `p` to the edges of a path.
#[must_use]
pub fn point_to_path_dist(p: &Point2, path: &[Point2], closed: bool) -> f64 {
    let n = path.len();
    match n {
        0 => f64::INFINITY,
        1 => (p - path[0]).norm(),
        _ => {
            let edges = if closed { n } else { n - 1 };
            (0..edges)
                .map(|i| point_to_segment_dist(p, &path[i], &path[(i + 1) % n]))
                .fold(f64::INFINITY, f64::min)
        }
    }
}
