use super::{cross, Point2};

/// Intersection of the infinite lines through two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    pub point: Point2,
    /// Parameter along the first segment (`0` at its start, `1` at its end).
    pub u: f64,
    /// Parameter along the second segment.
    pub v: f64,
}

impl LineHit {
    /// Returns `true` if the hit lies on both bounded segments, within `eps`.
    #[must_use]
    pub fn is_bounded(&self, eps: f64) -> bool {
        within_unit(self.u, eps) && within_unit(self.v, eps)
    }
}

/// Returns `true` if `t` lies in `[0, 1]` within `eps`.
#[must_use]
pub fn within_unit(t: f64, eps: f64) -> bool {
    t >= -eps && t <= 1.0 + eps
}

/// Parametric intersection of the lines through segments `a0→a1` and `b0→b1`.
///
/// Returns `None` if the lines are parallel: the sine of the angle between
/// them is below `eps`, or either segment has zero length. Callers test
/// [`LineHit::is_bounded`] for a bounded segment intersection.
#[must_use]
pub fn segment_intersection(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<LineHit> {
    let da = a1 - a0;
    let db = b1 - b0;
    let scale = da.norm() * db.norm();
    let denom = cross(&da, &db);
    if scale == 0.0 || denom.abs() <= eps * scale {
        return None;
    }
    let w = b0 - a0;
    let u = cross(&w, &db) / denom;
    let v = cross(&w, &da) / denom;
    Some(LineHit {
        point: a0 + da * u,
        u,
        v,
    })
}

/// Bounded segment-segment intersection.
///
/// Returns the hit with parameters clamped to `[0, 1]` when both lie within
/// `eps` of the unit interval.
#[must_use]
pub fn bounded_segment_intersection(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<LineHit> {
    let hit = segment_intersection(a0, a1, b0, b1, eps)?;
    if !hit.is_bounded(eps) {
        return None;
    }
    let u = hit.u.clamp(0.0, 1.0);
    Some(LineHit {
        point: a0 + (a1 - a0) * u,
        u,
        v: hit.v.clamp(0.0, 1.0),
    })
}

/// Intersection point of two infinite lines, each given by two points.
#[must_use]
pub fn line_intersection(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<Point2> {
    segment_intersection(a0, a1, b0, b1, eps).map(|hit| hit.point)
}
