use crate::geometry::Region;
use crate::math::polygon_2d::left_normal;
use crate::math::Point2;
use crate::operations::query::{Containment, PointInRegion};

/// Distance of the side probe from a shared edge, as a multiple of `eps`.
///
/// Must stay well above 1 so the probe is never classified as on-boundary,
/// and small against the shortest feature of the inputs.
pub const SIDE_PROBE_SCALE: f64 = 1000.0;

/// Relation of a sub-path to the other operand of a boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpathTag {
    Outside,
    Inside,
    /// On the other region's boundary, both interiors on the same side.
    SameSide,
    /// On the other region's boundary, interiors on opposite sides.
    OppositeSide,
}

/// Classifies a sub-path of `own` against `other`.
///
/// Tests the midpoint of the sub-path's leading edge. A midpoint on the
/// boundary of `other` means the sub-path runs along a shared edge; a probe
/// is then placed just off the edge on the interior side of `own`, and the
/// tag depends on whether `other` also covers that side.
#[must_use]
pub fn classify_subpath(subpath: &[Point2], own: &Region, other: &Region, eps: f64) -> SubpathTag {
    let (a, b) = (&subpath[0], &subpath[1]);
    let mid = nalgebra::center(a, b);
    match PointInRegion::new(mid, other).with_eps(eps).execute() {
        Containment::Inside => SubpathTag::Inside,
        Containment::Outside => SubpathTag::Outside,
        Containment::OnBoundary => {
            let dir = b - a;
            let normal = left_normal(dir / dir.norm()) * (SIDE_PROBE_SCALE * eps);
            let left = mid + normal;
            let probe = if PointInRegion::new(left, own).with_eps(eps).execute()
                == Containment::Inside
            {
                left
            } else {
                mid - normal
            };
            if PointInRegion::new(probe, other).with_eps(eps).execute() == Containment::Inside {
                SubpathTag::SameSide
            } else {
                SubpathTag::OppositeSide
            }
        }
    }
}
