use tracing::debug;

use crate::geometry::Region;
use crate::math::distance_2d::{interior_touch, point_on_segment};
use crate::math::intersect_2d::bounded_segment_intersection;
use crate::math::polygon_2d::deduplicate;
use crate::math::{Point2, EPSILON};
use crate::operations::boolean::split::split_region_at_region_crossings;

use super::point_in::{Containment, PointInPolygon};

/// Validates the structural invariants of a region.
///
/// Checks, in order: every component has at least 3 points, every component
/// is a simple polygon, no two components cross, and no vertex of one
/// component touches the interior of an edge of another. Components may
/// share vertices.
#[derive(Debug)]
pub struct IsValidRegion<'a> {
    region: &'a Region,
    eps: f64,
}

impl<'a> IsValidRegion<'a> {
    #[must_use]
    pub fn new(region: &'a Region) -> Self {
        Self {
            region,
            eps: EPSILON,
        }
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    #[must_use]
    pub fn execute(&self) -> bool {
        let comps = &self.region.components;
        let eps = self.eps;

        if let Some(i) = comps.iter().position(|c| c.len() < 3) {
            debug!(component = i, "region invalid: fewer than 3 points");
            return false;
        }
        if let Some(i) = comps.iter().position(|c| !is_path_simple(c, true, eps)) {
            debug!(component = i, "region invalid: component is not simple");
            return false;
        }
        for i in 0..comps.len() {
            for j in (i + 1)..comps.len() {
                if components_cross(&comps[i], &comps[j], eps) {
                    debug!(i, j, "region invalid: components cross");
                    return false;
                }
            }
        }
        for (i, comp) in comps.iter().enumerate() {
            for (j, other) in comps.iter().enumerate() {
                if i != j && has_t_junction(comp, other, eps) {
                    debug!(i, j, "region invalid: vertex touches edge interior");
                    return false;
                }
            }
        }
        true
    }
}

/// Validates a region and additionally requires that no two components
/// touch at all, not even at a shared vertex.
#[derive(Debug)]
pub struct IsRegionSimple<'a> {
    region: &'a Region,
    eps: f64,
}

impl<'a> IsRegionSimple<'a> {
    #[must_use]
    pub fn new(region: &'a Region) -> Self {
        Self {
            region,
            eps: EPSILON,
        }
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    #[must_use]
    pub fn execute(&self) -> bool {
        if !IsValidRegion::new(self.region).with_eps(self.eps).execute() {
            return false;
        }
        let comps = &self.region.components;
        comps.iter().enumerate().all(|(i, comp)| {
            comps
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || !touches(comp, other, self.eps))
        })
    }
}

/// Returns `true` if the polygon `a` crosses the polygon `b`: after cutting
/// `a` at its crossings with `b`, its sub-paths do not all lie strictly on
/// one side of `b`.
fn components_cross(a: &[Point2], b: &[Point2], eps: f64) -> bool {
    let (subpaths, _) = split_region_at_region_crossings(
        &Region::from(a),
        &Region::from(b),
        true,
        true,
        eps,
    );
    let mut seen_inside = false;
    let mut seen_outside = false;
    for sub in &subpaths {
        let mid = nalgebra::center(&sub[0], &sub[1]);
        match PointInPolygon::new(mid, b).with_eps(eps).execute() {
            Containment::OnBoundary => return true,
            Containment::Inside => seen_inside = true,
            Containment::Outside => seen_outside = true,
        }
    }
    seen_inside && seen_outside
}

/// Returns `true` if a vertex of `a` lies in the open interior of an edge of `b`.
fn has_t_junction(a: &[Point2], b: &[Point2], eps: f64) -> bool {
    let n = b.len();
    a.iter()
        .any(|v| (0..n).any(|k| interior_touch(v, &b[k], &b[(k + 1) % n], eps).is_some()))
}

/// Returns `true` if any vertex of `a` lies on the boundary of `b`.
fn touches(a: &[Point2], b: &[Point2], eps: f64) -> bool {
    let n = b.len();
    a.iter()
        .any(|v| (0..n).any(|k| point_on_segment(v, &b[k], &b[(k + 1) % n], eps)))
}

/// Returns `true` if the path has no 180 degree reversals and no two
/// non-adjacent edges touch or cross.
#[must_use]
pub fn is_path_simple(path: &[Point2], closed: bool, eps: f64) -> bool {
    let path = deduplicate(path, closed, eps);
    let n = path.len();
    if n < 2 {
        return true;
    }
    let edges = if closed { n } else { n - 1 };

    // Reversals between consecutive edges.
    let corners = if closed { n } else { n.saturating_sub(2) };
    for i in 0..corners {
        let v1 = path[(i + 1) % n] - path[i];
        let v2 = path[(i + 2) % n] - path[(i + 1) % n];
        let cos = v1.dot(&v2) / (v1.norm() * v2.norm());
        if (cos + 1.0).abs() <= eps {
            return false;
        }
    }

    for i in 0..edges {
        let a0 = &path[i];
        let a1 = &path[(i + 1) % n];
        for j in (i + 2)..edges {
            if closed && i == 0 && j == edges - 1 {
                continue;
            }
            let b0 = &path[j];
            let b1 = &path[(j + 1) % n];
            if bounded_segment_intersection(a0, a1, b0, b1, eps).is_some() {
                return false;
            }
            // Collinear overlap is reported as parallel; test containment.
            if point_on_segment(a0, b0, b1, eps)
                || point_on_segment(a1, b0, b1, eps)
                || point_on_segment(b0, a0, a1, eps)
                || point_on_segment(b1, a0, a1, eps)
            {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if `region` satisfies the region validity invariant.
#[must_use]
pub fn is_valid_region(region: &Region, eps: f64) -> bool {
    IsValidRegion::new(region).with_eps(eps).execute()
}

/// Returns `true` if `region` is valid and no two components touch.
#[must_use]
pub fn is_region_simple(region: &Region, eps: f64) -> bool {
    IsRegionSimple::new(region).with_eps(eps).execute()
}
