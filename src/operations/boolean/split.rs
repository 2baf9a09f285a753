use std::cmp::Ordering;

use tracing::trace;

use crate::geometry::Region;
use crate::math::distance_2d::segment_closest_point;
use crate::math::intersect_2d::bounded_segment_intersection;
use crate::math::polygon_2d::deduplicate;
use crate::math::{approx_eq, Point2, EPSILON};

/// Which operand a sub-path was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSource {
    A,
    B,
}

/// A cut location on a path: segment index and parameter along it.
#[derive(Debug, Clone, Copy)]
struct Cut {
    seg: usize,
    u: f64,
}

/// Sub-paths of both operands after cutting at every crossing.
#[derive(Debug, Clone, Default)]
pub struct SplitResult {
    pub a: Vec<Vec<Point2>>,
    pub b: Vec<Vec<Point2>>,
}

/// Cuts the components of two regions at every point where their boundaries
/// cross or touch, and at vertices shared between components of the same
/// region.
///
/// Each component is cut at its start, its end, and every cut location; the
/// pieces between consecutive cuts are returned in path order. A closed
/// component with no crossings comes back as a single sub-path that starts
/// and ends at its first vertex.
#[derive(Debug)]
pub struct SplitAtCrossings<'a> {
    a: &'a Region,
    b: &'a Region,
    closed_a: bool,
    closed_b: bool,
    eps: f64,
}

impl<'a> SplitAtCrossings<'a> {
    #[must_use]
    pub fn new(a: &'a Region, b: &'a Region) -> Self {
        Self {
            a,
            b,
            closed_a: true,
            closed_b: true,
            eps: EPSILON,
        }
    }

    /// Treat the components of `a` and `b` as closed (default) or open paths.
    #[must_use]
    pub fn with_closed(mut self, closed_a: bool, closed_b: bool) -> Self {
        self.closed_a = closed_a;
        self.closed_b = closed_b;
        self
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    #[must_use]
    pub fn execute(&self) -> SplitResult {
        let eps = self.eps;
        let mut cuts_a: Vec<Vec<Cut>> = vec![Vec::new(); self.a.len()];
        let mut cuts_b: Vec<Vec<Cut>> = vec![Vec::new(); self.b.len()];

        for (pa, path_a) in self.a.components.iter().enumerate() {
            for (i, a0, a1) in edges(path_a, self.closed_a, eps) {
                for (pb, path_b) in self.b.components.iter().enumerate() {
                    for (j, b0, b1) in edges(path_b, self.closed_b, eps) {
                        if let Some(hit) = bounded_segment_intersection(a0, a1, b0, b1, eps) {
                            cuts_a[pa].push(Cut { seg: i, u: hit.u });
                            cuts_b[pb].push(Cut { seg: j, u: hit.v });
                        }
                    }
                }
            }
        }

        add_self_touches(self.a, self.closed_a, &mut cuts_a, eps);
        add_self_touches(self.b, self.closed_b, &mut cuts_b, eps);

        let a = cut_region(self.a, self.closed_a, cuts_a, eps);
        let b = cut_region(self.b, self.closed_b, cuts_b, eps);
        trace!(subpaths_a = a.len(), subpaths_b = b.len(), "split at crossings");
        SplitResult { a, b }
    }
}

/// Non-degenerate edges of a path as `(index, start, end)`.
fn edges(path: &[Point2], closed: bool, eps: f64) -> impl Iterator<Item = (usize, &Point2, &Point2)> {
    let n = path.len();
    let count = match n {
        0 | 1 => 0,
        _ if closed => n,
        _ => n - 1,
    };
    (0..count)
        .map(move |i| (i, &path[i], &path[(i + 1) % n]))
        .filter(move |(_, a, b)| !approx_eq(a, b, eps))
}

/// Adds cuts where a vertex of one component touches another component of
/// the same region.
fn add_self_touches(region: &Region, closed: bool, cuts: &mut [Vec<Cut>], eps: f64) {
    for (p, path_p) in region.components.iter().enumerate() {
        for (q, path_q) in region.components.iter().enumerate() {
            if p == q {
                continue;
            }
            for (k, v) in path_p.iter().enumerate() {
                for (j, e0, e1) in edges(path_q, closed, eps) {
                    let (closest, t) = segment_closest_point(v, e0, e1);
                    if approx_eq(v, &closest, eps) {
                        cuts[p].push(Cut { seg: k, u: 0.0 });
                        cuts[q].push(Cut { seg: j, u: t });
                    }
                }
            }
        }
    }
}

fn cut_region(region: &Region, closed: bool, cuts: Vec<Vec<Cut>>, eps: f64) -> Vec<Vec<Point2>> {
    region
        .components
        .iter()
        .zip(cuts)
        .flat_map(|(path, path_cuts)| cut_path(path, closed, path_cuts, eps))
        .collect()
}

/// Cuts one path into the sub-paths between consecutive cut locations.
fn cut_path(path: &[Point2], closed: bool, extra: Vec<Cut>, eps: f64) -> Vec<Vec<Point2>> {
    let n = path.len();
    if n < 2 {
        return Vec::new();
    }
    let last_seg = if closed { n - 1 } else { n - 2 };
    let point_at = |c: &Cut| -> Point2 {
        let a = path[c.seg];
        let b = path[(c.seg + 1) % n];
        a + (b - a) * c.u
    };

    let mut cuts: Vec<Cut> = Vec::with_capacity(extra.len() + 2);
    cuts.push(Cut { seg: 0, u: 0.0 });
    cuts.extend(extra.into_iter().map(|c| {
        if c.u > 1.0 - eps && c.seg < last_seg {
            Cut {
                seg: c.seg + 1,
                u: 0.0,
            }
        } else {
            c
        }
    }));
    cuts.push(Cut {
        seg: last_seg,
        u: 1.0,
    });
    cuts.sort_by(|x, y| {
        x.seg
            .cmp(&y.seg)
            .then(x.u.partial_cmp(&y.u).unwrap_or(Ordering::Equal))
    });

    // Keep the last cut of every run of coincident cuts, so the path end survives.
    let mut unique: Vec<(Cut, Point2)> = Vec::with_capacity(cuts.len());
    for cut in cuts {
        let pt = point_at(&cut);
        if let Some(last) = unique.last_mut() {
            if approx_eq(&last.1, &pt, eps) {
                *last = (cut, pt);
                continue;
            }
        }
        unique.push((cut, pt));
    }
    // A closed path needs both its start and end; restore the start if it merged away.
    if closed && unique.len() == 1 {
        unique.insert(0, (Cut { seg: 0, u: 0.0 }, path[0]));
    }

    unique
        .windows(2)
        .filter_map(|pair| {
            let (from, from_pt) = pair[0];
            let (to, to_pt) = pair[1];
            let mut pts = Vec::with_capacity(to.seg.saturating_sub(from.seg) + 2);
            pts.push(from_pt);
            for k in (from.seg + 1)..=to.seg {
                pts.push(path[k % n]);
            }
            pts.push(to_pt);
            let pts = deduplicate(&pts, false, eps);
            (pts.len() >= 2).then_some(pts)
        })
        .collect()
}

/// Splits the components of two regions at their mutual crossings.
///
/// Returns the sub-paths of `a` and of `b`.
#[must_use]
pub fn split_region_at_region_crossings(
    a: &Region,
    b: &Region,
    closed_a: bool,
    closed_b: bool,
    eps: f64,
) -> (Vec<Vec<Point2>>, Vec<Vec<Point2>>) {
    let result = SplitAtCrossings::new(a, b)
        .with_closed(closed_a, closed_b)
        .with_eps(eps)
        .execute();
    (result.a, result.b)
}

/// Splits a single path where it crosses the boundary of `region`.
#[must_use]
pub fn split_path_at_region_crossings(
    path: &[Point2],
    region: &Region,
    closed: bool,
    eps: f64,
) -> Vec<Vec<Point2>> {
    split_region_at_region_crossings(&Region::from(path), region, closed, true, eps).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point2> {
        vec![
            p(x0, y0),
            p(x0 + size, y0),
            p(x0 + size, y0 + size),
            p(x0, y0 + size),
        ]
    }

    #[test]
    fn disjoint_components_stay_whole() {
        let (a, b) = split_region_at_region_crossings(
            &Region::from(square(0.0, 0.0, 1.0)),
            &Region::from(square(5.0, 5.0, 1.0)),
            true,
            true,
            EPSILON,
        );
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        // Closed loop: starts and ends at the first vertex.
        assert_eq!(a[0].len(), 5);
        assert!(approx_eq(&a[0][0], &a[0][4], EPSILON));
    }

    #[test]
    fn overlapping_squares_cut_at_crossings() {
        let (a, b) = split_region_at_region_crossings(
            &Region::from(square(0.0, 0.0, 10.0)),
            &Region::from(square(5.0, 5.0, 10.0)),
            true,
            true,
            EPSILON,
        );
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert!(approx_eq(&a[0][a[0].len() - 1], &p(10.0, 5.0), EPSILON));
        assert!(approx_eq(&a[1][0], &p(10.0, 5.0), EPSILON));
        assert!(approx_eq(&a[1][a[1].len() - 1], &p(5.0, 10.0), EPSILON));
        assert_eq!(b[0], vec![p(5.0, 5.0), p(10.0, 5.0)]);
    }

    #[test]
    fn open_path_through_square() {
        let line = vec![p(-5.0, 5.0), p(15.0, 5.0)];
        let subs =
            split_path_at_region_crossings(&line, &Region::from(square(0.0, 0.0, 10.0)), false, EPSILON);
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0], vec![p(-5.0, 5.0), p(0.0, 5.0)]);
        assert_eq!(subs[1], vec![p(0.0, 5.0), p(10.0, 5.0)]);
        assert_eq!(subs[2], vec![p(10.0, 5.0), p(15.0, 5.0)]);
    }

    #[test]
    fn shared_vertex_between_components_is_a_cut() {
        let region = Region::new(vec![square(0.0, 0.0, 10.0), square(10.0, 10.0, 10.0)]);
        let (a, _) =
            split_region_at_region_crossings(&region, &Region::empty(), true, true, EPSILON);
        // The first square is cut at its start and at the shared corner; the
        // second square already starts there.
        assert_eq!(a.len(), 3);
        assert!(approx_eq(&a[0][a[0].len() - 1], &p(10.0, 10.0), EPSILON));
    }
}
