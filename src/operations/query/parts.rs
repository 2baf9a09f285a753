use tracing::debug;

use crate::geometry::Region;
use crate::math::polygon_2d::{ccw_polygon, clockwise_polygon};
use crate::math::{Point2, EPSILON};

use super::point_in::{Containment, PointInPolygon};

/// One connected piece of a region: an outer boundary with its direct holes.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPart {
    /// Outer boundary, wound clockwise.
    pub outer: Vec<Point2>,
    /// Holes nested directly inside `outer`, wound counter-clockwise.
    pub holes: Vec<Vec<Point2>>,
}

impl RegionPart {
    /// Converts the part back into a region `[outer, holes...]`.
    #[must_use]
    pub fn to_region(&self) -> Region {
        std::iter::once(self.outer.clone())
            .chain(self.holes.iter().cloned())
            .collect()
    }
}

/// Decomposes a region into connected parts by nesting level.
///
/// The nesting level of a component is the number of other components whose
/// interior holds its sample point (the midpoint of its first edge). Even
/// levels are outer boundaries; each takes as holes the components one level
/// deeper whose sample point it contains.
#[derive(Debug)]
pub struct RegionParts<'a> {
    region: &'a Region,
    eps: f64,
}

impl<'a> RegionParts<'a> {
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
    pub fn execute(&self) -> Vec<RegionPart> {
        let components = &self.region.components;
        let n = components.len();

        // inside[i][j]: component j contains the sample point of component i.
        let inside: Vec<Vec<bool>> = components
            .iter()
            .enumerate()
            .map(|(i, comp)| {
                let sample = sample_point(comp);
                (0..n)
                    .map(|j| {
                        i != j
                            && PointInPolygon::new(sample, &components[j])
                                .with_eps(self.eps)
                                .execute()
                                == Containment::Inside
                    })
                    .collect()
            })
            .collect();
        let level: Vec<usize> = inside
            .iter()
            .map(|row| row.iter().filter(|&&b| b).count())
            .collect();

        let parts: Vec<RegionPart> = (0..n)
            .filter(|&i| level[i] % 2 == 0)
            .map(|i| RegionPart {
                outer: clockwise_polygon(&components[i]),
                holes: (0..n)
                    .filter(|&j| level[j] == level[i] + 1 && inside[j][i])
                    .map(|j| ccw_polygon(&components[j]))
                    .collect(),
            })
            .collect();
        debug!(components = n, parts = parts.len(), "partitioned region");
        parts
    }
}

/// Midpoint of the first edge, or the lone point of a one-point path.
fn sample_point(component: &[Point2]) -> Point2 {
    match component {
        [] => Point2::origin(),
        [only] => *only,
        [a, b, ..] => nalgebra::center(a, b),
    }
}

/// Decomposes `region` into connected parts of one outer boundary plus holes.
#[must_use]
pub fn region_parts(region: &Region, eps: f64) -> Vec<RegionPart> {
    RegionParts::new(region).with_eps(eps).execute()
}
