use crate::geometry::Region;
use crate::math::polygon_2d::{polygon_centroid, signed_area};
use crate::math::{Point2, EPSILON};

use super::parts::RegionParts;

/// Computes the area of a region under the even-odd rule.
///
/// The region is partitioned first so that outer boundaries are clockwise and
/// holes counter-clockwise; the signed areas are then summed with clockwise
/// counted positive, which subtracts every hole from its outer boundary.
#[derive(Debug)]
pub struct RegionArea<'a> {
    region: &'a Region,
    eps: f64,
}

impl<'a> RegionArea<'a> {
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
    pub fn execute(&self) -> f64 {
        RegionParts::new(self.region)
            .with_eps(self.eps)
            .execute()
            .iter()
            .flat_map(|part| std::iter::once(&part.outer).chain(&part.holes))
            .map(|poly| -signed_area(poly))
            .sum()
    }

    /// Area-weighted centroid of the region, `None` when the area is zero.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        let mut total = 0.0;
        let mut acc = nalgebra::Vector2::zeros();
        for part in RegionParts::new(self.region).with_eps(self.eps).execute() {
            for poly in std::iter::once(&part.outer).chain(&part.holes) {
                let weight = -signed_area(poly);
                if let Some(c) = polygon_centroid(poly) {
                    acc += c.coords * weight;
                    total += weight;
                }
            }
        }
        (total.abs() > self.eps).then(|| Point2::from(acc / total))
    }
}

/// Area of `region`: outer boundaries minus holes.
#[must_use]
pub fn region_area(region: &Region, eps: f64) -> f64 {
    RegionArea::new(region).with_eps(eps).execute()
}

/// Area-weighted centroid of `region`.
#[must_use]
pub fn region_centroid(region: &Region, eps: f64) -> Option<Point2> {
    RegionArea::new(region).with_eps(eps).centroid()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_with_square_hole() {
        let region = Region::new(vec![
            vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)],
            vec![p(2.0, 2.0), p(2.0, 8.0), p(8.0, 8.0), p(8.0, 2.0)],
        ]);
        assert_relative_eq!(region_area(&region, EPSILON), 64.0, epsilon = 1e-9);
    }

    #[test]
    fn area_ignores_input_winding() {
        let cw = Region::from(vec![p(0.0, 0.0), p(0.0, 3.0), p(2.0, 3.0), p(2.0, 0.0)]);
        let ccw = Region::from(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 3.0), p(0.0, 3.0)]);
        assert_relative_eq!(region_area(&cw, EPSILON), 6.0, epsilon = 1e-12);
        assert_relative_eq!(region_area(&ccw, EPSILON), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_region_has_no_area() {
        assert!(region_area(&Region::empty(), EPSILON).abs() < EPSILON);
        assert!(region_centroid(&Region::empty(), EPSILON).is_none());
    }

    #[test]
    fn centroid_accounts_for_holes() {
        // 10x10 square with a 4x4 hole in its right half.
        let region = Region::new(vec![
            vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)],
            vec![p(6.0, 3.0), p(10.0 - 0.5, 3.0), p(9.5, 7.0), p(6.0, 7.0)],
        ]);
        let c = region_centroid(&region, EPSILON).unwrap();
        assert!(c.x < 5.0, "hole on the right should pull the centroid left: {c}");
        assert_relative_eq!(c.y, 5.0, epsilon = 1e-9);
    }
}
