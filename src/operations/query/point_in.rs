use crate::geometry::Region;
use crate::math::distance_2d::point_on_segment;
use crate::math::{approx_eq, Point2, EPSILON};

/// Classification of a point relative to a polygon or region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Outside,
    OnBoundary,
    Inside,
}

impl Containment {
    /// The `-1 / 0 / +1` encoding used by the nested-data pipeline.
    #[must_use]
    pub fn signum(self) -> i8 {
        match self {
            Self::Outside => -1,
            Self::OnBoundary => 0,
            Self::Inside => 1,
        }
    }
}

/// Classifies a point against a single closed polygon.
#[derive(Debug)]
pub struct PointInPolygon<'a> {
    point: Point2,
    polygon: &'a [Point2],
    eps: f64,
}

impl<'a> PointInPolygon<'a> {
    #[must_use]
    pub fn new(point: Point2, polygon: &'a [Point2]) -> Self {
        Self {
            point,
            polygon,
            eps: EPSILON,
        }
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Boundary test first, then an even-odd crossing count along +x with
    /// vertex heights snapped by `eps`.
    #[must_use]
    pub fn execute(&self) -> Containment {
        let poly = self.polygon;
        let n = poly.len();
        let eps = self.eps;
        if n == 0 {
            return Containment::Outside;
        }
        if n == 1 {
            return if approx_eq(&self.point, &poly[0], eps) {
                Containment::OnBoundary
            } else {
                Containment::Outside
            };
        }

        for i in 0..n {
            let a = &poly[i];
            let b = &poly[(i + 1) % n];
            if !approx_eq(a, b, eps) && point_on_segment(&self.point, a, b, eps) {
                return Containment::OnBoundary;
            }
        }

        let mut crossings = 0usize;
        for i in 0..n {
            let p0 = poly[i] - self.point;
            let p1 = poly[(i + 1) % n] - self.point;
            let straddles = (p1.y > eps && p0.y <= eps) || (p1.y <= eps && p0.y > eps);
            if straddles && p0.x - p0.y * (p1.x - p0.x) / (p1.y - p0.y) > -eps {
                crossings += 1;
            }
        }
        if crossings % 2 == 1 {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }
}

/// Classifies a point against a region under the even-odd rule.
#[derive(Debug)]
pub struct PointInRegion<'a> {
    point: Point2,
    region: &'a Region,
    eps: f64,
}

impl<'a> PointInRegion<'a> {
    #[must_use]
    pub fn new(point: Point2, region: &'a Region) -> Self {
        Self {
            point,
            region,
            eps: EPSILON,
        }
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Returns `OnBoundary` as soon as any component boundary holds the
    /// point; otherwise `Inside` iff an odd number of components contain it.
    #[must_use]
    pub fn execute(&self) -> Containment {
        let mut inside = 0usize;
        for component in self.region.iter() {
            match PointInPolygon::new(self.point, component)
                .with_eps(self.eps)
                .execute()
            {
                Containment::OnBoundary => return Containment::OnBoundary,
                Containment::Inside => inside += 1,
                Containment::Outside => {}
            }
        }
        if inside % 2 == 1 {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }
}

/// Returns `-1` outside, `0` on the boundary, `+1` inside `polygon`.
#[must_use]
pub fn point_in_polygon(point: Point2, polygon: &[Point2], eps: f64) -> i8 {
    PointInPolygon::new(point, polygon)
        .with_eps(eps)
        .execute()
        .signum()
}

/// Returns `-1` outside, `0` on the boundary, `+1` inside `region`.
#[must_use]
pub fn point_in_region(point: Point2, region: &Region, eps: f64) -> i8 {
    PointInRegion::new(point, region)
        .with_eps(eps)
        .execute()
        .signum()
}
