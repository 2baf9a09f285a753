use crate::error::{InputError, Result};
use crate::math::polygon_2d::deduplicate;
use crate::math::{approx_eq, cross, Point2};

/// Untyped nested numeric form of a region, as exchanged with the external
/// mesh pipeline: paths of points of two coordinates.
pub type NestedRegion = Vec<Vec<Vec<f64>>>;

/// A set of closed polygon components interpreted by the even-odd rule.
///
/// A point belongs to the region iff it lies inside an odd number of
/// components, so an outer boundary with one nested boundary is an annulus.
/// Components are implicitly closed: the last point connects back to the
/// first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub components: Vec<Vec<Point2>>,
}

impl Region {
    /// Creates a region from its components.
    #[must_use]
    pub fn new(components: Vec<Vec<Point2>>) -> Self {
        Self { components }
    }

    /// The empty region.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Total number of vertices over all components.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    /// Iterates over the components as point slices.
    pub fn iter(&self) -> impl Iterator<Item = &[Point2]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// Builds a region from the nested numeric form.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Dimension` if a point does not have exactly two
    /// coordinates, `InputError::TooFewPoints` for an empty path and
    /// `InputError::Malformed` for non-finite coordinates.
    pub fn from_nested(nested: &[Vec<Vec<f64>>]) -> Result<Self> {
        let mut components = Vec::with_capacity(nested.len());
        for (path_idx, path) in nested.iter().enumerate() {
            components.push(path_from_nested(path, path_idx)?);
        }
        Ok(Self { components })
    }

    /// Converts the region to the nested numeric form.
    #[must_use]
    pub fn to_nested(&self) -> NestedRegion {
        self.components
            .iter()
            .map(|path| path.iter().map(|p| vec![p.x, p.y]).collect())
            .collect()
    }
}

impl From<Vec<Point2>> for Region {
    /// A single polygon is a one-component region.
    fn from(polygon: Vec<Point2>) -> Self {
        Self {
            components: vec![polygon],
        }
    }
}

impl From<&[Point2]> for Region {
    fn from(polygon: &[Point2]) -> Self {
        Self::from(polygon.to_vec())
    }
}

impl FromIterator<Vec<Point2>> for Region {
    fn from_iter<I: IntoIterator<Item = Vec<Point2>>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

/// Converts one nested path to points.
///
/// # Errors
///
/// Returns an `InputError` for empty paths, wrong dimensionality or
/// non-finite coordinates.
pub fn path_from_nested(path: &[Vec<f64>], path_idx: usize) -> Result<Vec<Point2>> {
    if path.is_empty() {
        return Err(InputError::TooFewPoints {
            what: "path",
            min: 1,
            found: 0,
        }
        .into());
    }
    let mut points = Vec::with_capacity(path.len());
    for (index, coords) in path.iter().enumerate() {
        let [x, y] = coords.as_slice() else {
            return Err(InputError::Dimension {
                path: path_idx,
                index,
                found: coords.len(),
            }
            .into());
        };
        if !x.is_finite() || !y.is_finite() {
            return Err(InputError::Malformed(format!(
                "point {index} of path {path_idx} is not finite"
            ))
            .into());
        }
        points.push(Point2::new(*x, *y));
    }
    Ok(points)
}

/// Shape test for a nested path: non-empty, every point two finite numbers.
#[must_use]
pub fn is_path(path: &[Vec<f64>]) -> bool {
    !path.is_empty()
        && path
            .iter()
            .all(|p| p.len() == 2 && p.iter().all(|c| c.is_finite()))
}

/// Shape test for a nested region: a list of paths.
///
/// This only checks the shape of the data, not geometric validity; see
/// [`crate::operations::query::IsValidRegion`] for that.
#[must_use]
pub fn is_region(nested: &[Vec<Vec<f64>>]) -> bool {
    nested.iter().all(|path| is_path(path))
}

/// Component-set equality ignoring component order, start vertex and winding.
///
/// Repeated and collinear vertices are removed before comparing.
#[must_use]
pub fn are_regions_equal(a: &Region, b: &Region, eps: f64) -> bool {
    let canon_a: Vec<Vec<Point2>> = a.iter().map(|c| simplify_polygon(c, eps)).collect();
    let canon_b: Vec<Vec<Point2>> = b.iter().map(|c| simplify_polygon(c, eps)).collect();
    if canon_a.len() != canon_b.len() {
        return false;
    }
    let mut used = vec![false; canon_b.len()];
    for poly in &canon_a {
        let found = canon_b
            .iter()
            .enumerate()
            .find(|(j, other)| !used[*j] && are_polygons_equal(poly, other, eps));
        match found {
            Some((j, _)) => used[j] = true,
            None => return false,
        }
    }
    true
}

/// Closed-polygon equality ignoring start vertex and direction.
#[must_use]
pub fn are_polygons_equal(a: &[Point2], b: &[Point2], eps: f64) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    b.iter()
        .enumerate()
        .filter(|(_, q)| approx_eq(&a[0], q, eps))
        .any(|(k, _)| {
            let forward = (0..n).all(|i| approx_eq(&a[i], &b[(k + i) % n], eps));
            let backward = (0..n).all(|i| approx_eq(&a[i], &b[(k + n - i) % n], eps));
            forward || backward
        })
}

/// Removes repeated points and vertices lying on the line through their
/// neighbours.
fn simplify_polygon(points: &[Point2], eps: f64) -> Vec<Point2> {
    let mut pts = deduplicate(points, true, eps);
    let mut changed = true;
    while changed && pts.len() > 3 {
        changed = false;
        let n = pts.len();
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            let chord = next - prev;
            let len = chord.norm();
            if len > eps && cross(&(pts[i] - prev), &chord).abs() <= eps * len {
                pts.remove(i);
                changed = true;
                break;
            }
        }
    }
    pts
}
