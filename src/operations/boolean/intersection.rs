use crate::error::Result;
use crate::geometry::Region;
use crate::math::EPSILON;

use super::engine::fold_regions;
use super::select::BooleanOp;

/// Computes the boolean intersection of any number of regions.
#[derive(Debug)]
pub struct Intersection<'a> {
    regions: &'a [Region],
    eps: f64,
}

impl<'a> Intersection<'a> {
    #[must_use]
    pub fn new(regions: &'a [Region]) -> Self {
        Self {
            regions,
            eps: EPSILON,
        }
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if reassembly fails, which happens for invalid inputs.
    pub fn execute(&self) -> Result<Region> {
        fold_regions(self.regions, BooleanOp::Intersection, self.eps)
    }
}

/// Points inside every one of `regions`.
///
/// # Errors
///
/// See [`Intersection::execute`].
pub fn intersection(regions: &[Region], eps: f64) -> Result<Region> {
    Intersection::new(regions).with_eps(eps).execute()
}
