use crate::error::Result;
use crate::geometry::Region;
use crate::math::EPSILON;

use super::engine::fold_regions;
use super::select::BooleanOp;

/// Computes the boolean union of any number of regions.
#[derive(Debug)]
pub struct Union<'a> {
    regions: &'a [Region],
    eps: f64,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation over `regions`, folded left to right.
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

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns an error if reassembly fails, which happens for invalid inputs.
    pub fn execute(&self) -> Result<Region> {
        fold_regions(self.regions, BooleanOp::Union, self.eps)
    }
}

/// Union of `regions`: every point inside at least one of them.
///
/// # Errors
///
/// See [`Union::execute`].
pub fn union(regions: &[Region], eps: f64) -> Result<Region> {
    Union::new(regions).with_eps(eps).execute()
}
