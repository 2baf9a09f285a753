use crate::error::Result;
use crate::geometry::Region;
use crate::math::EPSILON;

use super::engine::fold_regions;
use super::select::BooleanOp;

/// Computes the symmetric difference of any number of regions.
#[derive(Debug)]
pub struct ExclusiveOr<'a> {
    regions: &'a [Region],
    eps: f64,
}

impl<'a> ExclusiveOr<'a> {
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

    /// Executes the symmetric difference.
    ///
    /// # Errors
    ///
    /// Returns an error if reassembly fails, which happens for invalid inputs.
    pub fn execute(&self) -> Result<Region> {
        fold_regions(self.regions, BooleanOp::ExclusiveOr, self.eps)
    }
}

/// Points inside an odd number of `regions`.
///
/// # Errors
///
/// See [`ExclusiveOr::execute`].
pub fn exclusive_or(regions: &[Region], eps: f64) -> Result<Region> {
    ExclusiveOr::new(regions).with_eps(eps).execute()
}
