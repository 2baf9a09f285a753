use crate::error::Result;
use crate::geometry::Region;
use crate::math::EPSILON;

use super::engine::fold_regions;
use super::select::BooleanOp;

/// Subtracts every following region from the first one.
#[derive(Debug)]
pub struct Difference<'a> {
    regions: &'a [Region],
    eps: f64,
}

impl<'a> Difference<'a> {
    /// Creates a new `Difference` operation: `regions[0] - regions[1] - ...`.
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

    /// Executes the difference.
    ///
    /// # Errors
    ///
    /// Returns an error if reassembly fails, which happens for invalid inputs.
    pub fn execute(&self) -> Result<Region> {
        fold_regions(self.regions, BooleanOp::Difference, self.eps)
    }
}

/// Points of the first region not inside any of the others.
///
/// # Errors
///
/// See [`Difference::execute`].
pub fn difference(regions: &[Region], eps: f64) -> Result<Region> {
    Difference::new(regions).with_eps(eps).execute()
}
