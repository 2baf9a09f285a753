use tracing::debug;

use crate::error::{DegeneracyError, RegionError, Result};
use crate::geometry::Region;
use crate::math::Point2;
use crate::operations::boolean::{difference, union};
use crate::operations::query::RegionParts;

use super::params::OffsetParams;
use super::path_offset::PathOffset;

/// Offsets every component of a region in its own outward sense.
///
/// The region is partitioned into outer boundaries with their holes. Each
/// outer boundary is offset by the distance and each hole by its negation,
/// the hole offsets are subtracted from their outer offset, and the parts
/// are united. A component whose offset collapses completely is dropped.
/// Components are always treated as closed.
#[derive(Debug)]
pub struct RegionOffset<'a> {
    region: &'a Region,
    params: OffsetParams,
}

impl<'a> RegionOffset<'a> {
    #[must_use]
    pub fn new(region: &'a Region, params: OffsetParams) -> Self {
        Self {
            region,
            params: params.with_closed(true),
        }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// Propagates input and degeneracy errors of the component offsets other
    /// than collapse, and assembly errors of the boolean steps.
    pub fn execute(&self) -> Result<Region> {
        self.params.distance()?;
        let eps = self.params.eps;
        let hole_params = self.params.negated();

        let parts = RegionParts::new(self.region).with_eps(eps).execute();
        let mut offset_parts = Vec::with_capacity(parts.len());
        for part in &parts {
            let Some(outer) = offset_component(&part.outer, &self.params)? else {
                continue;
            };
            let mut operands = vec![Region::from(outer)];
            for hole in &part.holes {
                if let Some(hole) = offset_component(hole, &hole_params)? {
                    operands.push(Region::from(hole));
                }
            }
            offset_parts.push(difference(&operands, eps)?);
        }

        let result = union(&offset_parts, eps)?;
        debug!(
            parts = parts.len(),
            components = result.len(),
            "region offset complete"
        );
        Ok(result)
    }
}

/// Offsets one closed component, mapping a collapsed offset to `None`.
fn offset_component(path: &[Point2], params: &OffsetParams) -> Result<Option<Vec<Point2>>> {
    match PathOffset::new(path, params.clone()).execute() {
        Ok(offset) => Ok(Some(offset)),
        Err(RegionError::Degeneracy(DegeneracyError::CollapsedOffset)) => {
            debug!(points = path.len(), "component offset collapsed, dropping it");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Offsets `region` with `params`.
///
/// # Errors
///
/// See [`RegionOffset::execute`].
pub fn offset_region(region: &Region, params: &OffsetParams) -> Result<Region> {
    RegionOffset::new(region, params.clone()).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::math::EPSILON;
    use crate::operations::query::{is_valid_region, point_in_region, region_area};
    use approx::assert_relative_eq;

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
    fn square_grows_to_fourteen() {
        let r = offset_region(&Region::from(square(0.0, 0.0, 10.0)), &OffsetParams::delta(2.0))
            .unwrap();
        assert_eq!(r.len(), 1);
        assert_relative_eq!(region_area(&r, EPSILON), 196.0, epsilon = 1e-9);
    }

    #[test]
    fn growing_shrinks_the_hole() {
        let region = Region::new(vec![square(0.0, 0.0, 20.0), square(5.0, 5.0, 10.0)]);
        let r = offset_region(&region, &OffsetParams::delta(1.0)).unwrap();
        assert_eq!(r.len(), 2);
        assert_relative_eq!(region_area(&r, EPSILON), 22.0 * 22.0 - 8.0 * 8.0, epsilon = 1e-9);
    }

    #[test]
    fn hole_closes_up() {
        let region = Region::new(vec![square(0.0, 0.0, 20.0), square(9.0, 9.0, 2.0)]);
        let r = offset_region(&region, &OffsetParams::delta(2.0)).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(point_in_region(p(10.0, 10.0), &r, EPSILON), 1);
    }

    #[test]
    fn touching_parts_merge_when_grown() {
        let region = Region::new(vec![square(0.0, 0.0, 4.0), square(5.0, 0.0, 4.0)]);
        let r = offset_region(&region, &OffsetParams::delta(1.0)).unwrap();
        assert_eq!(r.len(), 1);
        assert_relative_eq!(region_area(&r, EPSILON), 11.0 * 6.0, epsilon = 1e-9);
    }

    #[test]
    fn shrinking_drops_small_parts() {
        let region = Region::new(vec![square(0.0, 0.0, 10.0), square(20.0, 0.0, 2.0)]);
        let r = offset_region(&region, &OffsetParams::delta(-2.0)).unwrap();
        assert_eq!(r.len(), 1);
        assert_relative_eq!(region_area(&r, EPSILON), 36.0, epsilon = 1e-9);
    }

    #[test]
    fn slivers_are_dropped_not_returned() {
        let region = Region::new(vec![
            vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 4.0), p(0.0, 4.0)],
            square(20.0, 0.0, 10.0),
        ]);
        let r = offset_region(&region, &OffsetParams::delta(-2.0)).unwrap();
        assert_eq!(r.len(), 1);
        assert!(r.iter().all(|c| c.len() >= 3));
        assert!(is_valid_region(&r, EPSILON));
        assert_relative_eq!(region_area(&r, EPSILON), 36.0, epsilon = 1e-9);
    }

    #[test]
    fn missing_distance_is_an_input_error() {
        let err = offset_region(&Region::from(square(0.0, 0.0, 1.0)), &OffsetParams::default())
            .unwrap_err();
        assert!(matches!(err, RegionError::Input(InputError::OffsetDistance)));
    }
}
