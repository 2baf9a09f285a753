use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::Region;
use crate::math::Point2;

use super::assemble::assemble_path_fragments;
use super::classify::classify_subpath;
use super::select::{should_keep_fragment, BooleanOp};
use super::split::{RegionSource, SplitAtCrossings};

/// Executes a boolean operation on two regions.
///
/// Orchestrates the full pipeline: splitting at crossings, classification,
/// selection, and reassembly.
///
/// # Errors
///
/// Returns `AssemblyError::OpenChain` if the kept sub-paths do not close
/// into polygons, which happens for invalid input regions.
pub fn boolean_execute(a: &Region, b: &Region, op: BooleanOp, eps: f64) -> Result<Region> {
    // Step 1: bounding box early-out
    let overlap = match (Aabb::of(a), Aabb::of(b)) {
        (Some(box_a), Some(box_b)) => box_a.overlaps(&box_b, eps),
        _ => false,
    };
    if !overlap {
        return Ok(handle_disjoint(a, b, op));
    }

    // Step 2: cut both boundaries at every crossing
    let split = SplitAtCrossings::new(a, b).with_eps(eps).execute();

    // Step 3: classify and select
    let mut kept: Vec<Vec<Point2>> = Vec::new();
    for (source, subpaths, own, other) in [
        (RegionSource::A, split.a, a, b),
        (RegionSource::B, split.b, b, a),
    ] {
        for sub in subpaths {
            let tag = classify_subpath(&sub, own, other, eps);
            let keep = should_keep_fragment(source, tag, op);
            trace!(?source, ?tag, keep, points = sub.len(), "classified sub-path");
            if keep {
                kept.push(sub);
            }
        }
    }

    // Step 4: reassemble
    let kept_count = kept.len();
    let polygons = assemble_path_fragments(kept, eps)?;
    debug!(
        ?op,
        kept = kept_count,
        components = polygons.len(),
        "boolean operation complete"
    );
    Ok(Region::new(polygons))
}

/// Folds `op` over `regions` from left to right.
///
/// A single region is returned as is; no regions give the empty region.
///
/// # Errors
///
/// Propagates the first error of any pairwise step.
pub fn fold_regions(regions: &[Region], op: BooleanOp, eps: f64) -> Result<Region> {
    match regions {
        [] => Ok(Region::empty()),
        [first, rest @ ..] => rest
            .iter()
            .try_fold(first.clone(), |acc, region| boolean_execute(&acc, region, op, eps)),
    }
}

/// Axis-aligned bounding box.
#[derive(Debug)]
struct Aabb {
    min: Point2,
    max: Point2,
}

impl Aabb {
    /// Bounding box of every vertex of `region`, `None` if it has none.
    fn of(region: &Region) -> Option<Self> {
        let mut points = region.components.iter().flatten();
        let first = *points.next()?;
        Some(points.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        ))
    }

    fn overlaps(&self, other: &Self, eps: f64) -> bool {
        self.min.x <= other.max.x + eps
            && self.max.x >= other.min.x - eps
            && self.min.y <= other.max.y + eps
            && self.max.y >= other.min.y - eps
    }
}

/// Result of `op` when the bounding boxes of `a` and `b` do not meet.
fn handle_disjoint(a: &Region, b: &Region, op: BooleanOp) -> Region {
    match op {
        BooleanOp::Union | BooleanOp::ExclusiveOr => a
            .components
            .iter()
            .chain(&b.components)
            .cloned()
            .collect(),
        BooleanOp::Difference => a.clone(),
        BooleanOp::Intersection => Region::empty(),
    }
}
