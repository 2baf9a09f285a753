use tracing::{debug, trace};

use crate::error::{DegeneracyError, InputError, Result};
use crate::math::polygon_2d::{deduplicate, is_polygon_clockwise, signed_area};
use crate::math::Point2;

use super::corners::{
    chamfer_corner, corner_angle, corner_kind, round_corner, sharp_corner, CornerKind,
};
use super::params::OffsetParams;
use super::segments::{good_segments, shift_segments, ShiftedSegment};

/// Offsets a single path by a signed distance.
///
/// # Algorithm
///
/// 1. Shift every edge sideways by the offset distance.
/// 2. With `check_valid`, drop shifted edges that come closer to the input
///    than the offset distance.
/// 3. Extend consecutive surviving edges to their intersection.
/// 4. Round (`r`) or chamfer (`delta` with `chamfer`) outside corners.
///
/// # Sign Convention
///
/// Positive distances offset to the left of the direction of travel. For
/// closed paths the sign is flipped on counter-clockwise input, so positive
/// always grows the polygon.
#[derive(Debug)]
pub struct PathOffset<'a> {
    path: &'a [Point2],
    params: OffsetParams,
}

impl<'a> PathOffset<'a> {
    #[must_use]
    pub fn new(path: &'a [Point2], params: OffsetParams) -> Self {
        Self { path, params }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `InputError::OffsetDistance` unless exactly one of `r` and `delta` is set
    /// - `InputError::TooFewPoints` for a path of fewer than 2 distinct points
    /// - `DegeneracyError::CollapsedOffset` if validity pruning drops every edge,
    ///   or a closed offset is left with fewer than 3 points or no area
    /// - `DegeneracyError::ParallelCorner` if the path turns back on itself
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let params = &self.params;
        let (distance, rounded) = params.distance()?;
        let eps = params.eps;
        let closed = params.closed;

        let path = deduplicate(self.path, closed, eps);
        if path.len() < 2 {
            return Err(InputError::TooFewPoints {
                what: "offset path",
                min: 2,
                found: path.len(),
            }
            .into());
        }

        let d = if closed && !is_polygon_clockwise(&path) {
            -distance
        } else {
            distance
        };

        let shifted = shift_segments(&path, closed, d, eps)?;
        let good = if params.check_valid {
            good_segments(&path, closed, &shifted, d, params.quality, eps)
        } else {
            vec![true; shifted.len()]
        };
        let (segs, centers): (Vec<ShiftedSegment>, Vec<Point2>) = shifted
            .iter()
            .zip(&path)
            .zip(&good)
            .filter(|(_, keep)| **keep)
            .map(|((seg, pt), _)| (*seg, *pt))
            .unzip();
        trace!(
            edges = shifted.len(),
            kept = segs.len(),
            "offset validity pruning"
        );
        if segs.is_empty() || (closed && segs.len() < 2) {
            return Err(DegeneracyError::CollapsedOffset.into());
        }

        let corner_style = CornerStyle {
            rounded,
            chamfer: !rounded && params.chamfer,
            radius: distance,
            d,
            params,
        };
        let m = segs.len();
        let mut out = Vec::with_capacity(m + 2);
        if closed {
            for i in 0..m {
                let prev = &segs[(i + m - 1) % m];
                out.extend(corner_style.corner(prev, &segs[i], &centers[i], i)?);
            }
        } else {
            out.push(segs[0].start);
            for i in 1..m {
                out.extend(corner_style.corner(&segs[i - 1], &segs[i], &centers[i], i)?);
            }
            out.push(segs[m - 1].end);
        }

        if closed {
            out = deduplicate(&out, true, eps);
            let area = signed_area(&out).abs();
            if out.len() < 3 || area <= eps {
                debug!(points = out.len(), area, "closed offset has no area");
                return Err(DegeneracyError::CollapsedOffset.into());
            }
        }

        debug!(
            input = self.path.len(),
            output = out.len(),
            distance,
            closed,
            "path offset complete"
        );
        Ok(out)
    }
}

/// How outside corners are finished.
struct CornerStyle<'p> {
    rounded: bool,
    chamfer: bool,
    radius: f64,
    d: f64,
    params: &'p OffsetParams,
}

impl CornerStyle<'_> {
    /// Points replacing the input vertex `center` between `prev` and `next`.
    fn corner(
        &self,
        prev: &ShiftedSegment,
        next: &ShiftedSegment,
        center: &Point2,
        index: usize,
    ) -> Result<Vec<Point2>> {
        let sharp = sharp_corner(prev, next, index, self.params.eps)?;
        if !(self.rounded || self.chamfer) || corner_kind(prev, next, &sharp) != CornerKind::Outside
        {
            return Ok(vec![sharp]);
        }
        if self.chamfer {
            return Ok(chamfer_corner(
                center,
                &prev.end,
                &sharp,
                &next.start,
                self.d,
                self.params.eps,
            ));
        }
        let steps = self.arc_points(center, &prev.end, &next.start);
        if steps <= 1 {
            return Ok(vec![sharp]);
        }
        Ok(round_corner(center, &prev.end, &next.start, steps))
    }

    /// Number of arc points for a rounded corner.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn arc_points(&self, center: &Point2, from: &Point2, to: &Point2) -> usize {
        if self.radius.abs() <= self.params.eps {
            return 0;
        }
        let segments = self.params.resolution.segments(self.radius) as f64;
        1 + (segments * corner_angle(center, from, to) / 360.0).floor() as usize
    }
}

/// Offsets `path` with `params`.
///
/// # Errors
///
/// See [`PathOffset::execute`].
pub fn offset_path(path: &[Point2], params: &OffsetParams) -> Result<Vec<Point2>> {
    PathOffset::new(path, params.clone()).execute()
}
