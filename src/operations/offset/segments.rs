use crate::error::Result;
use crate::math::distance_2d::point_to_path_dist;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::Point2;

/// An edge of the input path translated sideways by the offset distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftedSegment {
    pub start: Point2,
    pub end: Point2,
}

/// Shifts every edge of `path` by `d` along its left normal.
///
/// # Errors
///
/// Returns `InputError::RepeatedPoint` for a zero-length edge.
pub fn shift_segments(path: &[Point2], closed: bool, d: f64, eps: f64) -> Result<Vec<ShiftedSegment>> {
    let n = path.len();
    let count = if closed { n } else { n - 1 };
    (0..count)
        .map(|i| {
            let (a, b) = (&path[i], &path[(i + 1) % n]);
            let shift = left_normal(segment_direction(a, b, i, eps)?) * d;
            Ok(ShiftedSegment {
                start: a + shift,
                end: b + shift,
            })
        })
        .collect()
}

/// Flags the shifted segments that stay at the full offset distance from
/// `path`.
///
/// Each segment is sampled at `quality + 2` positions: the interior
/// fractions `i / (quality + 1)` for `i` in `1..=quality`, then the two
/// endpoints. A segment is good as soon as one sample lies farther than
/// `|d| - eps` from the path.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn good_segments(
    path: &[Point2],
    closed: bool,
    segments: &[ShiftedSegment],
    d: f64,
    quality: usize,
    eps: f64,
) -> Vec<bool> {
    let threshold = d.abs() - eps;
    let denom = (quality + 1) as f64;
    let fractions: Vec<f64> = (1..=quality)
        .map(|i| i as f64 / denom)
        .chain([0.0, 1.0])
        .collect();
    segments
        .iter()
        .map(|seg| {
            fractions.iter().any(|&t| {
                let pt = seg.start + (seg.end - seg.start) * t;
                point_to_path_dist(&pt, path, closed) > threshold
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{InputError, RegionError};
    use crate::math::EPSILON;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn shifts_to_the_left() {
        let path = vec![p(0.0, 0.0), p(4.0, 0.0)];
        let segs = shift_segments(&path, false, 1.5, EPSILON).unwrap();
        assert_eq!(segs.len(), 1);
        assert_relative_eq!(segs[0].start, p(0.0, 1.5), epsilon = 1e-12);
        assert_relative_eq!(segs[0].end, p(4.0, 1.5), epsilon = 1e-12);
    }

    #[test]
    fn closed_path_includes_the_closing_edge() {
        let path = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert_eq!(shift_segments(&path, true, 0.1, EPSILON).unwrap().len(), 3);
    }

    #[test]
    fn zero_length_edge_is_rejected() {
        let path = vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)];
        let err = shift_segments(&path, false, 1.0, EPSILON).unwrap_err();
        assert!(matches!(err, RegionError::Input(InputError::RepeatedPoint(0))));
    }

    #[test]
    fn endpoints_are_sampled_too() {
        let path = vec![p(0.0, 0.0), p(10.0, 3.0), p(10.0, 0.0)];
        // Midpoint and start hug the bottom edge; only the end clears it.
        let long = [ShiftedSegment {
            start: p(0.0, -1.0),
            end: p(20.0, -1.0),
        }];
        assert_eq!(good_segments(&path, true, &long, 2.0, 1, EPSILON), vec![true]);
        assert_eq!(good_segments(&path, true, &long, 2.0, 0, EPSILON), vec![true]);

        let short = [ShiftedSegment {
            start: p(0.0, -1.0),
            end: p(4.0, -1.0),
        }];
        assert_eq!(good_segments(&path, true, &short, 2.0, 3, EPSILON), vec![false]);
    }

    #[test]
    fn inset_pruning_depends_on_depth() {
        // Clockwise rectangles; an inset of 3 fits in the 10x8 one only.
        let tall = vec![p(0.0, 0.0), p(0.0, 8.0), p(10.0, 8.0), p(10.0, 0.0)];
        let segs = shift_segments(&tall, true, -3.0, EPSILON).unwrap();
        assert_eq!(good_segments(&tall, true, &segs, -3.0, 1, EPSILON), vec![true; 4]);

        let flat = vec![p(0.0, 0.0), p(0.0, 4.0), p(10.0, 4.0), p(10.0, 0.0)];
        let segs = shift_segments(&flat, true, -3.0, EPSILON).unwrap();
        assert_eq!(good_segments(&flat, true, &segs, -3.0, 1, EPSILON), vec![false; 4]);
    }
}
