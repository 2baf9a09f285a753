use std::f64::consts::PI;

use crate::error::{InputError, Result};
use crate::math::EPSILON;

/// Arc resolution used when rounding offset corners.
///
/// Follows the usual `$fn` / `$fa` / `$fs` convention: a fixed segment
/// count for a full circle when `fn_segments > 0`, otherwise the count
/// implied by a maximum angle per segment and a maximum segment length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Fixed number of segments per full circle. `0` disables it.
    pub fn_segments: usize,
    /// Maximum angle per segment, in degrees.
    pub fa: f64,
    /// Maximum segment length.
    pub fs: f64,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            fn_segments: 0,
            fa: 12.0,
            fs: 2.0,
        }
    }
}

impl Resolution {
    /// Number of segments for a full circle of radius `r`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn segments(&self, r: f64) -> usize {
        if self.fn_segments > 0 {
            return self.fn_segments.max(3);
        }
        let r = if r.is_finite() { r.abs() } else { 0.0 };
        (360.0 / self.fa).min(r * 2.0 * PI / self.fs).max(5.0).ceil() as usize
    }
}

/// Parameters of an offset operation.
///
/// Exactly one of `r` (rounded corners) and `delta` (sharp or chamfered
/// corners) must be set; the constructors [`OffsetParams::radius`] and
/// [`OffsetParams::delta`] do that.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetParams {
    /// Offset distance with rounded outside corners.
    pub r: Option<f64>,
    /// Offset distance with sharp outside corners.
    pub delta: Option<f64>,
    /// Cut outside corners flat. Only applies with `delta`.
    pub chamfer: bool,
    /// Treat the path as a closed polygon.
    pub closed: bool,
    /// Drop shifted segments that come closer than the offset distance to
    /// the input path.
    pub check_valid: bool,
    /// Number of interior samples per segment used by `check_valid`, on top
    /// of the two endpoints.
    pub quality: usize,
    pub eps: f64,
    pub resolution: Resolution,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            r: None,
            delta: None,
            chamfer: false,
            closed: true,
            check_valid: true,
            quality: 1,
            eps: EPSILON,
            resolution: Resolution::default(),
        }
    }
}

impl OffsetParams {
    /// Rounded offset by `r`.
    #[must_use]
    pub fn radius(r: f64) -> Self {
        Self {
            r: Some(r),
            ..Self::default()
        }
    }

    /// Pointed offset by `delta`.
    #[must_use]
    pub fn delta(delta: f64) -> Self {
        Self {
            delta: Some(delta),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_chamfer(mut self, chamfer: bool) -> Self {
        self.chamfer = chamfer;
        self
    }

    #[must_use]
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    #[must_use]
    pub fn with_check_valid(mut self, check_valid: bool) -> Self {
        self.check_valid = check_valid;
        self
    }

    #[must_use]
    pub fn with_quality(mut self, quality: usize) -> Self {
        self.quality = quality;
        self
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// The offset distance, and whether corners are rounded.
    ///
    /// # Errors
    ///
    /// Returns `InputError::OffsetDistance` unless exactly one of `r` and
    /// `delta` is set.
    pub fn distance(&self) -> Result<(f64, bool)> {
        match (self.r, self.delta) {
            (Some(r), None) => Ok((r, true)),
            (None, Some(delta)) => Ok((delta, false)),
            _ => Err(InputError::OffsetDistance.into()),
        }
    }

    /// The same parameters with the distance negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            r: self.r.map(|r| -r),
            delta: self.delta.map(|d| -d),
            ..self.clone()
        }
    }
}
