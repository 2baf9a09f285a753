use super::classify::SubpathTag;
use super::split::RegionSource;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
    ExclusiveOr,
}

impl BooleanOp {
    /// Tags of sub-paths kept from each operand, as `(from A, from B)`.
    #[must_use]
    pub fn keep_tags(self) -> (&'static [SubpathTag], &'static [SubpathTag]) {
        use SubpathTag::{Inside, OppositeSide, Outside, SameSide};
        match self {
            Self::Union => (&[Outside, SameSide], &[Outside]),
            Self::Difference => (&[Outside, OppositeSide], &[Inside]),
            Self::Intersection => (&[Inside, SameSide], &[Inside]),
            Self::ExclusiveOr => (&[Inside, Outside], &[Inside, Outside]),
        }
    }
}

/// Determines whether a sub-path should be kept based on its tag relative to
/// the other region and the boolean operation.
///
/// | Sub-path | Union | Difference (A-B) | Intersection | Exclusive or |
/// |----------|-------|------------------|--------------|--------------|
/// | A outside B | keep | keep | discard | keep |
/// | A inside B | discard | discard | keep | keep |
/// | A same side | keep | discard | keep | discard |
/// | A opposite side | discard | keep | discard | discard |
/// | B outside A | keep | discard | discard | keep |
/// | B inside A | discard | keep | keep | keep |
/// | B on boundary | discard | discard | discard | discard |
///
/// Shared edges are only ever contributed by A.
#[must_use]
pub fn should_keep_fragment(source: RegionSource, tag: SubpathTag, op: BooleanOp) -> bool {
    let (from_a, from_b) = op.keep_tags();
    match source {
        RegionSource::A => from_a.contains(&tag),
        RegionSource::B => from_b.contains(&tag),
    }
}
