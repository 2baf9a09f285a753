mod assemble;
mod classify;
mod difference;
mod engine;
mod exclusive_or;
mod intersection;
mod select;
pub(crate) mod split;
mod union;

pub use assemble::assemble_path_fragments;
pub use classify::{classify_subpath, SubpathTag, SIDE_PROBE_SCALE};
pub use difference::{difference, Difference};
pub use engine::boolean_execute;
pub use exclusive_or::{exclusive_or, ExclusiveOr};
pub use intersection::{intersection, Intersection};
pub use select::{should_keep_fragment, BooleanOp};
pub use split::{
    split_path_at_region_crossings, split_region_at_region_crossings, RegionSource,
    SplitAtCrossings, SplitResult,
};
pub use union::{union, Union};
