//! Planar polygon regions under the even-odd rule: boolean set operations,
//! offsetting with rounded or chamfered corners, validity checks and
//! decomposition into outer boundaries with holes.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{AssemblyError, DegeneracyError, InputError, RegionError, Result};
pub use geometry::{are_regions_equal, is_path, is_region, NestedRegion, Region};
pub use math::{Point2, Vector2, EPSILON};
pub use operations::boolean::{
    difference, exclusive_or, intersection, split_path_at_region_crossings,
    split_region_at_region_crossings, union, BooleanOp, Difference, ExclusiveOr, Intersection,
    SplitAtCrossings, SubpathTag, Union,
};
pub use operations::offset::{
    offset_path, offset_region, OffsetParams, PathOffset, RegionOffset, Resolution,
};
pub use operations::query::{
    is_path_simple, is_region_simple, is_valid_region, point_in_polygon, point_in_region,
    region_area, region_centroid, region_parts, Containment, IsRegionSimple, IsValidRegion,
    PointInPolygon, PointInRegion, RegionArea, RegionPart, RegionParts,
};
