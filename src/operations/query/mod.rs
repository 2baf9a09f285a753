mod area;
mod is_valid;
mod parts;
mod point_in;

pub use area::{region_area, region_centroid, RegionArea};
pub use is_valid::{is_path_simple, is_region_simple, is_valid_region, IsRegionSimple, IsValidRegion};
pub use parts::{region_parts, RegionPart, RegionParts};
pub use point_in::{point_in_polygon, point_in_region, Containment, PointInPolygon, PointInRegion};
