mod corners;
mod params;
mod path_offset;
mod region_offset;
mod segments;

pub use corners::CornerKind;
pub use params::{OffsetParams, Resolution};
pub use path_offset::{offset_path, PathOffset};
pub use region_offset::{offset_region, RegionOffset};
