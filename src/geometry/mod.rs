pub mod region;

pub use region::{are_regions_equal, is_path, is_region, NestedRegion, Region};
