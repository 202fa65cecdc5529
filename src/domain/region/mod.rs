pub mod entity;
pub mod invariants;

pub use entity::{NewRegion, Region, RegionUpdate};
pub use invariants::{normalize_region, slugify, validate_new_region, validate_region};
