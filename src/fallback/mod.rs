// src/fallback/mod.rs
//
// Static datasets, the last tier of every resolution. Never persisted.

pub mod contents;
pub mod promotions;
pub mod regions;

pub use contents::{
    content_by_id, contents, contents_by_ids, contents_by_region, contents_by_type,
    featured_contents,
};
pub use promotions::{featured_promotions, promotion_by_id, promotions, promotions_by_type};
pub use regions::{region_by_id, regions};
