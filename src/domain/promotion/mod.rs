pub mod entity;
pub mod invariants;

pub use entity::{NewPromotion, Promotion, PromotionType, PromotionUpdate};
pub use invariants::{validate_new_promotion, validate_promotion, validate_promotion_update};
