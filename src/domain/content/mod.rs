pub mod entity;
pub mod invariants;

pub use entity::{Author, ContentType, ContentUpdate, CulturalContent, NewContent};
pub use invariants::{validate_content, validate_content_update, validate_new_content};
