use super::entity::{NewPromotion, Promotion, PromotionUpdate};
use crate::domain::{DomainError, DomainResult};

const MAX_POPULARITY: u8 = 100;

pub fn validate_promotion(promotion: &Promotion) -> DomainResult<()> {
    validate_title(&promotion.titre)?;
    validate_popularity(promotion.note_popularite)?;
    if promotion.vues < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Promotion {} has negative views",
            promotion.id
        )));
    }
    Ok(())
}

pub fn validate_new_promotion(promotion: &NewPromotion) -> DomainResult<()> {
    validate_title(&promotion.titre)?;
    validate_popularity(promotion.note_popularite)
}

pub fn validate_promotion_update(update: &PromotionUpdate) -> DomainResult<()> {
    if let Some(titre) = &update.titre {
        validate_title(titre)?;
    }
    update.note_popularite.map_or(Ok(()), validate_popularity)
}

fn validate_title(titre: &str) -> DomainResult<()> {
    if titre.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Promotion title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_popularity(note: u8) -> DomainResult<()> {
    if note > MAX_POPULARITY {
        return Err(DomainError::InvariantViolation(format!(
            "Popularity {} exceeds {}",
            note, MAX_POPULARITY
        )));
    }
    Ok(())
}
