use super::entity::{ContentUpdate, CulturalContent, NewContent};
use crate::domain::{DomainError, DomainResult};

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 200;

/// Validates a content record received from the backend
pub fn validate_content(content: &CulturalContent) -> DomainResult<()> {
    if content.id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Content id must be positive, got {}",
            content.id
        )));
    }
    if content.titre.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Content title cannot be empty".to_string(),
        ));
    }
    if content.vues < 0 || content.likes < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Content {} has negative counters",
            content.id
        )));
    }
    if let Some(region_id) = content.region_id {
        validate_region_ref(region_id)?;
    }
    Ok(())
}

/// Validates a contribution before it is sent
pub fn validate_new_content(content: &NewContent) -> DomainResult<()> {
    validate_title(&content.titre)?;
    if content.description.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Description cannot be empty".to_string(),
        ));
    }
    if let Some(region_id) = content.region_id {
        validate_region_ref(region_id)?;
    }
    Ok(())
}

pub fn validate_content_update(update: &ContentUpdate) -> DomainResult<()> {
    if let Some(titre) = &update.titre {
        validate_title(titre)?;
    }
    if let Some(description) = &update.description {
        if description.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Description cannot be empty".to_string(),
            ));
        }
    }
    if let Some(region_id) = update.region_id {
        validate_region_ref(region_id)?;
    }
    Ok(())
}

fn validate_title(titre: &str) -> DomainResult<()> {
    let len = titre.trim().chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
        return Err(DomainError::InvariantViolation(format!(
            "Title must be between {} and {} characters",
            TITLE_MIN, TITLE_MAX
        )));
    }
    Ok(())
}

fn validate_region_ref(region_id: i64) -> DomainResult<()> {
    if region_id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Region id must be positive, got {}",
            region_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentType;

    #[test]
    fn test_valid_new_content() {
        let content = NewContent::new("Le Masque Gouro", ContentType::Masque, "Masque cérémoniel");
        assert!(validate_new_content(&content).is_ok());
    }

    #[test]
    fn test_short_title_fails() {
        let content = NewContent::new("Ab", ContentType::Masque, "Masque");
        assert!(validate_new_content(&content).is_err());
    }

    #[test]
    fn test_blank_description_fails() {
        let content = NewContent::new("Sauce Graine", ContentType::Gastronomie, "   ");
        assert!(validate_new_content(&content).is_err());
    }

    #[test]
    fn test_update_with_bad_region_fails() {
        let update = ContentUpdate {
            region_id: Some(0),
            ..Default::default()
        };
        assert!(validate_content_update(&update).is_err());
        assert!(validate_content_update(&ContentUpdate::default()).is_ok());
    }
}
