use super::entity::{NewRegion, Region};
use crate::domain::{DomainError, DomainResult};

/// Validates all Region invariants
pub fn validate_region(region: &Region) -> DomainResult<()> {
    if region.nom.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Region name cannot be empty".to_string(),
        ));
    }
    validate_colour(&region.couleur)?;
    validate_coordinates(region.latitude, region.longitude)?;
    Ok(())
}

pub fn validate_new_region(region: &NewRegion) -> DomainResult<()> {
    if region.nom.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Region name cannot be empty".to_string(),
        ));
    }
    validate_colour(&region.couleur_theme)?;
    validate_coordinates(region.latitude, region.longitude)
}

/// Fills derived fields the backend may leave out.
pub fn normalize_region(mut region: Region) -> Region {
    if region.slug.trim().is_empty() {
        region.slug = slugify(&region.nom);
    }
    region.couleur = region.couleur.to_uppercase();
    region
}

/// `Grand-Bassam` -> `grand-bassam`, `San-Pédro` -> `san-pedro`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars().flat_map(|c| c.to_lowercase()) {
        let folded = match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        };
        if folded.is_ascii_alphanumeric() {
            slug.push(folded);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Colours are `#RRGGBB`
fn validate_colour(colour: &str) -> DomainResult<()> {
    let valid = colour.len() == 7
        && colour.starts_with('#')
        && colour[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(DomainError::InvariantViolation(format!(
            "Invalid theme colour {:?}",
            colour
        )));
    }
    Ok(())
}

fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> DomainResult<()> {
    if let Some(lat) = latitude {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvariantViolation(format!(
                "Latitude {} out of range",
                lat
            )));
        }
    }
    if let Some(lon) = longitude {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvariantViolation(format!(
                "Longitude {} out of range",
                lon
            )));
        }
    }
    Ok(())
}
