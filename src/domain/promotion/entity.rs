use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{timestamps, DomainError};

/// A promoted place, artist or experience (sponsored listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub titre: String,
    pub type_promotion: PromotionType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub texte_complet: Option<String>,
    #[serde(default)]
    pub numero_contact: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,

    /// Popularity score, 0 to 100
    #[serde(default = "default_popularity")]
    pub note_popularite: u8,

    #[serde(default)]
    pub vues: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "timestamps::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_popularity() -> u8 {
    50
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionType {
    Site,
    Mosquee,
    Musique,
    Legende,
    Touriste,
    Talent,
}

impl PromotionType {
    pub const ALL: [PromotionType; 6] = [
        PromotionType::Site,
        PromotionType::Mosquee,
        PromotionType::Musique,
        PromotionType::Legende,
        PromotionType::Touriste,
        PromotionType::Talent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionType::Site => "site",
            PromotionType::Mosquee => "mosquee",
            PromotionType::Musique => "musique",
            PromotionType::Legende => "legende",
            PromotionType::Touriste => "touriste",
            PromotionType::Talent => "talent",
        }
    }
}

impl std::fmt::Display for PromotionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        PromotionType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "promotion type",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPromotion {
    pub titre: String,
    pub type_promotion: PromotionType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texte_complet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    pub note_popularite: u8,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_popularite: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
