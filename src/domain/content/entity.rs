use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{timestamps, DomainError};

/// A piece of cultural heritage published in the catalogue
/// (mask, dish, legend, site, music, ritual...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalContent {
    /// Backend identifier
    pub id: i64,

    /// Display title
    pub titre: String,

    /// Kind of content, drives which category screen shows it
    pub type_contenu: ContentType,

    /// Short summary shown on cards
    #[serde(default)]
    pub description: String,

    /// Long-form text shown on the detail screen
    #[serde(default)]
    pub texte_complet: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub audio_url: Option<String>,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Region the content belongs to (if any)
    #[serde(default)]
    pub region_id: Option<i64>,

    #[serde(default)]
    pub auteur_id: Option<i64>,

    /// Author summary, only present on some endpoints
    #[serde(default)]
    pub auteur: Option<Author>,

    #[serde(default)]
    pub vues: i64,

    #[serde(default)]
    pub likes: i64,

    #[serde(default = "default_published")]
    pub is_published: bool,

    #[serde(default)]
    pub is_featured: bool,

    /// Reserved to premium subscribers
    #[serde(default)]
    pub is_premium: bool,

    /// Locked after too many reports
    #[serde(default)]
    pub is_verrouille: bool,

    #[serde(default)]
    pub nb_signalements: u32,

    #[serde(default, deserialize_with = "timestamps::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nom_complet: Option<String>,
}

/// Kind of cultural content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Masque,
    Gastronomie,
    Legende,
    Site,
    Musique,
    Rituel,
    Conte,
    Danse,
    Art,
}

impl ContentType {
    pub const ALL: [ContentType; 9] = [
        ContentType::Masque,
        ContentType::Gastronomie,
        ContentType::Legende,
        ContentType::Site,
        ContentType::Musique,
        ContentType::Rituel,
        ContentType::Conte,
        ContentType::Danse,
        ContentType::Art,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Masque => "masque",
            ContentType::Gastronomie => "gastronomie",
            ContentType::Legende => "legende",
            ContentType::Site => "site",
            ContentType::Musique => "musique",
            ContentType::Rituel => "rituel",
            ContentType::Conte => "conte",
            ContentType::Danse => "danse",
            ContentType::Art => "art",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "content type",
                value: s.to_string(),
            })
    }
}

impl CulturalContent {
    /// Case-insensitive match on title, description and tags
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.titre.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Published and not locked by moderation
    pub fn is_visible(&self) -> bool {
        self.is_published && !self.is_verrouille
    }
}

/// Payload for a new contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContent {
    pub titre: String,
    pub type_contenu: ContentType,
    pub description: String,
    #[serde(default)]
    pub texte_complet: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
}

impl NewContent {
    pub fn new(titre: impl Into<String>, type_contenu: ContentType, description: impl Into<String>) -> Self {
        Self {
            titre: titre.into(),
            type_contenu,
            description: description.into(),
            texte_complet: String::new(),
            image_url: String::new(),
            audio_url: None,
            video_url: None,
            tags: Vec::new(),
            region_id: None,
        }
    }
}

/// Partial update of an existing contribution. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_contenu: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texte_complet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
}
