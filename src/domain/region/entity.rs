use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION_COLOUR: &str = "#1E6B45";

/// An administrative or cultural region of Côte d'Ivoire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,

    pub nom: String,

    /// URL-safe name. Filled from `nom` when the backend omits it.
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    /// Theme colour (`#RRGGBB`). The admin API names it `couleur_theme`.
    #[serde(alias = "couleur_theme", default = "default_colour")]
    pub couleur: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub icone: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub population: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_colour() -> String {
    DEFAULT_REGION_COLOUR.to_string()
}

fn default_active() -> bool {
    true
}

/// Admin payload for creating a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegion {
    pub nom: String,
    pub description: String,
    pub image_url: String,
    pub couleur_theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
}

/// Admin payload for a partial region update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couleur_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
