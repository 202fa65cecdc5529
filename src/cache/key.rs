// src/cache/key.rs
//
// Structured cache keys. Each variant renders to a distinct `domain:qualifier`
// string, which is what the store persists.

use std::fmt;

use crate::domain::{ContentType, PromotionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    AllContents,
    ContentsByType(ContentType),
    FeaturedContents,
    ContentDetail(i64),
    Recommendations,
    Regions,
    RegionDetail(i64),
    RegionContents(i64),
    Favorites,
    /// `None` is the unfiltered list
    Promotions(Option<PromotionType>),
    FeaturedPromotions,
    PromotionDetail(i64),
    ContributionHistory,
}

impl CacheKey {
    /// Keys that belong to the signed-in account and go away on logout
    pub const SESSION_SCOPED: [CacheKey; 3] = [
        CacheKey::Favorites,
        CacheKey::Recommendations,
        CacheKey::ContributionHistory,
    ];

    pub fn domain(&self) -> &'static str {
        match self {
            CacheKey::AllContents
            | CacheKey::ContentsByType(_)
            | CacheKey::FeaturedContents => "contents",
            CacheKey::ContentDetail(_) => "content",
            CacheKey::Recommendations => "recommendations",
            CacheKey::Regions => "regions",
            CacheKey::RegionDetail(_) | CacheKey::RegionContents(_) => "region",
            CacheKey::Favorites => "favorites",
            CacheKey::Promotions(_) | CacheKey::FeaturedPromotions => "promotions",
            CacheKey::PromotionDetail(_) => "promotion",
            CacheKey::ContributionHistory => "contributions",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let domain = self.domain();
        match self {
            CacheKey::AllContents => write!(f, "{domain}:all"),
            CacheKey::ContentsByType(t) => write!(f, "{domain}:type:{}", t.as_str()),
            CacheKey::FeaturedContents => write!(f, "{domain}:featured"),
            CacheKey::ContentDetail(id) => write!(f, "{domain}:{id}"),
            CacheKey::Recommendations => write!(f, "{domain}:mine"),
            CacheKey::Regions => write!(f, "{domain}:all"),
            CacheKey::RegionDetail(id) => write!(f, "{domain}:{id}"),
            CacheKey::RegionContents(id) => write!(f, "{domain}:{id}:contents"),
            CacheKey::Favorites => write!(f, "{domain}:mine"),
            CacheKey::Promotions(None) => write!(f, "{domain}:all"),
            CacheKey::Promotions(Some(t)) => write!(f, "{domain}:type:{}", t.as_str()),
            CacheKey::FeaturedPromotions => write!(f, "{domain}:featured"),
            CacheKey::PromotionDetail(id) => write!(f, "{domain}:{id}"),
            CacheKey::ContributionHistory => write!(f, "{domain}:mine"),
        }
    }
}
