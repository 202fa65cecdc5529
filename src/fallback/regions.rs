// src/fallback/regions.rs

use crate::domain::Region;

struct RegionSeed {
    id: i64,
    nom: &'static str,
    slug: &'static str,
    description: &'static str,
    couleur: &'static str,
    image_url: &'static str,
}

const REGIONS: [RegionSeed; 8] = [
    RegionSeed {
        id: 1,
        nom: "Abidjan",
        slug: "abidjan",
        description: "Capitale économique",
        couleur: "#E67E22",
        image_url: "https://images.unsplash.com/photo-1620216443425-6cb3145452db?w=600",
    },
    RegionSeed {
        id: 2,
        nom: "Yamoussoukro",
        slug: "yamoussoukro",
        description: "Capitale politique",
        couleur: "#C4A02A",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6b/Basilique_Notre_Dame_de_la_Paix_Yamoussoukro.jpg/800px-Basilique_Notre_Dame_de_la_Paix_Yamoussoukro.jpg",
    },
    RegionSeed {
        id: 3,
        nom: "Bouaké",
        slug: "bouake",
        description: "Deuxième ville",
        couleur: "#1E6B45",
        image_url: "https://images.unsplash.com/photo-1629813295874-5fe5cabc9db7?w=600",
    },
    RegionSeed {
        id: 4,
        nom: "Korhogo",
        slug: "korhogo",
        description: "Nord - Pays Sénoufo",
        couleur: "#8B5C34",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1a/Danse_panth%C3%A8re_de_la_Cote_d%27Ivoire.jpg/800px-Danse_panth%C3%A8re_de_la_Cote_d%27Ivoire.jpg",
    },
    RegionSeed {
        id: 5,
        nom: "Man",
        slug: "man",
        description: "Ouest - Pays Dan",
        couleur: "#9D2235",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/db/Cascade_de_Man_01.jpg/800px-Cascade_de_Man_01.jpg",
    },
    RegionSeed {
        id: 6,
        nom: "Grand-Bassam",
        slug: "grand-bassam",
        description: "Site UNESCO",
        couleur: "#00A884",
        image_url: "https://images.unsplash.com/photo-1629813359654-e818cebd1899?w=600",
    },
    RegionSeed {
        id: 7,
        nom: "Daloa",
        slug: "daloa",
        description: "Centre-Ouest",
        couleur: "#6B8E23",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/52/Cacaoyer_avec_cabosses.jpg/800px-Cacaoyer_avec_cabosses.jpg",
    },
    RegionSeed {
        id: 8,
        nom: "San-Pédro",
        slug: "san-pedro",
        description: "Sud-Ouest",
        couleur: "#4682B4",
        image_url: "https://images.unsplash.com/photo-1598282367503-4f9e31d4b68e?w=600",
    },
];

impl RegionSeed {
    fn to_region(&self) -> Region {
        Region {
            id: self.id,
            nom: self.nom.to_string(),
            slug: self.slug.to_string(),
            description: self.description.to_string(),
            couleur: self.couleur.to_string(),
            image_url: Some(self.image_url.to_string()),
            icone: None,
            latitude: None,
            longitude: None,
            population: None,
            is_active: true,
        }
    }
}

pub fn regions() -> Vec<Region> {
    REGIONS.iter().map(RegionSeed::to_region).collect()
}

pub fn region_by_id(id: i64) -> Option<Region> {
    REGIONS.iter().find(|r| r.id == id).map(RegionSeed::to_region)
}
