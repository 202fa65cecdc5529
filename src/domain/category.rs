// src/domain/category.rs
//
// Browsable categories. One entry per category screen.

use serde::Serialize;

use crate::domain::content::ContentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub nom: &'static str,
    pub sous_titre: &'static str,
    pub type_contenu: ContentType,
    pub texte_vide: &'static str,
    pub sous_texte_vide: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "masques",
        nom: "Masques Sacrés",
        sous_titre: "Découvrez les masques traditionnels ivoiriens",
        type_contenu: ContentType::Masque,
        texte_vide: "Aucun masque enregistré",
        sous_texte_vide: "Partagez les masques traditionnels !",
    },
    Category {
        id: "gastronomie",
        nom: "Gastronomie",
        sous_titre: "Savourez les délices de la cuisine ivoirienne",
        type_contenu: ContentType::Gastronomie,
        texte_vide: "Aucune recette enregistrée",
        sous_texte_vide: "Partagez vos recettes préférées !",
    },
    Category {
        id: "legendes",
        nom: "Légendes & Mythes",
        sous_titre: "Explorez les récits fondateurs de Côte d'Ivoire",
        type_contenu: ContentType::Legende,
        texte_vide: "Aucune légende enregistrée",
        sous_texte_vide: "Partagez les récits de vos ancêtres !",
    },
    Category {
        id: "sites",
        nom: "Sites de Pouvoir",
        sous_titre: "Visitez les lieux sacrés et historiques",
        type_contenu: ContentType::Site,
        texte_vide: "Aucun site enregistré",
        sous_texte_vide: "Faites découvrir les lieux de mémoire !",
    },
    Category {
        id: "musique",
        nom: "Musique & Danse",
        sous_titre: "Écoutez les rythmes de la tradition",
        type_contenu: ContentType::Musique,
        texte_vide: "Aucune musique enregistrée",
        sous_texte_vide: "Partagez les sons de votre région !",
    },
    Category {
        id: "rituels",
        nom: "Rituels & Cérémonies",
        sous_titre: "Comprenez les rites qui rythment la vie",
        type_contenu: ContentType::Rituel,
        texte_vide: "Aucun rituel enregistré",
        sous_texte_vide: "Racontez les cérémonies de vos aînés !",
    },
];

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn category_for(type_contenu: ContentType) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.type_contenu == type_contenu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_maps_to_distinct_type() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in CATEGORIES.iter().skip(i + 1) {
                assert_ne!(a.type_contenu, b.type_contenu);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find_category("legendes").unwrap().type_contenu, ContentType::Legende);
        assert!(category_for(ContentType::Art).is_none());
    }
}
