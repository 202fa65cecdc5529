// src/fallback/promotions.rs

use crate::domain::timestamps::parse_timestamp;
use crate::domain::{Promotion, PromotionType};

struct PromotionSeed {
    id: i64,
    titre: &'static str,
    type_promotion: PromotionType,
    description: &'static str,
    texte_complet: &'static str,
    numero_contact: &'static str,
    image_url: &'static str,
    adresse: &'static str,
    note_popularite: u8,
    vues: i64,
    is_featured: bool,
    created_at: &'static str,
}

const PROMOTIONS: [PromotionSeed; 9] = [
    PromotionSeed {
        id: 1,
        titre: "Grande Mosquée d'Abidjan",
        type_promotion: PromotionType::Mosquee,
        description: "La plus grande et plus belle mosquée de Côte d'Ivoire, chef-d'œuvre d'architecture islamique.",
        texte_complet: "Inaugurée en 1974, la Grande Mosquée du Plateau est un joyau architectural au cœur d'Abidjan. Elle peut accueillir plus de 3000 fidèles et son minaret de 40 mètres est visible depuis toute la ville. La mosquée est ouverte aux visiteurs en dehors des heures de prière.",
        numero_contact: "+225 27 20 32 00 00",
        image_url: "https://afrique.le360.ma/resizer/v2/MBPDDZBTBBB4TGYEUB4RF6RE7M.JPG?auth=21b074b7872213d2eef6197f2ea0e2934bb0d6c7903b94893610ceb589d4e4ab&smart=true&width=1216&height=684",
        adresse: "Boulevard de la République, Plateau, Abidjan",
        note_popularite: 92,
        vues: 4500,
        is_featured: true,
        created_at: "2024-01-01T00:00:00Z",
    },
    PromotionSeed {
        id: 2,
        titre: "Parc National de Taï",
        type_promotion: PromotionType::Site,
        description: "Forêt tropicale primaire, patrimoine mondial UNESCO, refuge des chimpanzés.",
        texte_complet: "Le Parc National de Taï est l'une des dernières grandes forêts tropicales primaires d'Afrique de l'Ouest. Classé au patrimoine de l'UNESCO, il abrite de nombreuses espèces endémiques dont les chimpanzés célèbres pour leur utilisation d'outils.",
        numero_contact: "+225 27 34 70 00 00",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS5E3J1bIysNVfZ9NVuqGS9dy0bKS3Ae40vKQ&s",
        adresse: "Région du Cavally, Côte d'Ivoire",
        note_popularite: 88,
        vues: 3200,
        is_featured: true,
        created_at: "2024-01-05T00:00:00Z",
    },
    PromotionSeed {
        id: 3,
        titre: "Mosquée de Korhogo",
        type_promotion: PromotionType::Mosquee,
        description: "Mosquée traditionnelle du Nord, architecture soudanaise authentique.",
        texte_complet: "La mosquée de Korhogo est un exemple remarquable de l'architecture soudanaise, construite en banco (terre crue). Ses minarets coniques et ses toits en terrasse sont typiques de l'architecture islamique d'Afrique de l'Ouest.",
        numero_contact: "+225 27 36 86 00 00",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSIC2CeF7gzu6s4OEEWAa_plqTCiLu0eQQhpA&s",
        adresse: "Centre-ville, Korhogo",
        note_popularite: 78,
        vues: 1800,
        is_featured: false,
        created_at: "2024-01-10T00:00:00Z",
    },
    PromotionSeed {
        id: 4,
        titre: "Tam-tam de Kpélié",
        type_promotion: PromotionType::Musique,
        description: "Musique rituelle Sénoufo du Poro, patrimoine immatériel unique.",
        texte_complet: "Le Kpélié est une forme musicale sacrée des Sénoufo, intimement liée aux cérémonies du Poro. Les rythmes frappés sur les tambours sont porteurs de messages destinés aux ancêtres et aux esprits protecteurs.",
        numero_contact: "+225 07 00 11 22 33",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTb2Gs8Qivri4khkxd4fbXj9TQDDT4SAlRiTA&s",
        adresse: "Village de Kpélié, région de Korhogo",
        note_popularite: 75,
        vues: 1200,
        is_featured: false,
        created_at: "2024-01-15T00:00:00Z",
    },
    PromotionSeed {
        id: 5,
        titre: "Légende du Lac Sacré de Yamoussoukro",
        type_promotion: PromotionType::Legende,
        description: "Mystère de crocodiles sacrés gardiens du lac présidentiel.",
        texte_complet: "Selon la tradition Baoulé, les crocodiles du lac de Yamoussoukro sont les réincarnations des ancêtres fondateurs du village. Ils ne s'attaquent jamais aux habitants et se nourrissent de poulets sacrificiels offerts lors des cérémonies.",
        numero_contact: "+225 27 30 64 00 00",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ9e7Eyl4u9PK3dhV2JJnx89miRqieDLJqYYQ&s",
        adresse: "Lac présidentiel, Yamoussoukro",
        note_popularite: 70,
        vues: 980,
        is_featured: false,
        created_at: "2024-01-20T00:00:00Z",
    },
    PromotionSeed {
        id: 6,
        titre: "Circuit Culturel Abidjan",
        type_promotion: PromotionType::Touriste,
        description: "Découverte guidée des meilleurs sites culturels d'Abidjan en une journée.",
        texte_complet: "Notre circuit culturel premium vous emmène à la découverte du musée des Civilisations de Côte d'Ivoire, du quartier historique du Plateau, du marché de Treichville et du village d'Adjamé. Guide francophone inclus.",
        numero_contact: "+225 07 55 66 77 88",
        image_url: "https://cdn.tourradar.com/s3/tour/750x400/147975_16965ed8.jpg",
        adresse: "Départ : Hôtel Ivoire, Cocody, Abidjan",
        note_popularite: 85,
        vues: 2100,
        is_featured: true,
        created_at: "2024-01-25T00:00:00Z",
    },
    PromotionSeed {
        id: 7,
        titre: "Grotte de l'An 2000 - Man",
        type_promotion: PromotionType::Site,
        description: "Site naturel mystérieux et spirituel dans les montagnes de Man.",
        texte_complet: "La grotte de l'An 2000 est un site naturel et spirituel dans les montagnes de Man, utilisée lors des cérémonies initiatiques Dan. Un guide local vous accompagne pour expliquer la signification culturelle de ce lieu sacré.",
        numero_contact: "+225 07 18 29 30 41",
        image_url: "https://www.instagram.com/p/Cylajc0rN5b/",
        adresse: "Env. 5 km de Man, route de Danané",
        note_popularite: 72,
        vues: 890,
        is_featured: false,
        created_at: "2024-02-01T00:00:00Z",
    },
    PromotionSeed {
        id: 8,
        titre: "Djembé Mandingue",
        type_promotion: PromotionType::Musique,
        description: "Cours et spectacles de djembé authentique à Kong.",
        texte_complet: "L'association Djembé Kong organise des initiations au djembé mandingue dans la cité historique de Kong. Les maîtres djembéfola transmettent leur art ancestral lors de séances d'une heure ouvertes aux touristes.",
        numero_contact: "+225 07 99 00 11 22",
        image_url: "https://soundiata.org/wp-content/uploads/2023/12/culture-mandingue-percussions-enfants-soundiata.jpg",
        adresse: "Quartier des artisans, Kong",
        note_popularite: 68,
        vues: 750,
        is_featured: false,
        created_at: "2024-02-10T00:00:00Z",
    },
    PromotionSeed {
        id: 9,
        titre: "Aya Cissoko, artiste pluridisciplinaire",
        type_promotion: PromotionType::Talent,
        description: "Talent validé par l'administrateur. A prouvé ses valeurs et compétences en Afrique.",
        texte_complet: "Aya Cissoko, artiste ivoirienne reconnue. L'administrateur a validé ce profil. La communauté peut commenter et liker.",
        numero_contact: "+225 07 12 34 56 78",
        image_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400",
        adresse: "Abidjan, Côte d'Ivoire",
        note_popularite: 88,
        vues: 1200,
        is_featured: true,
        created_at: "2024-02-15T00:00:00Z",
    },
];

impl PromotionSeed {
    fn to_promotion(&self) -> Promotion {
        Promotion {
            id: self.id,
            titre: self.titre.to_string(),
            type_promotion: self.type_promotion,
            description: self.description.to_string(),
            texte_complet: Some(self.texte_complet.to_string()),
            numero_contact: Some(self.numero_contact.to_string()),
            image_url: Some(self.image_url.to_string()),
            adresse: Some(self.adresse.to_string()),
            note_popularite: self.note_popularite,
            vues: self.vues,
            is_featured: self.is_featured,
            is_active: true,
            created_at: parse_timestamp(self.created_at),
        }
    }
}

pub fn promotions() -> Vec<Promotion> {
    PROMOTIONS.iter().map(PromotionSeed::to_promotion).collect()
}

/// Active promotions of the given type, or all of them for `None`
pub fn promotions_by_type(promotion_type: Option<PromotionType>) -> Vec<Promotion> {
    promotions()
        .into_iter()
        .filter(|p| p.is_active)
        .filter(|p| promotion_type.map_or(true, |t| p.type_promotion == t))
        .collect()
}

pub fn featured_promotions() -> Vec<Promotion> {
    promotions()
        .into_iter()
        .filter(|p| p.is_featured && p.is_active)
        .collect()
}

pub fn promotion_by_id(id: i64) -> Option<Promotion> {
    PROMOTIONS
        .iter()
        .find(|p| p.id == id)
        .map(PromotionSeed::to_promotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_promotion;

    #[test]
    fn test_dataset_is_valid() {
        for promotion in promotions() {
            validate_promotion(&promotion).unwrap();
        }
    }

    #[test]
    fn test_filters() {
        let mosques = promotions_by_type(Some(PromotionType::Mosquee));
        assert_eq!(mosques.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(promotions_by_type(None).len(), 9);
        assert_eq!(
            featured_promotions().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 6, 9]
        );
        assert_eq!(promotion_by_id(9).unwrap().type_promotion, PromotionType::Talent);
    }
}
