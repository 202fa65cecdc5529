// src/fallback/contents.rs
//
// Compiled-in catalogue served when neither the backend nor the cache can
// answer.

use crate::domain::timestamps::parse_timestamp;
use crate::domain::{Author, ContentType, CulturalContent};

struct ContentSeed {
    id: i64,
    titre: &'static str,
    description: &'static str,
    texte_complet: &'static str,
    type_contenu: ContentType,
    region_id: i64,
    image_url: &'static str,
    vues: i64,
    likes: i64,
    is_featured: bool,
    is_premium: bool,
    created_at: &'static str,
    auteur: (i64, &'static str, &'static str),
    nb_signalements: u32,
}

const GARDIEN: (i64, &str, &str) = (1, "gardien", "Konan Bertille");
const MAMAN: (i64, &str, &str) = (2, "maman", "Aya Sophie");
const VOYAGEUR: (i64, &str, &str) = (3, "voyageur", "Koffi Jean");

const CONTENTS: [ContentSeed; 9] = [
    ContentSeed {
        id: 1,
        titre: "Le Masque Gouro",
        description: "Masque traditionnel utilisé dans les cérémonies funéraires et les rituels de passage.",
        texte_complet: "Les masques Gouro sont parmi les plus emblématiques d'Afrique de l'Ouest. Créés par les artistes Gouro, ces masques représentent les esprits de la forêt et sont utilisés lors des cérémonies traditionnelles. Chaque masque est une œuvre d'art unique, sculptée dans du bois précieux et ornée de pigments naturels.",
        type_contenu: ContentType::Masque,
        region_id: 5,
        image_url: "https://www.art-masque-africain.com/images/2022/07/81868_orig.jpg",
        vues: 1250,
        likes: 89,
        is_featured: true,
        is_premium: false,
        created_at: "2024-01-15T10:00:00Z",
        auteur: GARDIEN,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 2,
        titre: "Sauce Graine",
        description: "La sauce palme, plat emblématique de la cuisine ivoirienne.",
        texte_complet: "La sauce graine ou sauce palme est un mets traditionnel préparé à base de pulpe de palmier à huile. C'est un plat de fête servi lors des grandes occasions familiales. Sa préparation demande plusieurs heures et un savoir-faire transmis de génération en génération.",
        type_contenu: ContentType::Gastronomie,
        region_id: 1,
        image_url: "https://africa-cuisine.com/wp-content/uploads/2023/06/sauce-graine-recette-ivoirenne.jpg",
        vues: 2100,
        likes: 156,
        is_featured: true,
        is_premium: false,
        created_at: "2024-01-20T14:30:00Z",
        auteur: MAMAN,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 3,
        titre: "Le Mystère du Lac de Yamoussoukro",
        description: "Légende du lac de Yamoussoukro et ses origines mystiques.",
        texte_complet: "On dit que le lac de Yamoussoukro cache un secret ancestral. Les anciens racontent que les eaux du lac sont reliées aux esprits des ancêtres Baoulé. Les crocodiles sacrés qui peuplent ses rives sont les gardiens de ce mystère millénaire.",
        type_contenu: ContentType::Legende,
        region_id: 2,
        image_url: "https://media-cdn.tripadvisor.com/media/photo-s/01/64/67/12/yamoussoukro.jpg",
        vues: 890,
        likes: 67,
        is_featured: false,
        is_premium: true,
        created_at: "2024-02-01T09:15:00Z",
        auteur: GARDIEN,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 4,
        titre: "Les Ruines de Grand-Bassam",
        description: "Ancienne capitale coloniale et patrimoine mondial UNESCO.",
        texte_complet: "Grand-Bassam fut la première capitale de la Côte d'Ivoire coloniale. Ses ruines témoignent d'une histoire riche entre traditions africaines et influences coloniales. Classée au patrimoine mondial de l'UNESCO en 2012.",
        type_contenu: ContentType::Site,
        region_id: 6,
        image_url: "https://cdn.tripinafrica.com/places/la-maison-ganamet-de-grand-bassam-657a3dd64de1c.jpg",
        vues: 1560,
        likes: 112,
        is_featured: true,
        is_premium: false,
        created_at: "2024-02-10T11:00:00Z",
        auteur: VOYAGEUR,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 5,
        titre: "Le Tam-tam Sénoufo",
        description: "Instrument à percussion traditionnel du Nord de la Côte d'Ivoire.",
        texte_complet: "Le tam-tam Sénoufo est un instrument symbolique utilisé lors des cérémonies du Poro, société initiatique secrète. Chaque rythme porte un message précis compris uniquement des initiés.",
        type_contenu: ContentType::Musique,
        region_id: 4,
        image_url: "https://www.photo-alsace.com/2_photo/afrique/img_1/n41980.jpg",
        vues: 780,
        likes: 54,
        is_featured: false,
        is_premium: false,
        created_at: "2024-02-15T16:45:00Z",
        auteur: GARDIEN,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 6,
        titre: "Fête des Masques de Man",
        description: "Cérémonie annuelle dédiée aux masques Guéré et Dan.",
        texte_complet: "La fête des masques de Man est un événement culturel exceptionnel qui réunit les communautés Dan et Guéré. Les masques Zakpei dansent pour honorer les ancêtres et assurer la prospérité du village.",
        type_contenu: ContentType::Rituel,
        region_id: 5,
        image_url: "https://man-info.net/2017/11/10/ouverture-de-7eme-edition-festival-gueheva-a-man/",
        vues: 2340,
        likes: 198,
        is_featured: true,
        is_premium: false,
        created_at: "2024-02-20T08:00:00Z",
        auteur: GARDIEN,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 7,
        titre: "L'Attiéké d'Abidjan",
        description: "Semoule de manioc fermenté, accompagnement ivoirien par excellence.",
        texte_complet: "L'attiéké est préparé à partir de manioc fermenté et râpé. Cette spécialité est vendue dans toutes les rues d'Abidjan et représente la cuisine populaire ivoirienne. On le déguste avec du poisson braisé et de la sauce tomate épicée.",
        type_contenu: ContentType::Gastronomie,
        region_id: 1,
        image_url: "https://assets.afcdn.com/recipe/20150224/36284_w1024h1024c1cx262cy175.jpg",
        vues: 1890,
        likes: 145,
        is_featured: true,
        is_premium: false,
        created_at: "2024-03-01T12:30:00Z",
        auteur: MAMAN,
        nb_signalements: 0,
    },
    ContentSeed {
        id: 8,
        titre: "Les Montagnes de Man",
        description: "Paysage spectaculaire des collines de l'Ouest ivoirien.",
        texte_complet: "Les montagnes de Man s'élèvent à plus de 1000 mètres d'altitude et offrent des panoramas à couper le souffle sur la forêt tropicale dense. Le mont Tonkoui est le point culminant avec ses 1189 mètres.",
        type_contenu: ContentType::Site,
        region_id: 5,
        image_url: "https://www.facebook.com/leguide225/posts/les-dents-de-man-cest-lun-des-sites-les-plus-marquants-de-la-ville-aux-18-montag/3557130030972217/",
        vues: 1100,
        likes: 87,
        is_featured: false,
        is_premium: false,
        created_at: "2024-03-05T10:20:00Z",
        auteur: VOYAGEUR,
        nb_signalements: 0,
    },
    // Demo entry for the report flow
    ContentSeed {
        id: 99,
        titre: "[FAUX] Le roi du Kong a 500 ans",
        description: "Information non vérifiée - signaler si erronée.",
        texte_complet: "Cette affirmation n'a jamais été confirmée par les historiens.",
        type_contenu: ContentType::Legende,
        region_id: 4,
        image_url: "https://placehold.co/400x300?text=FAUX",
        vues: 50,
        likes: 2,
        is_featured: false,
        is_premium: false,
        created_at: "2024-03-10T12:00:00Z",
        auteur: (99, "auteur_fictif", "Auteur Signalé"),
        nb_signalements: 3,
    },
];

impl ContentSeed {
    fn to_content(&self) -> CulturalContent {
        let (author_id, username, nom_complet) = self.auteur;
        CulturalContent {
            id: self.id,
            titre: self.titre.to_string(),
            type_contenu: self.type_contenu,
            description: self.description.to_string(),
            texte_complet: self.texte_complet.to_string(),
            image_url: self.image_url.to_string(),
            audio_url: None,
            video_url: None,
            tags: Vec::new(),
            region_id: Some(self.region_id),
            auteur_id: Some(author_id),
            auteur: Some(Author {
                id: author_id,
                username: username.to_string(),
                nom_complet: Some(nom_complet.to_string()),
            }),
            vues: self.vues,
            likes: self.likes,
            is_published: true,
            is_featured: self.is_featured,
            is_premium: self.is_premium,
            is_verrouille: false,
            nb_signalements: self.nb_signalements,
            created_at: parse_timestamp(self.created_at),
        }
    }
}

fn collect(filter: impl Fn(&ContentSeed) -> bool) -> Vec<CulturalContent> {
    CONTENTS
        .iter()
        .filter(|seed| filter(seed))
        .map(ContentSeed::to_content)
        .collect()
}

pub fn contents() -> Vec<CulturalContent> {
    collect(|_| true)
}

pub fn contents_by_type(content_type: ContentType) -> Vec<CulturalContent> {
    collect(|c| c.type_contenu == content_type)
}

pub fn contents_by_region(region_id: i64) -> Vec<CulturalContent> {
    collect(|c| c.region_id == region_id)
}

pub fn featured_contents() -> Vec<CulturalContent> {
    collect(|c| c.is_featured)
}

pub fn content_by_id(id: i64) -> Option<CulturalContent> {
    CONTENTS.iter().find(|c| c.id == id).map(ContentSeed::to_content)
}

/// Contents for the given ids, in the order given; unknown ids are skipped
pub fn contents_by_ids(ids: &[i64]) -> Vec<CulturalContent> {
    ids.iter().filter_map(|&id| content_by_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_content;

    #[test]
    fn test_dataset_is_valid() {
        for content in contents() {
            validate_content(&content).unwrap();
            assert!(content.created_at.is_some(), "bad date on {}", content.id);
        }
    }

    #[test]
    fn test_filters() {
        let ids = |v: Vec<CulturalContent>| v.into_iter().map(|c| c.id).collect::<Vec<_>>();

        assert_eq!(ids(contents_by_type(ContentType::Gastronomie)), vec![2, 7]);
        assert_eq!(ids(contents_by_region(5)), vec![1, 6, 8]);
        assert_eq!(ids(featured_contents()), vec![1, 2, 4, 6, 7]);
        assert!(contents_by_type(ContentType::Danse).is_empty());
    }

    #[test]
    fn test_lookup_by_ids_keeps_order() {
        let found = contents_by_ids(&[7, 404, 1]);
        assert_eq!(found.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7, 1]);
        assert!(content_by_id(404).is_none());
    }
}
