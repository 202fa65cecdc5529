// src/domain/report.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Why a content was reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    #[default]
    FausseInfo,
    ContenuInapproprie,
    DroitsAuteur,
    Autre,
}

impl ReportReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportReason::FausseInfo => "fausse_info",
            ReportReason::ContenuInapproprie => "contenu_inapproprie",
            ReportReason::DroitsAuteur => "droits_auteur",
            ReportReason::Autre => "autre",
        }
    }
}

impl FromStr for ReportReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fausse_info" => Ok(ReportReason::FausseInfo),
            "contenu_inapproprie" => Ok(ReportReason::ContenuInapproprie),
            "droits_auteur" => Ok(ReportReason::DroitsAuteur),
            "autre" => Ok(ReportReason::Autre),
            other => Err(DomainError::UnknownVariant {
                kind: "report reason",
                value: other.to_string(),
            }),
        }
    }
}

/// Acknowledgement of a report, from the backend or recorded locally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub message: String,
    pub nb_signalements: u32,
    /// True when the backend was unreachable and the report was only counted on the device
    #[serde(default)]
    pub local: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reason_is_false_information() {
        assert_eq!(ReportReason::default().as_str(), "fausse_info");
        assert_eq!(
            "droits_auteur".parse::<ReportReason>().unwrap(),
            ReportReason::DroitsAuteur
        );
    }

    #[test]
    fn test_backend_receipt_defaults_to_remote() {
        let receipt: ReportReceipt =
            serde_json::from_str(r#"{"message": "Signalement enregistré", "nb_signalements": 2}"#)
                .unwrap();
        assert!(!receipt.local);
        assert_eq!(receipt.nb_signalements, 2);
    }
}
