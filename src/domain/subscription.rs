// src/domain/subscription.rs
//
// Premium subscription and the simulated payment inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

const MOBILE_MONEY_MIN_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Mensuel,
    Annuel,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Mensuel, Plan::Annuel];

    /// Price in FCFA
    pub fn price_fcfa(&self) -> u32 {
        match self {
            Plan::Mensuel => 4_900,
            Plan::Annuel => 39_900,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Mensuel => "Mensuel",
            Plan::Annuel => "Annuel",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Mensuel => "mensuel",
            Plan::Annuel => "annuel",
        }
    }
}

impl FromStr for Plan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mensuel" => Ok(Plan::Mensuel),
            "annuel" => Ok(Plan::Annuel),
            _ => Err(DomainError::UnknownVariant {
                kind: "plan",
                value: s.to_string(),
            }),
        }
    }
}

/// Locally recorded premium status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumSubscription {
    pub actif: bool,
    pub date: DateTime<Utc>,
    pub plan: Plan,
}

impl PremiumSubscription {
    pub fn activate(plan: Plan) -> Self {
        Self {
            actif: true,
            date: Utc::now(),
            plan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "methode", rename_all = "snake_case")]
pub enum PaymentMethod {
    MobileMoney { numero: String },
    Card,
}

/// Mobile money numbers need at least 8 digits; separators are ignored.
pub fn validate_payment_method(method: &PaymentMethod) -> DomainResult<()> {
    match method {
        PaymentMethod::MobileMoney { numero } => {
            let digits = numero.chars().filter(|c| c.is_ascii_digit()).count();
            let only_phone_chars = numero
                .chars()
                .all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-');
            if digits < MOBILE_MONEY_MIN_DIGITS || !only_phone_chars {
                return Err(DomainError::InvariantViolation(format!(
                    "Mobile money number must contain at least {} digits",
                    MOBILE_MONEY_MIN_DIGITS
                )));
            }
            Ok(())
        }
        PaymentMethod::Card => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prices() {
        assert_eq!(Plan::Annuel.price_fcfa(), 39_900);
        assert_eq!(Plan::Mensuel.price_fcfa(), 4_900);
        assert_eq!("ANNUEL".parse::<Plan>().unwrap(), Plan::Annuel);
    }

    #[test]
    fn test_mobile_money_number_length() {
        let short = PaymentMethod::MobileMoney { numero: "0701".to_string() };
        let ok = PaymentMethod::MobileMoney { numero: "+225 07 01 02 03".to_string() };
        assert!(validate_payment_method(&short).is_err());
        assert!(validate_payment_method(&ok).is_ok());
        assert!(validate_payment_method(&PaymentMethod::Card).is_ok());
    }

    #[test]
    fn test_mobile_money_rejects_letters() {
        let bad = PaymentMethod::MobileMoney { numero: "07010203ab".to_string() };
        assert!(validate_payment_method(&bad).is_err());
    }
}
