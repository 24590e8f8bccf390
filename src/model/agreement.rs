use serde::{Deserialize, Serialize};

use crate::model::thresholds::AgreementScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KappaAgreement {
    #[serde(rename = "poor")]
    Poor,
    #[serde(rename = "slight")]
    Slight,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "substantial")]
    Substantial,
    #[serde(rename = "almost perfect")]
    AlmostPerfect,
}

impl KappaAgreement {
    pub fn from_kappa(kappa: f64) -> Self {
        Self::classify(kappa, &AgreementScale::landis_koch())
    }

    pub fn classify(kappa: f64, scale: &AgreementScale) -> Self {
        if kappa >= scale.almost_perfect {
            KappaAgreement::AlmostPerfect
        } else if kappa >= scale.substantial {
            KappaAgreement::Substantial
        } else if kappa >= scale.moderate {
            KappaAgreement::Moderate
        } else if kappa >= scale.fair {
            KappaAgreement::Fair
        } else if kappa >= scale.slight {
            KappaAgreement::Slight
        } else {
            // also catches NaN
            KappaAgreement::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KappaAgreement::Poor => "poor",
            KappaAgreement::Slight => "slight",
            KappaAgreement::Fair => "fair",
            KappaAgreement::Moderate => "moderate",
            KappaAgreement::Substantial => "substantial",
            KappaAgreement::AlmostPerfect => "almost perfect",
        }
    }
}

impl std::fmt::Display for KappaAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/agreement.rs"]
mod tests;
