pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Confidence levels offered to users, with the rounded two-sided critical
/// values conventionally quoted for them.
pub const CONFIDENCE_PRESETS: [ConfidencePreset; 3] = [
    ConfidencePreset {
        level: 0.90,
        z: 1.645,
    },
    ConfidencePreset {
        level: 0.95,
        z: 1.96,
    },
    ConfidencePreset {
        level: 0.99,
        z: 2.576,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidencePreset {
    pub level: f64,
    pub z: f64,
}

pub fn preset_for(level: f64) -> Option<ConfidencePreset> {
    CONFIDENCE_PRESETS
        .iter()
        .copied()
        .find(|p| (p.level - level).abs() < 1e-12)
}

/// Lower edges of the kappa agreement bands. A kappa equal to an edge
/// belongs to the band that starts there.
#[derive(Debug, Clone)]
pub struct AgreementScale {
    pub slight: f64,
    pub fair: f64,
    pub moderate: f64,
    pub substantial: f64,
    pub almost_perfect: f64,
}

impl AgreementScale {
    pub fn landis_koch() -> Self {
        Self {
            slight: 0.0,
            fair: 0.20,
            moderate: 0.40,
            substantial: 0.60,
            almost_perfect: 0.80,
        }
    }
}
