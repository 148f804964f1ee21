use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub const HIGH_RISK_THRESHOLD: f64 = 0.7;
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RiskScoreError {
    #[error("risk score {0} is outside [0, 1]")]
    OutOfRange(f64),
}

/// Discrete band of a continuous risk score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum RiskTier {
    #[strum(serialize = "High Risk")]
    High,
    #[strum(serialize = "Medium Risk")]
    Medium,
    #[strum(serialize = "Low Risk")]
    Low,
}

impl RiskTier {
    /// Bands are closed on their lower bound: 0.4 is Medium, 0.7 is High.
    pub fn classify(risk_score: f64) -> Result<Self, RiskScoreError> {
        if !(0.0..=1.0).contains(&risk_score) {
            return Err(RiskScoreError::OutOfRange(risk_score));
        }

        Ok(if risk_score >= HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if risk_score >= MEDIUM_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        })
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Class of the result card in the stylesheet.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskTier::High => "risk-high",
            RiskTier::Medium => "risk-medium",
            RiskTier::Low => "risk-low",
        }
    }
}
