use crate::prediction::PredictionResult;
use crate::risk::{RiskScoreError, RiskTier};
use serde::{Deserialize, Serialize};

/// Formats a fraction as a percentage with one decimal place: 0.841 -> "84.1%".
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Numbers recommendations from 1, keeping the predictor's order.
pub fn number_recommendations(recommendations: &[String]) -> Vec<String> {
    recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| format!("{}. {}", i + 1, rec))
        .collect()
}

/// Everything the page needs to draw one prediction result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayBundle {
    pub diagnosis: String,
    pub tier: RiskTier,
    pub tier_label: String,
    pub css_class: String,
    pub confidence: String,
    pub risk_score: String,
    /// Unformatted score, used for the width of the risk meter.
    pub risk_fraction: f64,
    pub recommendations: Vec<String>,
}

impl DisplayBundle {
    pub fn from_prediction(result: &PredictionResult, tier: RiskTier) -> Self {
        Self {
            diagnosis: result.prediction.clone(),
            tier,
            tier_label: tier.label(),
            css_class: tier.css_class().to_string(),
            confidence: format_percentage(result.confidence),
            risk_score: format_percentage(result.risk_score),
            risk_fraction: result.risk_score,
            recommendations: number_recommendations(&result.recommendations),
        }
    }

    pub fn build(result: &PredictionResult) -> Result<Self, RiskScoreError> {
        let tier = RiskTier::classify(result.risk_score)?;
        Ok(Self::from_prediction(result, tier))
    }
}

/// Figures shown in the sidebar.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct QuickStats {
    pub model_accuracy: String,
    pub features_used: u32,
    pub training_data: String,
}

impl Default for QuickStats {
    fn default() -> Self {
        Self {
            model_accuracy: "84%".to_string(),
            features_used: 9,
            training_data: "1,000 records".to_string(),
        }
    }
}
