use serde::{Deserialize, Serialize};

/// Answer of the diabetes predictor for one patient record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    /// Diagnosis label, e.g. "Diabetic" or "Non-diabetic".
    pub prediction: String,
    pub confidence: f64,
    pub risk_score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_recommendations_default_to_empty() {
        let json = r#"{"prediction": "Diabetic", "confidence": 0.91, "risk_score": 0.82}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert!(result.recommendations.is_empty());
        assert_eq!(result.prediction, "Diabetic");
    }
}
