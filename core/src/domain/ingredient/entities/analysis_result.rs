use serde::{Deserialize, Serialize};

use crate::domain::ingredient::entities::IngredientItem;

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_risk_level: Option<String>,
    /// Presentation order, never reordered.
    #[serde(default)]
    pub items: Vec<IngredientItem>,
    /// The text the backend actually analysed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    /// Newline separated, one sentence per ingredient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
}

/// Response body of `POST /analyze_image`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageAnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

impl AnalysisResult {
    pub fn new(overall_risk_level: Option<String>, items: Vec<IngredientItem>) -> Self {
        Self {
            overall_risk_level,
            items,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
