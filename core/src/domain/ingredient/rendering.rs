//! Turns an [`AnalysisResult`] into a presentation-agnostic document.
//!
//! Nothing here knows about terminals or markup. Adapters receive a
//! [`RenderedDocument`] and decide how to draw it; the risk cell carries a
//! [`SeverityTier`] instead of a color.

use serde::Serialize;

use crate::domain::ingredient::{
    entities::{AnalysisResult, IngredientItem, IngredientKind},
    value_objects::SeverityTier,
};

pub const NO_CONTENT_NOTICE: &str = "Analiz edilebilecek bir içerik bulunamadı.";
pub const SUMMARY_PREFIX: &str = "Genel risk seviyesi:";
pub const DEFAULT_MODEL_NOTE: &str = "Sözlükte yok, ML modeli ile risk tahmini yapıldı.";
pub const DEFAULT_NOT_FOUND_NOTE: &str = "Bu madde sözlükte bulunamadı.";
pub const MODEL_ANNOTATION: &str = "(ML)";
pub const EMPTY_CELL: &str = "-";

pub const COLUMNS: [&str; 5] = ["İçerik", "Halk Dili Adı", "Kategori", "Risk", "Açıklama"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedDocument {
    /// Nothing to tabulate.
    Notice { text: String },
    Table {
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<SummaryLine>,
        columns: [&'static str; 5],
        rows: Vec<RenderedRow>,
        /// Backend narrative, one sentence per line. Adapters may hide it.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        narrative: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub text: String,
    pub severity: SeverityTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub ingredient: String,
    pub common_name: String,
    pub category: String,
    pub risk: RiskCell,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskCell {
    pub text: String,
    /// `None` when there is no risk value to style at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityTier>,
    pub model_derived: bool,
}

impl RenderedDocument {
    pub fn notice(text: impl Into<String>) -> Self {
        RenderedDocument::Notice { text: text.into() }
    }

    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            RenderedDocument::Notice { .. } => &[],
            RenderedDocument::Table { rows, .. } => rows,
        }
    }

    pub fn summary(&self) -> Option<&SummaryLine> {
        match self {
            RenderedDocument::Notice { .. } => None,
            RenderedDocument::Table { summary, .. } => summary.as_ref(),
        }
    }

    pub fn narrative(&self) -> &[String] {
        match self {
            RenderedDocument::Notice { .. } => &[],
            RenderedDocument::Table { narrative, .. } => narrative,
        }
    }
}

impl RenderedRow {
    pub fn columns(&self) -> [&str; 5] {
        [
            self.ingredient.as_str(),
            self.common_name.as_str(),
            self.category.as_str(),
            self.risk.text.as_str(),
            self.description.as_str(),
        ]
    }
}

pub fn render(result: Option<&AnalysisResult>) -> RenderedDocument {
    let Some(result) = result.filter(|r| !r.is_empty()) else {
        return RenderedDocument::notice(NO_CONTENT_NOTICE);
    };

    let summary = result
        .overall_risk_level
        .as_deref()
        .filter(|level| !level.is_empty())
        .map(|level| SummaryLine {
            text: format!("{} {}", SUMMARY_PREFIX, level),
            severity: SeverityTier::from_label(level),
        });

    let narrative = result
        .summary_text
        .as_deref()
        .map(|text| {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    RenderedDocument::Table {
        summary,
        columns: COLUMNS,
        rows: result.items.iter().map(render_item).collect(),
        narrative,
    }
}

pub fn render_item(item: &IngredientItem) -> RenderedRow {
    match item.kind() {
        IngredientKind::Dictionary {
            common_name,
            category,
            risk,
            description,
        } => RenderedRow {
            ingredient: item.ingredient.clone(),
            common_name: common_name.to_string(),
            category: category.to_string(),
            risk: RiskCell {
                text: risk.to_string(),
                severity: Some(SeverityTier::from_label(risk)),
                model_derived: false,
            },
            description: description.to_string(),
        },
        IngredientKind::Predicted {
            predicted_risk,
            info,
        } => RenderedRow {
            ingredient: item.ingredient.clone(),
            common_name: EMPTY_CELL.to_string(),
            category: EMPTY_CELL.to_string(),
            risk: RiskCell {
                text: format!("{} {}", predicted_risk, MODEL_ANNOTATION),
                severity: Some(SeverityTier::from_label(predicted_risk)),
                model_derived: true,
            },
            description: info.unwrap_or(DEFAULT_MODEL_NOTE).to_string(),
        },
        IngredientKind::NotFound { info } => RenderedRow {
            ingredient: item.ingredient.clone(),
            common_name: EMPTY_CELL.to_string(),
            category: EMPTY_CELL.to_string(),
            risk: RiskCell {
                text: EMPTY_CELL.to_string(),
                severity: None,
                model_derived: false,
            },
            description: info.unwrap_or(DEFAULT_NOT_FOUND_NOTE).to_string(),
        },
    }
}
