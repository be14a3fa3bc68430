use serde::{Deserialize, Serialize};

/// One analysed ingredient as returned by the backend.
///
/// The wire shape is flat: dictionary fields are only meaningful when
/// `matched` is true, prediction fields only when it is false. Use
/// [`IngredientItem::kind`] instead of reading the fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngredientItem {
    pub ingredient: String,
    #[serde(default)]
    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_risk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientKind<'a> {
    /// Found in the reference dictionary.
    Dictionary {
        common_name: &'a str,
        category: &'a str,
        risk: &'a str,
        description: &'a str,
    },
    /// Not in the dictionary, risk estimated by the model.
    Predicted {
        predicted_risk: &'a str,
        info: Option<&'a str>,
    },
    NotFound { info: Option<&'a str> },
}

impl IngredientItem {
    pub fn dictionary(
        ingredient: impl Into<String>,
        common_name: impl Into<String>,
        category: impl Into<String>,
        risk: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            ingredient: ingredient.into(),
            matched: true,
            common_name: Some(common_name.into()),
            category: Some(category.into()),
            risk: Some(risk.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn unmatched(
        ingredient: impl Into<String>,
        predicted_risk: Option<String>,
        info: Option<String>,
    ) -> Self {
        Self {
            ingredient: ingredient.into(),
            matched: false,
            predicted_risk,
            info,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> IngredientKind<'_> {
        if self.matched {
            return IngredientKind::Dictionary {
                common_name: self.common_name.as_deref().unwrap_or_default(),
                category: self.category.as_deref().unwrap_or_default(),
                risk: self.risk.as_deref().unwrap_or_default(),
                description: self.description.as_deref().unwrap_or_default(),
            };
        }

        // Empty strings count as absent, the backend sends "" for missing notes.
        let info = non_empty(self.info.as_deref());
        match non_empty(self.predicted_risk.as_deref()) {
            Some(predicted_risk) => IngredientKind::Predicted {
                predicted_risk,
                info,
            },
            None => IngredientKind::NotFound { info },
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
