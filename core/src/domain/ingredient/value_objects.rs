use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Display severity of a risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Unknown,
}

/// Known labels after [`fold_label`]. Anything else is `Unknown`.
const SEVERITY_LABELS: [(&str, SeverityTier); 3] = [
    ("dusuk", SeverityTier::Low),
    ("orta", SeverityTier::Medium),
    ("yuksek", SeverityTier::High),
];

impl SeverityTier {
    /// Maps an optional backend risk label to a tier.
    pub fn classify(label: Option<&str>) -> Self {
        label.map_or(SeverityTier::Unknown, Self::from_label)
    }

    pub fn from_label(label: &str) -> Self {
        let folded = fold_label(label);
        SEVERITY_LABELS
            .iter()
            .find(|(known, _)| *known == folded)
            .map_or(SeverityTier::Unknown, |(_, tier)| *tier)
    }

    /// Stable key used by adapters for styling.
    pub fn style_key(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
            SeverityTier::Unknown => "unknown",
        }
    }

    /// Cell background. `Unknown` is left unfilled.
    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            SeverityTier::Low => Some((0xd1, 0xfa, 0xe5)),
            SeverityTier::Medium => Some((0xfe, 0xf9, 0xc3)),
            SeverityTier::High => Some((0xfe, 0xca, 0xca)),
            SeverityTier::Unknown => None,
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_key())
    }
}

/// Trim, lower-case and strip Turkish diacritics, so "Düşük", "DUSUK" and
/// " düşük " all fold to "dusuk". Combining marks from decomposed input are
/// dropped as well.
fn fold_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'ş' => Some('s'),
            'ç' => Some('c'),
            'ğ' => Some('g'),
            'ı' => Some('i'),
            'ö' => Some('o'),
            'ü' => Some('u'),
            '\u{0300}'..='\u{036f}' => None,
            other => Some(other),
        })
        .collect()
}

/// An image file picked by the user, ready to be sent as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}
