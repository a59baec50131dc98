use serde::{Deserialize, Serialize};

/// Raw listing as handed over by a marketplace adapter or extractor.
/// Immutable input to the scorer; only `url` and `title` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub url: String,
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// A listing annotated with its relevance score, confidence tier and the
/// human-readable trail of rules that fired. The five passthrough fields
/// are copied from the input listing unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub url: String,
    pub source: String,
    pub title: String,
    pub price: Option<String>,
    pub score: i32,
    pub confidence: Confidence,
    pub matched_factors: Vec<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
