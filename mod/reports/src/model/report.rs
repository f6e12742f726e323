use serde::{Deserialize, Serialize};

/// A persisted business-analysis report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: i64,
    pub restaurant_id: i64,
    pub analysis: String,
    pub created_at: String,
}

/// A recommendation is generated for a single request and never stored.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub restaurant_id: i64,
    pub analysis: String,
    pub created_at: String,
}

/// History entry: id plus generation date.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRef {
    pub id: i64,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Pdf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub restaurant_id: i64,
    #[serde(default)]
    pub format: OutputFormat,
}
