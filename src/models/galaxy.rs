use crate::models::risk::RiskRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

/// One pipeline run over a provider snapshot. Records keep provider order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyReport {
    pub run_id: String,
    pub generated_at: i64,
    pub file_count: usize,
    pub average_score: f64,
    pub high_risk_count: usize,
    pub status_counts: StatusCounts,
    pub files: Vec<RiskRecord>,
}
