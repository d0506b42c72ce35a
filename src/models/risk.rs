use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskStatus {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Low => "LOW",
            RiskStatus::Medium => "MEDIUM",
            RiskStatus::High => "HIGH",
            RiskStatus::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    pub churn: f64,
    pub expertise: f64,
    pub complexity: f64,
    pub historical_bugs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub id: String,
    pub name: String,
    pub path: String,
    pub score: f64,
    pub metrics: RiskMetrics,
    /// Decorative jittered series around `score`. Not a historical reconstruction
    /// and not repeatable unless the caller seeds the random source.
    pub trend: Vec<TrendPoint>,
    pub status: RiskStatus,
}

/// A record annotated with the fixed advisory text for its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(flatten)]
    pub record: RiskRecord,
    pub prediction: String,
    pub recommendation: String,
}
