use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Invalid signal for file {id}: {reason}")]
    InvalidSignal { id: String, reason: String },

    #[error("File not found: {id}")]
    NotFound { id: String },

    #[error("Signal provider error: {0}")]
    Provider(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl RiskError {
    pub fn invalid(id: &str, reason: impl Into<String>) -> Self {
        RiskError::InvalidSignal {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// True for conditions the caller caused by asking for something absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RiskError::NotFound { .. })
    }
}
