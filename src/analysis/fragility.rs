use crate::analysis::{churn, complexity, expertise, trend};
use crate::error::RiskError;
use crate::models::risk::{RiskMetrics, RiskRecord, RiskStatus};
use crate::models::signal::FileSignal;
use rand::Rng;

pub const CHURN_WEIGHT: f64 = 0.4;
pub const EXPERTISE_WEIGHT: f64 = 0.3;

const CRITICAL_ABOVE: f64 = 75.0;
const HIGH_ABOVE: f64 = 50.0;
const MEDIUM_ABOVE: f64 = 25.0;

/// Sub-scores feeding the fragility sum, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragilityInputs {
    pub churn: f64,
    pub expertise_debt: f64,
    /// Already weighted by `complexity::COMPLEXITY_WEIGHT`.
    pub complexity_contribution: f64,
}

/// Weighted sum clamped to 100. All terms are non-negative so no lower clamp.
pub fn combine(inputs: &FragilityInputs) -> f64 {
    let raw = inputs.churn * CHURN_WEIGHT
        + inputs.expertise_debt * EXPERTISE_WEIGHT
        + inputs.complexity_contribution;
    raw.min(100.0)
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Thresholds are exclusive lower bounds: exactly 75.00 is HIGH.
pub fn classify_status(score: f64) -> RiskStatus {
    if score > CRITICAL_ABOVE {
        RiskStatus::Critical
    } else if score > HIGH_ABOVE {
        RiskStatus::High
    } else if score > MEDIUM_ABOVE {
        RiskStatus::Medium
    } else {
        RiskStatus::Low
    }
}

/// Score one file. Pure apart from the trend jitter drawn from `rng`.
pub fn aggregate_file<R: Rng + ?Sized>(signal: &FileSignal, rng: &mut R) -> Result<RiskRecord, RiskError> {
    let inputs = FragilityInputs {
        churn: churn::compute_file_churn(&signal.change_history),
        expertise_debt: expertise::compute_expertise_debt(&signal.id, &signal.authors)?,
        complexity_contribution: complexity::compute_complexity_contribution(
            &signal.id,
            signal.complexity,
        )?,
    };

    // Status follows the published value so the two never disagree at a boundary.
    let score = round_to_cents(combine(&inputs));
    let status = classify_status(score);

    log::debug!(
        "scored {} ({}): churn={:.2} expertise={:.2} complexity={:.2} -> {score} {status}",
        signal.id,
        signal.path,
        inputs.churn,
        inputs.expertise_debt,
        inputs.complexity_contribution,
    );

    Ok(RiskRecord {
        id: signal.id.clone(),
        name: signal.name.clone(),
        path: signal.path.clone(),
        score,
        metrics: RiskMetrics {
            churn: inputs.churn,
            expertise: round_to_cents(inputs.expertise_debt),
            complexity: signal.complexity,
            historical_bugs: signal.historical_bugs,
        },
        trend: trend::synthesize_trend(score, rng),
        status,
    })
}
