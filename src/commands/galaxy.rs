use crate::analysis::fragility::{aggregate_file, round_to_cents};
use crate::commands::provider::SignalProvider;
use crate::error::RiskError;
use crate::models::galaxy::{GalaxyReport, StatusCounts};
use crate::models::risk::{PredictionRecord, RiskRecord, RiskStatus};
use crate::models::signal::FileSignal;
use rand::Rng;
use std::collections::HashSet;

/// Score every file the provider returns, in provider order.
pub async fn compute_galaxy<P, R>(provider: &P, rng: &mut R) -> Result<Vec<RiskRecord>, RiskError>
where
    P: SignalProvider,
    R: Rng + ?Sized,
{
    let signals = provider.load_signals().await?;
    compute_galaxy_internal(&signals, rng)
}

pub fn compute_galaxy_internal<R: Rng + ?Sized>(
    signals: &[FileSignal],
    rng: &mut R,
) -> Result<Vec<RiskRecord>, RiskError> {
    let mut seen = HashSet::with_capacity(signals.len());
    let mut records = Vec::with_capacity(signals.len());

    for signal in signals {
        if !seen.insert(signal.id.as_str()) {
            log::warn!("duplicate file id {} in signal set; lookups resolve to the first", signal.id);
        }

        let record = aggregate_file(signal, rng).inspect_err(|e| log::warn!("{e}"))?;
        records.push(record);
    }

    log::info!("computed galaxy for {} files", records.len());
    Ok(records)
}

/// Score a single file and attach its advisory text.
pub async fn compute_prediction<P, R>(
    provider: &P,
    file_id: &str,
    rng: &mut R,
) -> Result<PredictionRecord, RiskError>
where
    P: SignalProvider,
    R: Rng + ?Sized,
{
    let signals = provider.load_signals().await?;
    compute_prediction_internal(&signals, file_id, rng)
}

pub fn compute_prediction_internal<R: Rng + ?Sized>(
    signals: &[FileSignal],
    file_id: &str,
    rng: &mut R,
) -> Result<PredictionRecord, RiskError> {
    let signal = signals
        .iter()
        .find(|s| s.id == file_id)
        .ok_or_else(|| RiskError::NotFound {
            id: file_id.to_string(),
        })?;

    Ok(attach_prediction(aggregate_file(signal, rng)?))
}

/// Lookup by id over an already computed galaxy.
pub fn lookup_record<'a>(records: &'a [RiskRecord], file_id: &str) -> Result<&'a RiskRecord, RiskError> {
    records
        .iter()
        .find(|r| r.id == file_id)
        .ok_or_else(|| RiskError::NotFound {
            id: file_id.to_string(),
        })
}

pub fn attach_prediction(record: RiskRecord) -> PredictionRecord {
    let (prediction, recommendation) = advisory(record.status);
    PredictionRecord {
        record,
        prediction: prediction.to_string(),
        recommendation: recommendation.to_string(),
    }
}

/// Static advisory templates. Not a model.
pub fn advisory(status: RiskStatus) -> (&'static str, &'static str) {
    match status {
        RiskStatus::Critical => (
            "Very high likelihood of defects in the next release cycle.",
            "Freeze feature work on this file, add regression tests and schedule a refactor with a single accountable owner.",
        ),
        RiskStatus::High => (
            "Elevated likelihood of defects if current change patterns continue.",
            "Require a second reviewer familiar with this file and break up large changes.",
        ),
        RiskStatus::Medium => (
            "Moderate risk; changes here occasionally introduce regressions.",
            "Keep test coverage current and spread knowledge through pairing or documentation.",
        ),
        RiskStatus::Low => (
            "Stable file with low likelihood of defects.",
            "No action needed; continue routine maintenance.",
        ),
    }
}

/// Descending by score. Ties keep provider order.
pub fn rank_by_score(records: &[RiskRecord]) -> Vec<RiskRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

pub fn build_galaxy_report(files: Vec<RiskRecord>, run_id: String, generated_at: i64) -> GalaxyReport {
    let file_count = files.len();
    let total_score: f64 = files.iter().map(|f| f.score).sum();

    let mut status_counts = StatusCounts::default();
    for file in &files {
        match file.status {
            RiskStatus::Low => status_counts.low += 1,
            RiskStatus::Medium => status_counts.medium += 1,
            RiskStatus::High => status_counts.high += 1,
            RiskStatus::Critical => status_counts.critical += 1,
        }
    }

    GalaxyReport {
        run_id,
        generated_at,
        file_count,
        average_score: if file_count == 0 {
            0.0
        } else {
            round_to_cents(total_score / file_count as f64)
        },
        high_risk_count: status_counts.high + status_counts.critical,
        status_counts,
        files,
    }
}
