use crate::error::RiskError;
use crate::models::signal::AuthorCommits;

/// Share of all commits held by the top contributor.
///
/// Rejects signals with no authors or zero total commits: the ratio is
/// undefined there and must not leak out as NaN.
pub fn ownership_ratio(file_id: &str, authors: &[AuthorCommits]) -> Result<f64, RiskError> {
    if authors.is_empty() {
        return Err(RiskError::invalid(file_id, "no authors recorded"));
    }

    let total_commits: u64 = authors.iter().map(|a| u64::from(a.commits)).sum();
    if total_commits == 0 {
        return Err(RiskError::invalid(file_id, "authors have zero total commits"));
    }

    let max_commits = authors.iter().map(|a| a.commits).max().unwrap_or(0);
    Ok(f64::from(max_commits) / total_commits as f64)
}

/// Compute expertise debt for a single file (0–100)
/// Score = (1 - ownership_ratio) * 100
/// A single dominant owner scores near zero; evenly split ownership scores high.
pub fn compute_expertise_debt(file_id: &str, authors: &[AuthorCommits]) -> Result<f64, RiskError> {
    let ratio = ownership_ratio(file_id, authors)?;
    Ok(((1.0 - ratio) * 100.0).min(100.0))
}
