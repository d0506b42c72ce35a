use crate::models::signal::ChangeEvent;

/// Changes older than this many days do not count as recent churn.
pub const CHURN_WINDOW_DAYS: u32 = 30;

/// Each recent change adds this many points; ten changes saturate the score.
const POINTS_PER_CHANGE: f64 = 10.0;

/// Number of change events inside the churn window (inclusive).
pub fn count_recent_changes(history: &[ChangeEvent]) -> usize {
    history
        .iter()
        .filter(|event| event.days_ago <= CHURN_WINDOW_DAYS)
        .count()
}

/// Compute churn score for a single file (0–100)
pub fn compute_file_churn(history: &[ChangeEvent]) -> f64 {
    let recent = count_recent_changes(history) as f64;
    (recent * POINTS_PER_CHANGE).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(days: &[u32]) -> Vec<ChangeEvent> {
        days.iter().copied().map(ChangeEvent::new).collect()
    }

    #[test]
    fn returns_zero_for_files_without_history() {
        assert_eq!(compute_file_churn(&[]), 0.0);
    }

    #[test]
    fn counts_only_changes_inside_window() {
        let events = history(&[0, 5, 12, 20, 29, 30, 30, 31, 90, 365]);
        assert_eq!(count_recent_changes(&events), 7);
        assert_eq!(compute_file_churn(&events), 70.0);
    }

    #[test]
    fn caps_scores_at_hundred() {
        let events = history(&[1; 15]);
        assert_eq!(compute_file_churn(&events), 100.0);
    }

    #[test]
    fn stale_history_scores_zero() {
        let events = history(&[31, 60, 120]);
        assert_eq!(compute_file_churn(&events), 0.0);
    }
}
