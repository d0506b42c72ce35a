use crate::error::RiskError;

/// Weight applied to the raw complexity measure.
pub const COMPLEXITY_WEIGHT: f64 = 0.4;

/// Weighted complexity contribution to the fragility sum.
///
/// Not bounded on its own: complexity above 100 pushes the weighted sum past the
/// nominal range and is absorbed by the final fragility clamp.
pub fn compute_complexity_contribution(file_id: &str, complexity: f64) -> Result<f64, RiskError> {
    if !complexity.is_finite() {
        return Err(RiskError::invalid(file_id, "complexity is not a finite number"));
    }
    if complexity < 0.0 {
        return Err(RiskError::invalid(
            file_id,
            format!("complexity must be non-negative, got {complexity}"),
        ));
    }
    Ok(complexity * COMPLEXITY_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_complexity_linearly() {
        assert!((compute_complexity_contribution("a", 85.0).unwrap() - 34.0).abs() < 1e-9);
        assert_eq!(compute_complexity_contribution("a", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn allows_headroom_above_hundred() {
        assert!((compute_complexity_contribution("a", 300.0).unwrap() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(compute_complexity_contribution("a", -1.0).is_err());
        assert!(compute_complexity_contribution("a", f64::NAN).is_err());
        assert!(compute_complexity_contribution("a", f64::INFINITY).is_err());
    }
}
