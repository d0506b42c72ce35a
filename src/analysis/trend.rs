use crate::models::risk::TrendPoint;
use rand::Rng;

/// Positional labels, not tied to the calendar.
pub const TREND_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Maximum absolute jitter applied to each trend point.
pub const TREND_JITTER: f64 = 10.0;

/// Synthesize a decorative six-point trend around `score`.
///
/// Each point is `score` plus independent uniform noise in ±10, clamped to 0–100.
/// This is illustration only: nothing about it reflects real history, and two
/// calls with the same score differ unless `rng` is seeded identically.
pub fn synthesize_trend<R: Rng + ?Sized>(score: f64, rng: &mut R) -> Vec<TrendPoint> {
    TREND_MONTHS
        .iter()
        .map(|month| {
            let jitter = rng.gen_range(-TREND_JITTER..=TREND_JITTER);
            let value = (score + jitter).clamp(0.0, 100.0);
            TrendPoint {
                month: month.to_string(),
                value: (value * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn produces_six_labelled_points_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for score in [0.0, 3.5, 50.0, 97.0, 100.0] {
            let trend = synthesize_trend(score, &mut rng);
            let labels: Vec<&str> = trend.iter().map(|p| p.month.as_str()).collect();
            assert_eq!(labels, TREND_MONTHS);
            for point in &trend {
                assert!((0.0..=100.0).contains(&point.value), "{} out of range", point.value);
                assert!((point.value - score).abs() <= TREND_JITTER + 0.005);
            }
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = synthesize_trend(42.0, &mut StdRng::seed_from_u64(99));
        let b = synthesize_trend(42.0, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_source_pulls_every_point_to_lower_jitter_bound() {
        let mut rng = StepRng::new(0, 0);
        let trend = synthesize_trend(50.0, &mut rng);
        assert!(trend.iter().all(|p| (p.value - 40.0).abs() < 1e-9));

        let clamped = synthesize_trend(4.0, &mut rng);
        assert!(clamped.iter().all(|p| p.value == 0.0));
    }
}
