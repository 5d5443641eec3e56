use rand::Rng;
use crate::models::SwipeOutcome;

/// Thresholds a uniform draw in [0, 1) must exceed to produce a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub like: f64,
    pub superlike: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            like: 0.3,
            superlike: 0.1,
        }
    }
}

/// Decides whether a swipe turns into a match
///
/// Stateless between calls: the caller owns the random source, so a seeded
/// generator makes every decision reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchSimulator {
    thresholds: MatchThresholds,
}

impl MatchSimulator {
    pub fn new(thresholds: MatchThresholds) -> Self {
        Self { thresholds }
    }

    /// Chance that `outcome` produces a match
    pub fn match_probability(&self, outcome: SwipeOutcome) -> f64 {
        match self.threshold(outcome) {
            Some(threshold) => (1.0 - threshold).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// Draw for a match. Skips never match and consume no randomness.
    pub fn roll<R: Rng + ?Sized>(&self, outcome: SwipeOutcome, rng: &mut R) -> bool {
        let Some(threshold) = self.threshold(outcome) else {
            return false;
        };

        let draw: f64 = rng.gen();
        let matched = draw > threshold;
        tracing::debug!(
            "Match draw for {}: {:.3} vs {:.2} -> {}",
            outcome.label(),
            draw,
            threshold,
            matched
        );
        matched
    }

    fn threshold(&self, outcome: SwipeOutcome) -> Option<f64> {
        match outcome {
            SwipeOutcome::Left => None,
            SwipeOutcome::Right => Some(self.thresholds.like),
            SwipeOutcome::Up => Some(self.thresholds.superlike),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_skip_never_matches() {
        let simulator = MatchSimulator::default();
        let mut rng = StepRng::new(u64::MAX, 0);

        assert_eq!(simulator.match_probability(SwipeOutcome::Left), 0.0);
        for _ in 0..100 {
            assert!(!simulator.roll(SwipeOutcome::Left, &mut rng));
        }
    }

    #[test]
    fn test_superlike_has_lower_bar() {
        let simulator = MatchSimulator::default();
        let like = simulator.match_probability(SwipeOutcome::Right);
        let superlike = simulator.match_probability(SwipeOutcome::Up);

        assert!((like - 0.7).abs() < 1e-9);
        assert!((superlike - 0.9).abs() < 1e-9);
        assert!(superlike > like);
    }

    #[test]
    fn test_extreme_draws() {
        let simulator = MatchSimulator::default();

        // All-zero bits draw 0.0; all-one bits draw just below 1.0
        let mut low = StepRng::new(0, 0);
        let mut high = StepRng::new(u64::MAX, 0);

        assert!(!simulator.roll(SwipeOutcome::Right, &mut low));
        assert!(!simulator.roll(SwipeOutcome::Up, &mut low));
        assert!(simulator.roll(SwipeOutcome::Right, &mut high));
        assert!(simulator.roll(SwipeOutcome::Up, &mut high));
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let simulator = MatchSimulator::default();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);

        let first: Vec<bool> = (0..50).map(|_| simulator.roll(SwipeOutcome::Right, &mut a)).collect();
        let second: Vec<bool> = (0..50).map(|_| simulator.roll(SwipeOutcome::Right, &mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_like_rate_tracks_probability() {
        let simulator = MatchSimulator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let hits = (0..10_000)
            .filter(|_| simulator.roll(SwipeOutcome::Right, &mut rng))
            .count();
        let rate = hits as f64 / 10_000.0;
        assert!((rate - 0.7).abs() < 0.03, "like rate {}", rate);
    }
}
