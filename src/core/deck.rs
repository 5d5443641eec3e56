use chrono::Utc;
use rand::RngCore;
use thiserror::Error;
use crate::core::matcher::MatchSimulator;
use crate::models::{Match, Profile, SwipeOutcome};

/// Errors from swiping on the deck
#[derive(Debug, Error, PartialEq)]
pub enum SwipeError {
    #[error("No more profiles in this session")]
    DeckExhausted,

    #[error("Profile {got} is not the current card (expected {expected})")]
    StaleProfile { expected: String, got: String },
}

/// Outcome of one swipe on the deck
#[derive(Debug, Clone)]
pub struct SwipeResult {
    pub outcome: SwipeOutcome,
    pub matched: Option<Profile>,
    pub next: Option<Profile>,
}

/// Ordered stack of profiles with a forward-only cursor
///
/// Each profile is shown at most once and the match list only grows.
#[derive(Debug, Clone)]
pub struct SwipeDeck {
    profiles: Vec<Profile>,
    index: usize,
    matches: Vec<Match>,
}

impl SwipeDeck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            index: 0,
            matches: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.profiles.len().saturating_sub(self.index)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_matched(&self, profile_id: &str) -> bool {
        self.matches.iter().any(|m| m.profile_id == profile_id)
    }

    /// Swipe on the current card and advance
    pub fn swipe<R: RngCore + ?Sized>(
        &mut self,
        profile_id: &str,
        outcome: SwipeOutcome,
        simulator: &MatchSimulator,
        rng: &mut R,
    ) -> Result<SwipeResult, SwipeError> {
        let current = self.current().ok_or(SwipeError::DeckExhausted)?;
        if current.id != profile_id {
            return Err(SwipeError::StaleProfile {
                expected: current.id.clone(),
                got: profile_id.to_string(),
            });
        }
        let current = current.clone();

        tracing::info!("Swiped {} on profile {}", outcome.label(), current.id);

        let matched = if simulator.roll(outcome, rng) {
            tracing::info!("Matched with profile {} ({})", current.id, current.name);
            self.matches.push(Match {
                profile_id: current.id.clone(),
                outcome,
                matched_at: Utc::now(),
            });
            Some(current)
        } else {
            None
        };

        self.index += 1;

        Ok(SwipeResult {
            outcome,
            matched,
            next: self.current().cloned(),
        })
    }
}

/// One pass over the deck with its own random source
///
/// Starting over creates a new session; an existing session never rewinds.
pub struct MatchingSession {
    id: String,
    deck: SwipeDeck,
    simulator: MatchSimulator,
    rng: Box<dyn RngCore + Send>,
}

impl MatchingSession {
    pub fn new(
        profiles: Vec<Profile>,
        simulator: MatchSimulator,
        rng: impl RngCore + Send + 'static,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            deck: SwipeDeck::new(profiles),
            simulator,
            rng: Box::new(rng),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    pub fn swipe(&mut self, profile_id: &str, outcome: SwipeOutcome) -> Result<SwipeResult, SwipeError> {
        self.deck.swipe(profile_id, outcome, &self.simulator, &mut *self.rng)
    }

    /// Start a new session over `profiles`, keeping the random stream
    pub fn restart(&mut self, profiles: Vec<Profile>) {
        self.id = uuid::Uuid::new_v4().to_string();
        self.deck = SwipeDeck::new(profiles);
        tracing::info!("Started matching session {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Student {}", id),
            age: 20,
            gender: "female".to_string(),
            major: "Biology".to_string(),
            class_year: "Junior".to_string(),
            profile_type: vec![],
            interests: vec![],
            bio: None,
            image_url: String::new(),
            similarity: None,
        }
    }

    #[test]
    fn test_cursor_only_moves_forward() {
        let mut deck = SwipeDeck::new(vec![profile("1"), profile("2")]);
        let simulator = MatchSimulator::default();
        let mut rng = StepRng::new(0, 0);

        let result = deck.swipe("1", SwipeOutcome::Left, &simulator, &mut rng).unwrap();
        assert_eq!(result.next.unwrap().id, "2");
        assert_eq!(deck.position(), 1);

        // Swiping the old card again is rejected, not replayed
        let err = deck.swipe("1", SwipeOutcome::Right, &simulator, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SwipeError::StaleProfile { expected: "2".to_string(), got: "1".to_string() }
        );
        assert_eq!(deck.position(), 1);
    }

    #[test]
    fn test_exhausted_deck() {
        let mut deck = SwipeDeck::new(vec![profile("1")]);
        let simulator = MatchSimulator::default();
        let mut rng = StepRng::new(0, 0);

        let result = deck.swipe("1", SwipeOutcome::Up, &simulator, &mut rng).unwrap();
        assert!(result.next.is_none());
        assert!(deck.is_exhausted());
        assert_eq!(deck.remaining(), 0);
        assert_eq!(
            deck.swipe("1", SwipeOutcome::Up, &simulator, &mut rng).unwrap_err(),
            SwipeError::DeckExhausted
        );
    }

    #[test]
    fn test_matches_accumulate() {
        let mut deck = SwipeDeck::new(vec![profile("1"), profile("2"), profile("3")]);
        let simulator = MatchSimulator::default();
        let mut rng = StepRng::new(u64::MAX, 0);

        let first = deck.swipe("1", SwipeOutcome::Right, &simulator, &mut rng).unwrap();
        assert_eq!(first.matched.unwrap().id, "1");
        deck.swipe("2", SwipeOutcome::Left, &simulator, &mut rng).unwrap();
        deck.swipe("3", SwipeOutcome::Up, &simulator, &mut rng).unwrap();

        let ids: Vec<&str> = deck.matches().iter().map(|m| m.profile_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(deck.is_matched("3"));
        assert!(!deck.is_matched("2"));
    }

    #[test]
    fn test_restart_creates_new_session() {
        let mut session =
            MatchingSession::new(vec![profile("1")], MatchSimulator::default(), StepRng::new(u64::MAX, 0));
        session.swipe("1", SwipeOutcome::Right).unwrap();
        let old_id = session.id().to_string();

        session.restart(vec![profile("1")]);
        assert_ne!(session.id(), old_id);
        assert_eq!(session.deck().position(), 0);
        assert!(session.deck().matches().is_empty());
    }
}
