use crate::core::scoring::calculate_match_score;
use crate::models::{
    Destination, Preferences, ScoreBreakdown, ScoredDestination, ScoringWeights, ValidationError,
};

/// Result of ranking a candidate list
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<ScoredDestination>,
    pub total_candidates: usize,
}

/// Ranking orchestrator - scores each candidate independently, then sorts
///
/// Every (preferences, destination) pair is a fully independent scoring call;
/// ranking is repeated invocation followed by a deterministic sort.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score a single destination against the user's preferences
    pub fn score(
        &self,
        preferences: &Preferences,
        destination: &Destination,
    ) -> Result<(f64, ScoreBreakdown), ValidationError> {
        calculate_match_score(preferences, destination, &self.weights)
    }

    /// Rank a list of destinations for a user
    ///
    /// Any invalid record fails the whole batch: an invalid request must
    /// never be mistaken for a legitimately low score. Results are sorted by
    /// score descending, cheaper cost tier first on ties. There is no
    /// minimum-score cutoff and no result cap.
    pub fn rank(
        &self,
        preferences: &Preferences,
        destinations: Vec<Destination>,
    ) -> Result<RankResult, ValidationError> {
        let total_candidates = destinations.len();

        let mut matches = destinations
            .into_iter()
            .map(|destination| {
                let (score, breakdown) =
                    calculate_match_score(preferences, &destination, &self.weights)?;

                Ok(ScoredDestination {
                    name: destination.name,
                    cost_of_living: destination.cost_of_living,
                    climate: destination.climate,
                    match_score: score,
                    breakdown,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cost_of_living.cmp(&b.cost_of_living))
        });

        Ok(RankResult {
            matches,
            total_candidates,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
