use crate::core::budget::budget_fit_score;
use crate::models::{Destination, Preferences, ScoreBreakdown, ScoringWeights, ValidationError};

/// Credit for a destination whose climate differs from the preferred one
///
/// A mismatch lowers the score markedly but never disqualifies on its own.
const CLIMATE_MISMATCH_CREDIT: f64 = 0.3;

/// Calculate a match score (0-100) for a destination against user preferences
///
/// Scoring formula:
/// score = 100 * sum(weight_i * subscore_i) / sum(weight_i), over
///     budget_fit     * w.budget                            # fixed weight
///     climate_fit    * w.climate                           # fixed weight
///     healthcare_fit * w.healthcare * importance / 10      # user-tunable
///     safety_fit     * w.safety * importance / 10          # user-tunable
///     lgbtq_fit      * w.lgbtq                             # only when flagged
///
/// A zero-importance criterion (or an unflagged lgbtq preference) drops out
/// of both the numerator and the denominator, so it neither rewards nor
/// penalizes. Budget and climate always participate, which keeps the
/// denominator positive. The result is clamped to [0, 100].
pub fn calculate_match_score(
    preferences: &Preferences,
    destination: &Destination,
    weights: &ScoringWeights,
) -> Result<(f64, ScoreBreakdown), ValidationError> {
    preferences.validate()?;
    destination.validate()?;

    let budget_score = budget_fit_score(destination.cost_of_living, &preferences.budget);
    let climate_score = climate_fit_score(preferences, destination);
    let healthcare_score = f64::from(destination.healthcare.quality) / 10.0;
    let safety_score = f64::from(destination.safety) / 10.0;

    // Importance scales the base weight; importance 0 removes the criterion
    let healthcare_weight =
        weights.healthcare * f64::from(preferences.healthcare_importance) / 10.0;
    let safety_weight = weights.safety * f64::from(preferences.safety_importance) / 10.0;

    let mut weighted_sum = budget_score * weights.budget
        + climate_score * weights.climate
        + healthcare_score * healthcare_weight
        + safety_score * safety_weight;
    let mut weight_total = weights.budget + weights.climate + healthcare_weight + safety_weight;

    let lgbtq_score = if preferences.lgbtq_friendly {
        let score = f64::from(destination.lgbtq_friendly) / 10.0;
        weighted_sum += score * weights.lgbtq;
        weight_total += weights.lgbtq;
        Some(score)
    } else {
        None
    };

    let breakdown = ScoreBreakdown {
        budget: budget_score,
        climate: climate_score,
        healthcare: healthcare_score,
        safety: safety_score,
        lgbtq: lgbtq_score,
    };

    if weight_total <= f64::EPSILON {
        return Ok((0.0, breakdown));
    }

    let total = (weighted_sum / weight_total) * 100.0;

    Ok((total.min(100.0).max(0.0), breakdown))
}

/// Calculate climate fit (0-1)
///
/// Exact categorical match earns full credit; anything else, including
/// out-of-vocabulary labels, earns the reduced mismatch credit.
#[inline]
fn climate_fit_score(preferences: &Preferences, destination: &Destination) -> f64 {
    if preferences.climate_preference.matches(destination.climate) {
        1.0
    } else {
        CLIMATE_MISMATCH_CREDIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRange, Climate, Healthcare};

    fn create_test_preferences() -> Preferences {
        Preferences {
            budget: BudgetRange::new(2000, 3000).unwrap(),
            climate_preference: Climate::Mediterranean,
            healthcare_importance: 8,
            lgbtq_friendly: true,
            safety_importance: 9,
        }
    }

    fn create_test_destination() -> Destination {
        Destination {
            name: "Test City".to_string(),
            cost_of_living: 2,
            climate: Climate::Mediterranean,
            healthcare: Healthcare { quality: 8, cost: 3 },
            safety: 9,
            lgbtq_friendly: 8,
        }
    }

    #[test]
    fn test_calculate_match_score() {
        let preferences = create_test_preferences();
        let destination = create_test_destination();
        let weights = ScoringWeights::default();

        let (score, breakdown) =
            calculate_match_score(&preferences, &destination, &weights).unwrap();

        assert!(score > 0.0 && score <= 100.0);
        assert_eq!(breakdown.budget, 1.0);
        assert_eq!(breakdown.climate, 1.0);
        assert!(breakdown.lgbtq.is_some());
    }

    #[test]
    fn test_score_is_deterministic() {
        let preferences = create_test_preferences();
        let destination = create_test_destination();
        let weights = ScoringWeights::default();

        let (first, _) = calculate_match_score(&preferences, &destination, &weights).unwrap();
        let (second, _) = calculate_match_score(&preferences, &destination, &weights).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_climate_mismatch_lowers_score() {
        let preferences = create_test_preferences();
        let matching = create_test_destination();
        let mut mismatched = create_test_destination();
        mismatched.climate = Climate::Tropical;
        let weights = ScoringWeights::default();

        let (match_score, _) = calculate_match_score(&preferences, &matching, &weights).unwrap();
        let (mismatch_score, _) =
            calculate_match_score(&preferences, &mismatched, &weights).unwrap();

        assert!(
            mismatch_score < match_score,
            "Climate mismatch should strictly lower the score"
        );
        assert!(mismatch_score > 0.0, "Mismatch is a penalty, not a veto");
    }

    #[test]
    fn test_unknown_climate_scores_as_mismatch() {
        let preferences = create_test_preferences();
        let mut destination = create_test_destination();
        destination.climate = Climate::Unknown;
        let weights = ScoringWeights::default();

        let (score, breakdown) =
            calculate_match_score(&preferences, &destination, &weights).unwrap();

        assert!(score > 0.0);
        assert_eq!(breakdown.climate, CLIMATE_MISMATCH_CREDIT);
    }

    #[test]
    fn test_zero_importance_nullifies_healthcare() {
        let mut preferences = create_test_preferences();
        preferences.healthcare_importance = 0;
        let weights = ScoringWeights::default();

        let mut poor_healthcare = create_test_destination();
        poor_healthcare.healthcare.quality = 0;
        let mut great_healthcare = create_test_destination();
        great_healthcare.healthcare.quality = 10;

        let (poor_score, _) =
            calculate_match_score(&preferences, &poor_healthcare, &weights).unwrap();
        let (great_score, _) =
            calculate_match_score(&preferences, &great_healthcare, &weights).unwrap();

        assert_eq!(
            poor_score, great_score,
            "Healthcare quality must not move the score when importance is 0"
        );
    }

    #[test]
    fn test_raising_importance_of_strong_safety_helps() {
        // Safety (0.9) sits above the aggregate of the other criteria here,
        // so leaning on it harder must not cost the destination anything
        let mut destination = create_test_destination();
        destination.healthcare.quality = 6;
        destination.lgbtq_friendly = 6;
        let weights = ScoringWeights::default();

        let mut casual = create_test_preferences();
        casual.safety_importance = 2;
        let mut anxious = create_test_preferences();
        anxious.safety_importance = 10;

        let (casual_score, _) = calculate_match_score(&casual, &destination, &weights).unwrap();
        let (anxious_score, _) = calculate_match_score(&anxious, &destination, &weights).unwrap();

        assert!(anxious_score >= casual_score);
    }

    #[test]
    fn test_raising_importance_of_weak_safety_hurts() {
        let mut destination = create_test_destination();
        destination.safety = 2; // below average
        let weights = ScoringWeights::default();

        let mut casual = create_test_preferences();
        casual.safety_importance = 2;
        let mut anxious = create_test_preferences();
        anxious.safety_importance = 10;

        let (casual_score, _) = calculate_match_score(&casual, &destination, &weights).unwrap();
        let (anxious_score, _) = calculate_match_score(&anxious, &destination, &weights).unwrap();

        assert!(anxious_score <= casual_score);
    }

    #[test]
    fn test_boundary_importance_values() {
        let destination = create_test_destination();
        let weights = ScoringWeights::default();

        for importance in [0, 10] {
            let mut preferences = create_test_preferences();
            preferences.healthcare_importance = importance;
            preferences.safety_importance = importance;

            let (score, _) =
                calculate_match_score(&preferences, &destination, &weights).unwrap();
            assert!(score >= 0.0 && score <= 100.0);
        }
    }

    #[test]
    fn test_unflagged_lgbtq_is_neutral() {
        let mut preferences = create_test_preferences();
        preferences.lgbtq_friendly = false;
        let weights = ScoringWeights::default();

        let mut unfriendly = create_test_destination();
        unfriendly.lgbtq_friendly = 0;
        let mut friendly = create_test_destination();
        friendly.lgbtq_friendly = 10;

        let (low_score, breakdown) =
            calculate_match_score(&preferences, &unfriendly, &weights).unwrap();
        let (high_score, _) = calculate_match_score(&preferences, &friendly, &weights).unwrap();

        assert_eq!(low_score, high_score);
        assert!(breakdown.lgbtq.is_none());
    }

    #[test]
    fn test_invalid_importance_rejected() {
        let mut preferences = create_test_preferences();
        preferences.safety_importance = 11;
        let destination = create_test_destination();
        let weights = ScoringWeights::default();

        let result = calculate_match_score(&preferences, &destination, &weights);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_invalid_destination_rejected() {
        let preferences = create_test_preferences();
        let mut destination = create_test_destination();
        destination.name = "  ".to_string();
        let weights = ScoringWeights::default();

        let err = calculate_match_score(&preferences, &destination, &weights).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }
}
