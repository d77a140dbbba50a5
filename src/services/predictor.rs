use crate::config::ModelConfig;
use crate::error::AnalyticsError;
use crate::models::{HeadToHeadStats, MatchPrediction, MatchRecord, TeamStats};
use crate::services::{
    GoalRateEstimator, MatchRecordValidator, PoissonOutcomeModel, TeamStatisticsAggregator,
};

/// Front door of the analytics core. Wires the validator, aggregator, rate
/// estimator and Poisson model together; every operation is a pure
/// function of its arguments, so identical inputs always produce identical
/// outputs.
pub struct PredictionEngine {
    validator: MatchRecordValidator,
    aggregator: TeamStatisticsAggregator,
    estimator: GoalRateEstimator,
    model: PoissonOutcomeModel,
}

impl PredictionEngine {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            validator: MatchRecordValidator::new(),
            aggregator: TeamStatisticsAggregator::new(),
            estimator: GoalRateEstimator::new(config.fallback_goal_rate),
            model: PoissonOutcomeModel::new(config.max_goals),
        }
    }

    /// Aggregate a team's supplied history into summary statistics.
    pub fn analyze_team(
        &self,
        team_name: &str,
        matches: &[MatchRecord],
    ) -> Result<TeamStats, AnalyticsError> {
        let validated = self.validator.validate_all(matches)?;
        self.aggregator.team_stats(team_name, &validated)
    }

    /// Predict the outcome of home vs away from their separate histories.
    /// The two histories need not share any fixtures.
    pub fn predict_match(
        &self,
        home_team: &str,
        away_team: &str,
        home_matches: &[MatchRecord],
        away_matches: &[MatchRecord],
    ) -> Result<MatchPrediction, AnalyticsError> {
        let home_name = home_team.trim();
        if home_name.is_empty() {
            return Err(AnalyticsError::validation("home_team", "must not be empty"));
        }
        let away_name = away_team.trim();
        if away_name.is_empty() {
            return Err(AnalyticsError::validation("away_team", "must not be empty"));
        }
        if home_name.to_lowercase() == away_name.to_lowercase() {
            return Err(AnalyticsError::validation(
                "away_team",
                "must differ from home_team",
            ));
        }

        let home_stats = self.analyze_team(home_name, home_matches)?;
        let away_stats = self.analyze_team(away_name, away_matches)?;

        if home_stats.matches_played == 0
            && away_stats.matches_played == 0
            && !self.estimator.has_fallback()
        {
            return Err(AnalyticsError::InsufficientData);
        }

        let home_rates = self.estimator.estimate(&home_stats)?;
        let away_rates = self.estimator.estimate(&away_stats)?;

        let (lambda_home, lambda_away) =
            PoissonOutcomeModel::expected_goals(&home_rates, &away_rates);
        let outcome = self.model.outcome(lambda_home, lambda_away)?;

        let prediction = MatchPrediction {
            home_team: home_name.to_string(),
            away_team: away_name.to_string(),
            predicted_score: format!(
                "{}-{}",
                outcome.predicted_home_goals, outcome.predicted_away_goals
            ),
            home_win_probability: outcome.home_win,
            draw_probability: outcome.draw,
            away_win_probability: outcome.away_win,
            confidence: outcome.confidence,
        };

        tracing::info!(
            "Predicted {} vs {}: Home {:.2}%, Draw {:.2}%, Away {:.2}%, score {}",
            prediction.home_team,
            prediction.away_team,
            prediction.home_win_probability * 100.0,
            prediction.draw_probability * 100.0,
            prediction.away_win_probability * 100.0,
            prediction.predicted_score
        );

        Ok(prediction)
    }

    /// Summarize direct meetings between two teams.
    pub fn head_to_head(
        &self,
        team1: &str,
        team2: &str,
        matches: &[MatchRecord],
    ) -> Result<HeadToHeadStats, AnalyticsError> {
        let validated = self.validator.validate_all(matches)?;
        self.aggregator.head_to_head(team1, team2, &validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn engine(fallback: Option<f64>) -> PredictionEngine {
        PredictionEngine::new(&ModelConfig {
            fallback_goal_rate: fallback,
            max_goals: 10,
        })
    }

    fn record(id: &str, home: &str, away: &str, home_score: i32, away_score: i32) -> MatchRecord {
        MatchRecord {
            id: id.to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score,
            away_score,
            match_date: Utc::now(),
            league: "Premier League".to_string(),
            season: "2023-24".to_string(),
        }
    }

    #[test]
    fn prediction_probabilities_sum_to_one() {
        let engine = engine(Some(1.35));
        let home_matches = vec![record("m1", "X", "A", 3, 0), record("m2", "B", "X", 1, 2)];
        let away_matches = vec![record("m3", "Y", "C", 1, 1), record("m4", "D", "Y", 2, 0)];

        let prediction = engine.predict_match("X", "Y", &home_matches, &away_matches).unwrap();
        let sum = prediction.home_win_probability
            + prediction.draw_probability
            + prediction.away_win_probability;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identical_teams_are_rejected() {
        let engine = engine(Some(1.35));
        let err = engine.predict_match("X", "x", &[], &[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation { .. }));
    }

    #[test]
    fn no_history_and_no_fallback_is_insufficient_data() {
        let engine = engine(None);
        let err = engine.predict_match("X", "Y", &[], &[]).unwrap_err();
        assert_eq!(err, AnalyticsError::InsufficientData);
    }

    #[test]
    fn no_history_with_fallback_produces_a_prediction() {
        let engine = engine(Some(1.35));
        let prediction = engine.predict_match("X", "Y", &[], &[]).unwrap();
        // Both sides run at the league-average rate, so the matchup is even.
        assert!((prediction.home_win_probability - prediction.away_win_probability).abs() < 1e-9);
    }

    #[test]
    fn one_sided_history_without_fallback_still_predicts() {
        let engine = engine(None);
        let home_matches = vec![record("m1", "X", "A", 2, 1)];
        let prediction = engine.predict_match("X", "Y", &home_matches, &[]).unwrap();
        assert!(prediction.home_win_probability > prediction.away_win_probability);
    }

    #[test]
    fn swapping_sides_mirrors_probabilities() {
        let engine = engine(Some(1.35));
        let x_matches = vec![record("m1", "X", "A", 3, 1), record("m2", "X", "B", 2, 2)];
        let y_matches = vec![record("m3", "Y", "C", 0, 1), record("m4", "D", "Y", 1, 1)];

        let forward = engine.predict_match("X", "Y", &x_matches, &y_matches).unwrap();
        let reversed = engine.predict_match("Y", "X", &y_matches, &x_matches).unwrap();

        assert!((forward.home_win_probability - reversed.away_win_probability).abs() < 1e-9);
        assert!((forward.away_win_probability - reversed.home_win_probability).abs() < 1e-9);
        assert!((forward.draw_probability - reversed.draw_probability).abs() < 1e-9);
    }

    #[test]
    fn bad_record_in_history_fails_the_prediction() {
        let engine = engine(Some(1.35));
        let home_matches = vec![record("m1", "X", "A", -1, 0)];
        let err = engine.predict_match("X", "Y", &home_matches, &[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation { .. }));
    }

    #[test]
    fn analyze_team_is_deterministic() {
        let engine = engine(Some(1.35));
        let matches = vec![record("m1", "X", "A", 2, 1), record("m2", "B", "X", 0, 0)];
        let first = engine.analyze_team("X", &matches).unwrap();
        let second = engine.analyze_team("X", &matches).unwrap();
        assert_eq!(first, second);
    }
}
