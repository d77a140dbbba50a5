use crate::models::MatchPrediction;

/// Convert probability to implied decimal odds.
pub fn probability_to_odds(probability: f64) -> f64 {
    if probability <= 0.0 || probability >= 1.0 {
        return 1000.0; // Very long odds for impossible/certain events
    }
    1.0 / probability
}

/// Human-readable label for the most likely outcome bucket.
pub fn outcome_label(prediction: &MatchPrediction) -> String {
    if prediction.home_win_probability >= prediction.draw_probability
        && prediction.home_win_probability >= prediction.away_win_probability
    {
        format!("{} win", prediction.home_team)
    } else if prediction.away_win_probability >= prediction.draw_probability {
        format!("{} win", prediction.away_team)
    } else {
        "Draw".to_string()
    }
}
