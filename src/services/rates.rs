use crate::error::AnalyticsError;
use crate::models::TeamStats;

/// Per-team scoring rates feeding the Poisson model. `sample_size` carries
/// how many matches backed the estimate; 0 means the rates came from the
/// fallback policy (or are degenerate zeros when no fallback is set).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRates {
    pub attack: f64,
    pub concede: f64,
    pub sample_size: i32,
}

/// Derives attack/concede rates from aggregated history.
///
/// A team with no history gets the configured league-average rate on both
/// sides instead of 0.0, so a single empty history does not force a
/// degenerate all-zero prediction. The substitution only happens when a
/// fallback rate was explicitly configured.
pub struct GoalRateEstimator {
    fallback_rate: Option<f64>,
}

impl GoalRateEstimator {
    pub fn new(fallback_rate: Option<f64>) -> Self {
        Self { fallback_rate }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback_rate.is_some()
    }

    pub fn estimate(&self, stats: &TeamStats) -> Result<TeamRates, AnalyticsError> {
        let rates = if stats.matches_played == 0 {
            let rate = self.fallback_rate.unwrap_or(0.0);
            TeamRates {
                attack: rate,
                concede: rate,
                sample_size: 0,
            }
        } else {
            TeamRates {
                attack: stats.avg_goals_scored,
                concede: stats.avg_goals_conceded,
                sample_size: stats.matches_played,
            }
        };

        for (label, value) in [("attack", rates.attack), ("concede", rates.concede)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalyticsError::invalid_rate(format!(
                    "{} rate for '{}' is {}",
                    label, stats.team_name, value
                )));
            }
        }

        Ok(rates)
    }
}
