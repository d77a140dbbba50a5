use std::cmp::Ordering;

use crate::error::AnalyticsError;
use crate::models::{HeadToHeadStats, MatchRecord, TeamStats};

/// Folds a list of validated match records into summary statistics for a
/// single team, and into head-to-head records for a pair of teams.
pub struct TeamStatisticsAggregator;

impl TeamStatisticsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate every record where `team_name` (trimmed, case-insensitive)
    /// appears on either side. Records involving other teams are skipped.
    pub fn team_stats(
        &self,
        team_name: &str,
        matches: &[MatchRecord],
    ) -> Result<TeamStats, AnalyticsError> {
        let display_name = team_name.trim();
        if display_name.is_empty() {
            return Err(AnalyticsError::validation("team_name", "must not be empty"));
        }
        let key = display_name.to_lowercase();

        let mut stats = TeamStats {
            team_name: display_name.to_string(),
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            win_percentage: 0.0,
            avg_goals_scored: 0.0,
            avg_goals_conceded: 0.0,
        };

        for record in matches {
            let is_home = team_key(&record.home_team) == key;
            let is_away = team_key(&record.away_team) == key;
            if !is_home && !is_away {
                continue;
            }

            stats.matches_played += 1;

            let (goals_for, goals_against) = if is_home {
                (record.home_score, record.away_score)
            } else {
                (record.away_score, record.home_score)
            };

            stats.goals_for += goals_for;
            stats.goals_against += goals_against;

            match goals_for.cmp(&goals_against) {
                Ordering::Greater => stats.wins += 1,
                Ordering::Equal => stats.draws += 1,
                Ordering::Less => stats.losses += 1,
            }
        }

        // No matching records leaves every derived field at 0.0.
        if stats.matches_played > 0 {
            let played = stats.matches_played as f64;
            stats.win_percentage = stats.wins as f64 / played;
            stats.avg_goals_scored = stats.goals_for as f64 / played;
            stats.avg_goals_conceded = stats.goals_against as f64 / played;
        }

        Ok(stats)
    }

    /// Aggregate only the fixtures in which the two teams met each other,
    /// classified from `team1`'s perspective.
    pub fn head_to_head(
        &self,
        team1: &str,
        team2: &str,
        matches: &[MatchRecord],
    ) -> Result<HeadToHeadStats, AnalyticsError> {
        let name1 = team1.trim();
        if name1.is_empty() {
            return Err(AnalyticsError::validation("team1", "must not be empty"));
        }
        let name2 = team2.trim();
        if name2.is_empty() {
            return Err(AnalyticsError::validation("team2", "must not be empty"));
        }

        let key1 = name1.to_lowercase();
        let key2 = name2.to_lowercase();
        if key1 == key2 {
            return Err(AnalyticsError::validation(
                "team2",
                "must differ from team1",
            ));
        }

        let mut h2h = HeadToHeadStats {
            team1: name1.to_string(),
            team2: name2.to_string(),
            total_matches: 0,
            team1_wins: 0,
            team2_wins: 0,
            draws: 0,
            team1_avg_goals: 0.0,
            team2_avg_goals: 0.0,
        };

        let mut team1_goals = 0;
        let mut team2_goals = 0;

        for record in matches {
            let home_key = team_key(&record.home_team);
            let away_key = team_key(&record.away_team);

            let team1_home = home_key == key1 && away_key == key2;
            let team2_home = home_key == key2 && away_key == key1;
            if !team1_home && !team2_home {
                continue;
            }

            h2h.total_matches += 1;

            let (score1, score2) = if team1_home {
                (record.home_score, record.away_score)
            } else {
                (record.away_score, record.home_score)
            };

            team1_goals += score1;
            team2_goals += score2;

            match score1.cmp(&score2) {
                Ordering::Greater => h2h.team1_wins += 1,
                Ordering::Equal => h2h.draws += 1,
                Ordering::Less => h2h.team2_wins += 1,
            }
        }

        if h2h.total_matches > 0 {
            let played = h2h.total_matches as f64;
            h2h.team1_avg_goals = team1_goals as f64 / played;
            h2h.team2_avg_goals = team2_goals as f64 / played;
        }

        Ok(h2h)
    }
}

impl Default for TeamStatisticsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn team_key(name: &str) -> String {
    name.trim().to_lowercase()
}
