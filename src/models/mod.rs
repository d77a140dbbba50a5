use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single finished fixture supplied by the caller. Records are transient
/// value objects; nothing here is ever persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub match_date: DateTime<Utc>,
    pub league: String,
    pub season: String,
}

/// Aggregated record of one team over a set of matches.
///
/// `wins + draws + losses == matches_played` always holds, and
/// `win_percentage` is a 0..1 fraction (0.0 when no matches were played).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_name: String,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub win_percentage: f64,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPrediction {
    pub home_team: String,
    pub away_team: String,
    /// Most likely final score, formatted "h-a".
    pub predicted_score: String,
    pub home_win_probability: f64,
    pub draw_probability: f64,
    pub away_win_probability: f64,
    /// Probability mass of the predicted outcome bucket, 0..1.
    pub confidence: f64,
}

/// Historical record of direct meetings between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadToHeadStats {
    pub team1: String,
    pub team2: String,
    pub total_matches: i32,
    pub team1_wins: i32,
    pub team2_wins: i32,
    pub draws: i32,
    pub team1_avg_goals: f64,
    pub team2_avg_goals: f64,
}

// API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}
