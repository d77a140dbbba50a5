use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ModelConfig;
use crate::models::MatchRecord;
use crate::services::PredictionEngine;
use crate::utils::{outcome_label, probability_to_odds};

pub fn analyze_team(team_name: &str, matches_path: &Path) -> Result<()> {
    let matches = load_matches(matches_path)?;
    let engine = PredictionEngine::new(&ModelConfig::load());

    println!("🔍 Analyzing {} over {} supplied records...", team_name, matches.len());

    let stats = engine.analyze_team(team_name, &matches)?;

    println!("\n📊 {} summary:", stats.team_name);
    println!("   Played: {}", stats.matches_played);
    println!(
        "   W-D-L: {}-{}-{} ({:.1}% won)",
        stats.wins,
        stats.draws,
        stats.losses,
        stats.win_percentage * 100.0
    );
    println!(
        "   Goals: {} for / {} against ({:.2} scored, {:.2} conceded per match)",
        stats.goals_for, stats.goals_against, stats.avg_goals_scored, stats.avg_goals_conceded
    );

    if stats.matches_played == 0 {
        println!("\n💡 No records matched '{}'. Check the team name spelling.", team_name);
    }

    Ok(())
}

pub fn predict_match(
    home_team: &str,
    away_team: &str,
    home_matches_path: &Path,
    away_matches_path: &Path,
) -> Result<()> {
    let home_matches = load_matches(home_matches_path)?;
    let away_matches = load_matches(away_matches_path)?;
    let engine = PredictionEngine::new(&ModelConfig::load());

    println!("🔮 Predicting {} vs {}...", home_team, away_team);

    let prediction = engine.predict_match(home_team, away_team, &home_matches, &away_matches)?;

    println!("\n🎯 {} vs {}:", prediction.home_team, prediction.away_team);
    println!("   Predicted score: {}", prediction.predicted_score);
    println!(
        "   Home win: {:.1}% (odds {:.2})",
        prediction.home_win_probability * 100.0,
        probability_to_odds(prediction.home_win_probability)
    );
    println!(
        "   Draw:     {:.1}% (odds {:.2})",
        prediction.draw_probability * 100.0,
        probability_to_odds(prediction.draw_probability)
    );
    println!(
        "   Away win: {:.1}% (odds {:.2})",
        prediction.away_win_probability * 100.0,
        probability_to_odds(prediction.away_win_probability)
    );
    println!(
        "   Most likely outcome: {} (confidence {:.1}%)",
        outcome_label(&prediction),
        prediction.confidence * 100.0
    );

    Ok(())
}

pub fn head_to_head(team1: &str, team2: &str, matches_path: &Path) -> Result<()> {
    let matches = load_matches(matches_path)?;
    let engine = PredictionEngine::new(&ModelConfig::load());

    println!("🔍 Looking up meetings between {} and {}...", team1, team2);

    let h2h = engine.head_to_head(team1, team2, &matches)?;

    if h2h.total_matches == 0 {
        println!("\n📭 No direct meetings found in the supplied records.");
        return Ok(());
    }

    println!("\n⚔️  {} vs {} ({} meetings):", h2h.team1, h2h.team2, h2h.total_matches);
    println!(
        "   {} wins: {} | Draws: {} | {} wins: {}",
        h2h.team1, h2h.team1_wins, h2h.draws, h2h.team2, h2h.team2_wins
    );
    println!(
        "   Avg goals: {} {:.2} - {:.2} {}",
        h2h.team1, h2h.team1_avg_goals, h2h.team2_avg_goals, h2h.team2
    );

    Ok(())
}

fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read match records from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of match records", path.display()))
}
