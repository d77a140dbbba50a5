use crate::error::AnalyticsError;
use crate::models::MatchRecord;

/// Checks candidate match records before they reach the aggregator and
/// normalizes team names. No side effects.
pub struct MatchRecordValidator;

impl MatchRecordValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single record and return a normalized copy with trimmed
    /// team names. The error names the offending field and the record id.
    pub fn validate(&self, record: &MatchRecord) -> Result<MatchRecord, AnalyticsError> {
        let home_team = record.home_team.trim();
        if home_team.is_empty() {
            return Err(AnalyticsError::validation(
                "home_team",
                format!("must not be empty (record '{}')", record.id),
            ));
        }

        let away_team = record.away_team.trim();
        if away_team.is_empty() {
            return Err(AnalyticsError::validation(
                "away_team",
                format!("must not be empty (record '{}')", record.id),
            ));
        }

        if record.home_score < 0 {
            return Err(AnalyticsError::validation(
                "home_score",
                format!(
                    "must be non-negative, got {} (record '{}')",
                    record.home_score, record.id
                ),
            ));
        }

        if record.away_score < 0 {
            return Err(AnalyticsError::validation(
                "away_score",
                format!(
                    "must be non-negative, got {} (record '{}')",
                    record.away_score, record.id
                ),
            ));
        }

        Ok(MatchRecord {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            ..record.clone()
        })
    }

    /// Validate a whole history, failing on the first bad record.
    pub fn validate_all(&self, records: &[MatchRecord]) -> Result<Vec<MatchRecord>, AnalyticsError> {
        records.iter().map(|record| self.validate(record)).collect()
    }
}

impl Default for MatchRecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(home: &str, away: &str, home_score: i32, away_score: i32) -> MatchRecord {
        MatchRecord {
            id: "m1".to_string(),
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
    fn accepts_and_normalizes_valid_record() {
        let validator = MatchRecordValidator::new();
        let validated = validator.validate(&record("  Arsenal ", "Chelsea", 2, 1)).unwrap();
        assert_eq!(validated.home_team, "Arsenal");
        assert_eq!(validated.away_team, "Chelsea");
    }

    #[test]
    fn rejects_blank_team_name() {
        let validator = MatchRecordValidator::new();
        let err = validator.validate(&record("   ", "Chelsea", 0, 0)).unwrap_err();
        match err {
            AnalyticsError::Validation { field, .. } => assert_eq!(field, "home_team"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_score() {
        let validator = MatchRecordValidator::new();
        let err = validator.validate(&record("Arsenal", "Chelsea", 1, -1)).unwrap_err();
        match err {
            AnalyticsError::Validation { field, .. } => assert_eq!(field, "away_score"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_all_surfaces_first_failure() {
        let validator = MatchRecordValidator::new();
        let records = vec![record("Arsenal", "Chelsea", 1, 0), record("Spurs", "", 2, 2)];
        assert!(validator.validate_all(&records).is_err());
    }
}
