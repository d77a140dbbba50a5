use std::env;

/// Runtime configuration, loaded from the environment with defaults.
/// `.env` files are picked up in `main` before this runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Tuning knobs for the prediction engine.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// League-average goals per match, substituted for a team with no
    /// history. `None` disables the substitution and makes a prediction
    /// with no history on either side fail instead.
    pub fallback_goal_rate: Option<f64>,
    /// Score-matrix cutoff: goals per side are modeled on `0..=max_goals`,
    /// with residual tail mass folded into the boundary.
    pub max_goals: usize,
}

pub const DEFAULT_FALLBACK_GOAL_RATE: f64 = 1.35;
pub const DEFAULT_MAX_GOALS: usize = 10;

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            fallback_goal_rate: Some(DEFAULT_FALLBACK_GOAL_RATE),
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self {
            server: ServerConfig {
                host: get_env("SERVER_HOST", "0.0.0.0"),
                port: get_env_parsed("SERVER_PORT", 3000),
            },
            model: ModelConfig::load(),
        }
    }
}

impl ModelConfig {
    pub fn load() -> Self {
        // FALLBACK_GOAL_RATE=none turns the substitution off entirely.
        let fallback_goal_rate = match env::var("FALLBACK_GOAL_RATE") {
            Ok(raw) if raw.eq_ignore_ascii_case("none") => None,
            Ok(raw) => Some(raw.parse().unwrap_or(DEFAULT_FALLBACK_GOAL_RATE)),
            Err(_) => Some(DEFAULT_FALLBACK_GOAL_RATE),
        };

        Self {
            fallback_goal_rate,
            max_goals: get_env_parsed("MAX_GOALS", DEFAULT_MAX_GOALS).max(1),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_config_has_fallback() {
        let config = ModelConfig::default();
        assert_eq!(config.fallback_goal_rate, Some(DEFAULT_FALLBACK_GOAL_RATE));
        assert_eq!(config.max_goals, DEFAULT_MAX_GOALS);
    }
}
