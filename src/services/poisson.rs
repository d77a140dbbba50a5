use statrs::function::gamma::ln_gamma;

use crate::error::AnalyticsError;
use crate::services::rates::TeamRates;

/// Two probabilities this close are treated as tied when picking the modal
/// score, so the deterministic tie-break is not at the mercy of rounding.
const SCORE_TIE_EPS: f64 = 1e-12;

/// Full outcome distribution for one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDistribution {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
    pub predicted_home_goals: usize,
    pub predicted_away_goals: usize,
    /// Probability mass of the most likely outcome bucket.
    pub confidence: f64,
}

/// Scores goals for each side as independent Poisson processes and reads
/// the outcome probabilities off the bounded joint score matrix.
pub struct PoissonOutcomeModel {
    max_goals: usize,
}

impl PoissonOutcomeModel {
    pub fn new(max_goals: usize) -> Self {
        Self {
            max_goals: max_goals.max(1),
        }
    }

    /// Combine one side's attacking strength with the opponent's defensive
    /// weakness into the expected goals for the upcoming match. This
    /// averaging is a policy choice; swapping it out does not touch the
    /// matrix computation below.
    pub fn expected_goals(home: &TeamRates, away: &TeamRates) -> (f64, f64) {
        let lambda_home = (home.attack + away.concede) / 2.0;
        let lambda_away = (away.attack + home.concede) / 2.0;
        (lambda_home, lambda_away)
    }

    /// Build the joint score matrix for `h, a ∈ [0, max_goals]` and derive
    /// win/draw/loss mass, the modal score, and confidence.
    pub fn outcome(
        &self,
        lambda_home: f64,
        lambda_away: f64,
    ) -> Result<OutcomeDistribution, AnalyticsError> {
        for (label, lambda) in [("lambda_home", lambda_home), ("lambda_away", lambda_away)] {
            if !lambda.is_finite() || lambda < 0.0 {
                return Err(AnalyticsError::invalid_rate(format!(
                    "{label} is {lambda}"
                )));
            }
        }

        let pmf_home = poisson_pmf(lambda_home, self.max_goals);
        let pmf_away = poisson_pmf(lambda_away, self.max_goals);

        let mut home_win = 0.0;
        let mut draw = 0.0;
        let mut away_win = 0.0;

        let mut best = (0usize, 0usize);
        let mut best_prob = f64::MIN;

        for (h, p_h) in pmf_home.iter().enumerate() {
            for (a, p_a) in pmf_away.iter().enumerate() {
                let p = p_h * p_a;

                match h.cmp(&a) {
                    std::cmp::Ordering::Greater => home_win += p,
                    std::cmp::Ordering::Equal => draw += p,
                    std::cmp::Ordering::Less => away_win += p,
                }

                // Modal score; ties prefer the lower total, then the lower
                // home goals, so the result is fully deterministic.
                if p > best_prob + SCORE_TIE_EPS {
                    best_prob = p;
                    best = (h, a);
                } else if (p - best_prob).abs() <= SCORE_TIE_EPS
                    && (h + a, h) < (best.0 + best.1, best.0)
                {
                    best = (h, a);
                }
            }
        }

        Ok(OutcomeDistribution {
            home_win,
            draw,
            away_win,
            predicted_home_goals: best.0,
            predicted_away_goals: best.1,
            confidence: home_win.max(draw).max(away_win),
        })
    }
}

/// Poisson PMF over `0..=max_k`, with the residual tail mass beyond the
/// cutoff folded into the boundary cell so the vector sums to 1.0.
///
/// Terms are computed in log-space (`k·ln λ − λ − lnΓ(k+1)`) and
/// exponentiated once, which stays stable for larger `λ` and `k` where the
/// naive factorial form would overflow.
fn poisson_pmf(lambda: f64, max_k: usize) -> Vec<f64> {
    let mut pmf = vec![0.0; max_k + 1];

    // λ = 0 puts all mass at zero goals; ln(0) would poison the log form.
    if lambda == 0.0 {
        pmf[0] = 1.0;
        return pmf;
    }

    let ln_lambda = lambda.ln();
    for (k, slot) in pmf.iter_mut().enumerate() {
        let log_term = k as f64 * ln_lambda - lambda - ln_gamma(k as f64 + 1.0);
        *slot = log_term.exp();
    }

    let sum: f64 = pmf.iter().sum();
    if sum < 1.0 {
        pmf[max_k] += 1.0 - sum;
    }
    pmf
}
