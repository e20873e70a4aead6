use crate::config::EnsembleWeights;

use super::domain::{EnsembleBreakdown, FeatureSet};

pub(crate) const SCORE_FLOOR: f64 = 300.0;
pub(crate) const SCORE_CEIL: f64 = 900.0;

const RULE_CASCADE_BASE: f64 = 500.0;
const ITERATIVE_BASE: f64 = 520.0;
const LAYERED_BASE: f64 = 500.0;

/// Run all three predictors over one feature vector.
pub(crate) fn predict(features: &FeatureSet) -> EnsembleBreakdown {
    EnsembleBreakdown {
        rule_cascade: rule_cascade(features),
        iterative_residual: iterative_residual(features),
        layered_weighted: layered_weighted(features),
    }
}

/// Mix the predictor outputs into the final integer credit score.
pub(crate) fn combine(breakdown: &EnsembleBreakdown, weights: &EnsembleWeights) -> u16 {
    let mixed = breakdown.rule_cascade * weights.rule_cascade
        + breakdown.iterative_residual * weights.iterative_residual
        + breakdown.layered_weighted * weights.layered_weighted;
    mixed.round().clamp(SCORE_FLOOR, SCORE_CEIL) as u16
}

/// Ordered threshold rules, each contributing a fixed point delta. The rules
/// are additive, so reordering them would not change the outcome.
pub(crate) fn rule_cascade(features: &FeatureSet) -> f64 {
    let mut score = RULE_CASCADE_BASE;

    if features.income_consistency >= 1.0 {
        score += 60.0;
    } else if features.income_consistency >= 0.5 {
        score += 30.0;
    } else {
        score -= 20.0;
    }

    if features.payment_consistency > 0.9 {
        score += 80.0;
    } else if features.payment_consistency > 0.75 {
        score += 40.0;
    } else if features.payment_consistency < 0.5 {
        score -= 60.0;
    }

    if features.digital_maturity > 0.7 {
        score += 50.0;
    } else if features.digital_maturity > 0.4 {
        score += 25.0;
    }

    if features.transaction_velocity > 1.5 {
        score += 20.0;
    }

    if features.leverage_ratio > 0.6 {
        score -= 80.0;
    } else if features.leverage_ratio > 0.4 {
        score -= 40.0;
    } else if features.leverage_ratio < 0.2 {
        score += 30.0;
    }

    if features.emergency_buffer > 3.0 {
        score += 40.0;
    } else if features.emergency_buffer > 1.0 {
        score += 20.0;
    } else if features.emergency_buffer < 0.5 {
        score -= 30.0;
    }

    score.clamp(SCORE_FLOOR, SCORE_CEIL)
}

/// Fixed-point recurrence over exactly five iterations; each step adds a
/// damped residual between payment behavior and default risk.
pub(crate) fn iterative_residual(features: &FeatureSet) -> f64 {
    let mut score = ITERATIVE_BASE;
    for iteration in 0..5u32 {
        let residual = (features.payment_consistency * 50.0 - features.default_risk * 100.0)
            / f64::from(iteration + 1);
        score += residual * 0.1 * f64::from(5 - iteration);
    }
    score.clamp(SCORE_FLOOR, SCORE_CEIL)
}

/// Two rectified-linear layers with fixed weights reduced to a scalar, mapped
/// onto the score range via `500 + output * 200`.
///
/// The upstream model injected a random perturbation at each layer; that made
/// identical applicants score differently between calls, so this
/// implementation is deliberately deterministic.
pub(crate) fn layered_weighted(features: &FeatureSet) -> f64 {
    let hidden_behavior = relu(
        0.9 * features.payment_consistency + 0.5 * features.digital_maturity
            - 0.8 * features.default_risk
            - 0.4 * features.leverage_ratio
            - 0.3 * features.employment_risk,
    );
    let hidden_stability = relu(
        0.7 * features.income_consistency.min(1.0)
            + 0.6 * (features.emergency_buffer / 3.0).min(1.0)
            - 0.5 * features.age_risk
            - 0.4 * features.location_risk,
    );

    let output_primary = relu(hidden_behavior + 0.5 * hidden_stability - 0.1);
    let output_secondary = relu(0.5 * hidden_behavior + hidden_stability - 0.1);
    let output = 0.6 * output_primary + 0.4 * output_secondary;

    (LAYERED_BASE + output * 200.0).clamp(SCORE_FLOOR, SCORE_CEIL)
}

fn relu(x: f64) -> f64 {
    x.max(0.0)
}
