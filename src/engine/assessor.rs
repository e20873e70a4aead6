use crate::config::{RegulatoryPolicy, ScoreBands};

use super::domain::{FeatureSet, LendingDecision, RiskBand};

/// Loan terms and decision derived from the combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Assessment {
    pub risk_band: RiskBand,
    pub decision: LendingDecision,
    pub default_probability: f64,
    pub max_loan_amount: f64,
    pub interest_rate: f64,
    pub emi_to_income_ratio: f64,
    pub confidence: f64,
    pub prediction_accuracy: f64,
}

pub(crate) fn assess(
    score: u16,
    features: &FeatureSet,
    monthly_income: f64,
    policy: &RegulatoryPolicy,
    bands: &ScoreBands,
) -> Assessment {
    let score_f = f64::from(score);

    let default_probability = (((800.0 - score_f) / 500.0).max(0.0)
        + features.default_risk * 0.3
        + (1.0 - features.income_consistency) * 0.2)
        .clamp(0.0, 1.0);

    // The score multiplier can reach 1.5, so the cap is applied again on the
    // final amount; sizing never exceeds what the regulator allows.
    let max_loan_amount = (policy.loan_cap.min(monthly_income * 12.0 * 0.3)
        * (score_f / 600.0).min(1.5)
        * (1.0 - default_probability).max(0.3))
    .round()
    .min(policy.loan_cap);

    let interest_rate = (policy.base_rate
        + ((750.0 - score_f) / 50.0).max(0.0)
        + default_probability * 10.0)
        .clamp(policy.min_rate, policy.max_rate);

    // First-month EMI on the full eligible amount at the quoted annual rate.
    let emi_to_income_ratio =
        (max_loan_amount * interest_rate / 1200.0) / monthly_income * 100.0;

    let decision = decide(score, default_probability, features.payment_consistency);

    let certainty = (features.data_completeness + features.payment_consistency) / 2.0;

    Assessment {
        risk_band: risk_band(score, bands),
        decision,
        default_probability,
        max_loan_amount,
        interest_rate,
        emi_to_income_ratio,
        confidence: certainty.min(1.0),
        prediction_accuracy: certainty.clamp(0.65, 0.95),
    }
}

/// Three terminal states, re-derived fresh on every call.
fn decide(score: u16, default_probability: f64, payment_consistency: f64) -> LendingDecision {
    if score >= 700 && default_probability < 0.1 && payment_consistency > 0.8 {
        LendingDecision::Approve
    } else if score >= 550 && default_probability < 0.3 {
        LendingDecision::Review
    } else {
        LendingDecision::Reject
    }
}

fn risk_band(score: u16, bands: &ScoreBands) -> RiskBand {
    if score >= bands.excellent {
        RiskBand::Excellent
    } else if score >= bands.good {
        RiskBand::Good
    } else if score >= bands.fair {
        RiskBand::Fair
    } else if score >= bands.poor {
        RiskBand::Poor
    } else {
        RiskBand::VeryPoor
    }
}
