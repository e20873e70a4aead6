use super::assessor::Assessment;
use super::domain::{FeatureSet, RiskBand};

/// Improvement suggestions keyed on feature thresholds, emitted in fixed
/// priority order.
pub(crate) fn suggestions(features: &FeatureSet) -> Vec<String> {
    let mut suggestions = Vec::new();

    if features.payment_consistency < 0.8 {
        suggestions.push(
            "Automate bill payments to keep every channel above 80% on-time".to_string(),
        );
    }
    if features.emergency_buffer < 2.0 {
        suggestions.push(
            "Build an emergency fund covering at least two months of expenses".to_string(),
        );
    }
    if features.leverage_ratio > 0.4 {
        suggestions.push(
            "Reduce existing obligations; debt service above 40% of income limits eligibility"
                .to_string(),
        );
    }
    if features.digital_maturity < 0.5 {
        suggestions
            .push("Increase digital payment usage to strengthen the behavioral record".to_string());
    }
    if features.default_risk >= 0.3 {
        suggestions.push(
            "Clear outstanding defaults and maintain a clean record for twelve months".to_string(),
        );
    }

    suggestions
}

/// Risk factors use a parallel but stricter threshold set than the
/// suggestions, again in fixed priority order.
pub(crate) fn risk_factors(features: &FeatureSet) -> Vec<String> {
    let mut factors = Vec::new();

    if features.leverage_ratio > 0.5 {
        factors.push("Existing obligations exceed half of monthly income".to_string());
    }
    if features.payment_consistency < 0.7 {
        factors.push("Inconsistent bill payment history across channels".to_string());
    }
    if features.emergency_buffer < 1.0 {
        factors.push("Emergency savings cover less than one month of expenses".to_string());
    }
    if features.income_consistency < 0.6 {
        factors.push("Income stream has been stable for under eight months".to_string());
    }

    factors
}

/// Observational insights for the presentation layer.
pub(crate) fn observations(
    score: u16,
    assessment: &Assessment,
    features: &FeatureSet,
) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(format!(
        "Credit score {score} places the applicant in the {} band",
        band_label(assessment.risk_band)
    ));

    if assessment.default_probability < 0.1 {
        insights.push(format!(
            "Low default probability ({:.1}%)",
            assessment.default_probability * 100.0
        ));
    } else if assessment.default_probability > 0.3 {
        insights.push(format!(
            "Elevated default probability ({:.1}%)",
            assessment.default_probability * 100.0
        ));
    }

    if features.digital_maturity >= 0.7 {
        insights.push("Strong digital footprint supports behavioral scoring".to_string());
    } else if features.digital_maturity < 0.3 {
        insights.push("Sparse digital footprint weakens the behavioral signal".to_string());
    }

    if features.disposable_income > 0.0 {
        insights.push(format!(
            "Disposable income of {:.0} per month after obligations",
            features.disposable_income
        ));
    } else {
        insights.push("No disposable income left after monthly obligations".to_string());
    }

    insights
}

fn band_label(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Excellent => "Excellent",
        RiskBand::Good => "Good",
        RiskBand::Fair => "Fair",
        RiskBand::Poor => "Poor",
        RiskBand::VeryPoor => "Very Poor",
    }
}
