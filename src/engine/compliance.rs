use crate::config::RegulatoryPolicy;

use super::assessor::Assessment;

/// Regulatory verdict for one assessed applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComplianceReport {
    pub compliant: bool,
    pub violations: Vec<String>,
}

/// Evaluate every regulatory clause independently; an applicant can breach
/// several at once, so no clause short-circuits the rest.
pub(crate) fn check(
    assessment: &Assessment,
    monthly_income: f64,
    policy: &RegulatoryPolicy,
) -> ComplianceReport {
    let mut violations = Vec::new();

    if assessment.max_loan_amount > policy.loan_cap {
        violations.push(format!(
            "sanctioned amount {:.0} exceeds the regulatory loan cap of {:.0}",
            assessment.max_loan_amount, policy.loan_cap
        ));
    }

    if assessment.interest_rate > policy.max_rate {
        violations.push(format!(
            "interest rate {:.2}% exceeds the regulatory ceiling of {:.2}%",
            assessment.interest_rate, policy.max_rate
        ));
    }

    // Boundary inclusive: an income exactly at the floor is eligible.
    if monthly_income < policy.income_floor {
        violations.push(format!(
            "monthly income {:.0} is below the minimum income floor of {:.0}",
            monthly_income, policy.income_floor
        ));
    }

    if assessment.emi_to_income_ratio > policy.max_emi_ratio {
        violations.push(format!(
            "EMI-to-income ratio {:.1}% exceeds the {:.0}% ceiling",
            assessment.emi_to_income_ratio, policy.max_emi_ratio
        ));
    }

    ComplianceReport {
        compliant: violations.is_empty(),
        violations,
    }
}
