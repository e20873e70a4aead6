use crate::config::EngineConfig;
use crate::engine::domain::{ApplicantId, ApplicantInput, EmploymentType, FeatureSet};
use crate::engine::ScoringEngine;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(EngineConfig::default())
}

/// Salaried tier-1 applicant with spotless payment behavior.
pub(super) fn strong_applicant() -> ApplicantInput {
    ApplicantInput {
        applicant_id: ApplicantId("APP-STRONG".to_string()),
        monthly_income: 25_000.0,
        monthly_expenses: 10_000.0,
        existing_loan_emi: 2_000.0,
        credit_card_outstanding: 0.0,
        income_stability_months: 24,
        electricity_bill_on_time: 100.0,
        mobile_bill_on_time: 100.0,
        rent_payment_on_time: 100.0,
        credit_card_payment_on_time: 100.0,
        upi_transactions_per_month: 60,
        digital_wallet_usage: 80.0,
        online_bill_payments: 70.0,
        emergency_savings: 40_000.0,
        previous_loan_defaults: 0,
        age: 30,
        employment_type: EmploymentType::Salaried,
        income_type: "salary".to_string(),
        years_of_employment: 5.0,
        city_tier: 1,
    }
}

/// Over-leveraged student with prior defaults and no savings.
pub(super) fn distressed_applicant() -> ApplicantInput {
    ApplicantInput {
        applicant_id: ApplicantId("APP-DISTRESSED".to_string()),
        monthly_income: 6_000.0,
        monthly_expenses: 5_500.0,
        existing_loan_emi: 2_000.0,
        credit_card_outstanding: 3_000.0,
        income_stability_months: 3,
        electricity_bill_on_time: 40.0,
        mobile_bill_on_time: 40.0,
        rent_payment_on_time: 40.0,
        credit_card_payment_on_time: 40.0,
        upi_transactions_per_month: 5,
        digital_wallet_usage: 10.0,
        online_bill_payments: 5.0,
        emergency_savings: 0.0,
        previous_loan_defaults: 2,
        age: 19,
        employment_type: EmploymentType::Student,
        income_type: "stipend".to_string(),
        years_of_employment: 0.0,
        city_tier: 3,
    }
}

/// Neutral feature vector for exercising individual components in isolation.
pub(super) fn baseline_features() -> FeatureSet {
    FeatureSet {
        income_consistency: 1.0,
        income_to_expense_ratio: 1.5,
        disposable_income: 5_000.0,
        payment_consistency: 0.85,
        payment_trend: 0.0,
        digital_maturity: 0.5,
        transaction_velocity: 1.0,
        leverage_ratio: 0.3,
        emergency_buffer: 1.5,
        default_risk: 0.1,
        age_risk: 0.0,
        employment_risk: 0.0,
        location_risk: 0.05,
        data_completeness: 1.0,
    }
}
