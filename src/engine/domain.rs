use serde::{Deserialize, Serialize};

/// Identifier wrapper for assessed applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Employment categories recognized by the risk model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Salaried,
    SelfEmployed,
    DailyWage,
    Student,
    Unemployed,
}

/// Raw applicant attributes captured by the intake layer.
///
/// This record is the interchange schema with the external ingestion layer;
/// amounts are monthly currency units, the four `*_on_time` indicators are
/// on-time percentages in `[0, 100]` observed per billing channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub applicant_id: ApplicantId,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub existing_loan_emi: f64,
    pub credit_card_outstanding: f64,
    pub income_stability_months: u32,
    pub electricity_bill_on_time: f64,
    pub mobile_bill_on_time: f64,
    pub rent_payment_on_time: f64,
    pub credit_card_payment_on_time: f64,
    pub upi_transactions_per_month: u32,
    pub digital_wallet_usage: f64,
    pub online_bill_payments: f64,
    pub emergency_savings: f64,
    pub previous_loan_defaults: u8,
    pub age: u8,
    pub employment_type: EmploymentType,
    pub income_type: String,
    pub years_of_employment: f64,
    pub city_tier: u8,
}

impl ApplicantInput {
    /// The four bill-payment indicators in their fixed channel order.
    pub(crate) fn payment_indicators(&self) -> [f64; 4] {
        [
            self.electricity_bill_on_time,
            self.mobile_bill_on_time,
            self.rent_payment_on_time,
            self.credit_card_payment_on_time,
        ]
    }
}

/// Derived feature vector for one applicant.
///
/// Exists only for the duration of a single assessment. Consistency, maturity
/// and risk-index features lie in `[0, 1]`; `income_consistency`,
/// `disposable_income`, `transaction_velocity`, `leverage_ratio` and
/// `emergency_buffer` are unbounded but always finite for valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    pub income_consistency: f64,
    pub income_to_expense_ratio: f64,
    pub disposable_income: f64,
    pub payment_consistency: f64,
    pub payment_trend: f64,
    pub digital_maturity: f64,
    pub transaction_velocity: f64,
    pub leverage_ratio: f64,
    pub emergency_buffer: f64,
    pub default_risk: f64,
    pub age_risk: f64,
    pub employment_risk: f64,
    pub location_risk: f64,
    pub data_completeness: f64,
}

/// Categorical band derived from the combined credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

/// Terminal lending decision; re-derived fresh on every assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LendingDecision {
    Approve,
    Review,
    Reject,
}

/// Raw output of each ensemble predictor before mixing, kept for audit
/// transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleBreakdown {
    pub rule_cascade: f64,
    pub iterative_residual: f64,
    pub layered_weighted: f64,
}

/// Complete risk assessment for one applicant; the sole externally visible
/// artifact of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub applicant_id: ApplicantId,
    /// Combined credit score, always in `[300, 900]`.
    pub credit_score: u16,
    pub risk_band: RiskBand,
    pub decision: LendingDecision,
    /// Maximum eligible loan amount in currency units, rounded.
    pub max_loan_amount: f64,
    /// Annual interest rate percentage within the regulatory `[min, max]`.
    pub interest_rate: f64,
    /// Projected first-month EMI as a percentage of monthly income.
    pub emi_to_income_ratio: f64,
    pub default_probability: f64,
    pub confidence: f64,
    pub suggestions: Vec<String>,
    pub compliant: bool,
    pub violations: Vec<String>,
    pub insights: Vec<String>,
    pub risk_factors: Vec<String>,
    /// Self-reported accuracy estimate, clamped to `[0.65, 0.95]`.
    pub prediction_accuracy: f64,
    pub ensemble: EnsembleBreakdown,
}
