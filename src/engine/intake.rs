use super::domain::ApplicantInput;

/// Precondition violations raised by the intake guard.
///
/// The scoring pipeline divides by income and expenses and assumes every
/// percentage indicator sits in `[0, 100]`; malformed records are rejected
/// here so no `NaN` or infinity can propagate into a score.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputViolation {
    #[error("monthly income must be strictly positive, got {0}")]
    NonPositiveIncome(f64),
    #[error("monthly expenses must be strictly positive, got {0}")]
    NonPositiveExpenses(f64),
    #[error("{field} must be a finite, non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("{field} must lie in [0, 100], got {value}")]
    IndicatorOutOfRange { field: &'static str, value: f64 },
    #[error("city tier must be at least 1")]
    InvalidCityTier,
}

/// Validate the engine's input contract before any feature is derived.
pub(crate) fn validate(input: &ApplicantInput) -> Result<(), InputViolation> {
    if !(input.monthly_income.is_finite() && input.monthly_income > 0.0) {
        return Err(InputViolation::NonPositiveIncome(input.monthly_income));
    }
    if !(input.monthly_expenses.is_finite() && input.monthly_expenses > 0.0) {
        return Err(InputViolation::NonPositiveExpenses(input.monthly_expenses));
    }

    let amounts = [
        ("existing_loan_emi", input.existing_loan_emi),
        ("credit_card_outstanding", input.credit_card_outstanding),
        ("emergency_savings", input.emergency_savings),
        ("years_of_employment", input.years_of_employment),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            return Err(InputViolation::InvalidAmount { field, value });
        }
    }

    let indicators = [
        ("electricity_bill_on_time", input.electricity_bill_on_time),
        ("mobile_bill_on_time", input.mobile_bill_on_time),
        ("rent_payment_on_time", input.rent_payment_on_time),
        (
            "credit_card_payment_on_time",
            input.credit_card_payment_on_time,
        ),
        ("digital_wallet_usage", input.digital_wallet_usage),
        ("online_bill_payments", input.online_bill_payments),
    ];
    for (field, value) in indicators {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(InputViolation::IndicatorOutOfRange { field, value });
        }
    }

    if input.city_tier == 0 {
        return Err(InputViolation::InvalidCityTier);
    }

    Ok(())
}
