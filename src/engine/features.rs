use super::domain::{ApplicantInput, EmploymentType, FeatureSet};

/// Derive the complete feature vector for one validated applicant.
///
/// Infallible once the intake guard has accepted the record: income and
/// expenses are strictly positive, so every ratio below is finite.
pub(crate) fn extract(input: &ApplicantInput) -> FeatureSet {
    let indicators = input.payment_indicators();

    FeatureSet {
        income_consistency: f64::from(input.income_stability_months) / 12.0,
        income_to_expense_ratio: input.monthly_income / input.monthly_expenses,
        disposable_income: (input.monthly_income
            - input.monthly_expenses
            - input.existing_loan_emi)
            .max(0.0),
        payment_consistency: payment_consistency(&indicators),
        payment_trend: trend_slope(&indicators),
        digital_maturity: digital_maturity(input),
        transaction_velocity: f64::from(input.upi_transactions_per_month) / 30.0,
        leverage_ratio: (input.existing_loan_emi + input.credit_card_outstanding)
            / input.monthly_income,
        emergency_buffer: input.emergency_savings / input.monthly_expenses,
        default_risk: default_risk(input),
        age_risk: age_risk(input.age),
        employment_risk: employment_risk(input.employment_type, input.years_of_employment),
        location_risk: location_risk(input.city_tier),
        data_completeness: data_completeness(input),
    }
}

/// Stability of on-time behavior across the four billing channels.
///
/// Zero variance (all channels identical) is maximal consistency, not a
/// degenerate case.
fn payment_consistency(indicators: &[f64; 4]) -> f64 {
    let mean = indicators.iter().sum::<f64>() / indicators.len() as f64;
    let variance = indicators
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / indicators.len() as f64;
    (1.0 - variance.sqrt() / 100.0).max(0.0)
}

/// Least-squares slope of the four indicators against their channel index,
/// capturing whether payment behavior is improving or degrading.
fn trend_slope(indicators: &[f64; 4]) -> f64 {
    let n = indicators.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = indicators.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut x_variance = 0.0;
    for (index, value) in indicators.iter().enumerate() {
        let dx = index as f64 - x_mean;
        covariance += dx * (value - y_mean);
        x_variance += dx * dx;
    }
    covariance / x_variance
}

fn digital_maturity(input: &ApplicantInput) -> f64 {
    let transaction_rate = (f64::from(input.upi_transactions_per_month) / 100.0).min(1.0);
    let maturity = 0.4 * transaction_rate
        + 0.3 * (input.digital_wallet_usage / 100.0)
        + 0.3 * (input.online_bill_payments / 100.0);
    maturity.min(1.0)
}

fn default_risk(input: &ApplicantInput) -> f64 {
    let leverage = (input.existing_loan_emi + input.credit_card_outstanding)
        / input.monthly_income;
    let buffer = input.emergency_savings / input.monthly_expenses;

    let mut risk = f64::from(input.previous_loan_defaults) * 0.3;
    if leverage > 0.4 {
        risk += 0.2;
    }
    if buffer < 1.0 {
        risk += 0.15;
    }
    risk.min(1.0)
}

fn age_risk(age: u8) -> f64 {
    if age < 21 || age > 65 {
        0.3
    } else if age < 25 || age > 60 {
        0.1
    } else {
        0.0
    }
}

fn employment_risk(employment: EmploymentType, years_employed: f64) -> f64 {
    let mut risk: f64 = match employment {
        EmploymentType::Unemployed => 0.5,
        EmploymentType::Student => 0.3,
        EmploymentType::DailyWage => 0.2,
        EmploymentType::Salaried | EmploymentType::SelfEmployed => 0.0,
    };
    if years_employed < 1.0 {
        risk += 0.1;
    }
    risk.min(1.0)
}

fn location_risk(city_tier: u8) -> f64 {
    match city_tier {
        1 => 0.0,
        2 => 0.05,
        3 => 0.1,
        _ => 0.15,
    }
}

/// Fraction of the ten behavioral signal fields actually populated, feeding
/// the assessor's confidence estimate.
fn data_completeness(input: &ApplicantInput) -> f64 {
    let signals = [
        input.income_stability_months > 0,
        input.electricity_bill_on_time > 0.0,
        input.mobile_bill_on_time > 0.0,
        input.rent_payment_on_time > 0.0,
        input.credit_card_payment_on_time > 0.0,
        input.upi_transactions_per_month > 0,
        input.digital_wallet_usage > 0.0,
        input.online_bill_payments > 0.0,
        input.emergency_savings > 0.0,
        input.years_of_employment > 0.0,
    ];
    signals.iter().filter(|present| **present).count() as f64 / signals.len() as f64
}
