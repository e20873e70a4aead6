use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_LOAN_CAP: f64 = 500_000.0;
const DEFAULT_BASE_RATE: f64 = 12.0;
const DEFAULT_MIN_RATE: f64 = 10.0;
const DEFAULT_MAX_RATE: f64 = 26.0;
const DEFAULT_INCOME_FLOOR: f64 = 5_000.0;
const DEFAULT_MAX_EMI_RATIO: f64 = 50.0;

/// Errors raised while loading engine configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid numeric value for {var}: '{value}'")]
    InvalidNumber { var: String, value: String },
    #[error("{var} must be finite and positive, got {value}")]
    OutOfRange { var: String, value: f64 },
}

/// Fixed mixing weights applied to the three ensemble predictors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleWeights {
    pub rule_cascade: f64,
    pub iterative_residual: f64,
    pub layered_weighted: f64,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        Self {
            rule_cascade: 0.4,
            iterative_residual: 0.35,
            layered_weighted: 0.25,
        }
    }
}

/// Regulatory dials backing the compliance checks and loan-term sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryPolicy {
    /// Ceiling on any sanctioned loan amount, in currency units.
    pub loan_cap: f64,
    /// Annual interest rate offered to a riskless applicant, in percent.
    pub base_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    /// Minimum monthly income required for eligibility (boundary inclusive).
    pub income_floor: f64,
    /// Maximum EMI-to-income ratio, in percent.
    pub max_emi_ratio: f64,
}

impl Default for RegulatoryPolicy {
    fn default() -> Self {
        Self {
            loan_cap: DEFAULT_LOAN_CAP,
            base_rate: DEFAULT_BASE_RATE,
            min_rate: DEFAULT_MIN_RATE,
            max_rate: DEFAULT_MAX_RATE,
            income_floor: DEFAULT_INCOME_FLOOR,
            max_emi_ratio: DEFAULT_MAX_EMI_RATIO,
        }
    }
}

/// Inclusive lower score bound for each risk band above `VeryPoor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBands {
    pub excellent: u16,
    pub good: u16,
    pub fair: u16,
    pub poor: u16,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            excellent: 750,
            good: 650,
            fair: 550,
            poor: 450,
        }
    }
}

/// Process-wide immutable constant table for the scoring engine.
///
/// Loaded once at startup and shared read-only across worker threads; no
/// component mutates it after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub weights: EnsembleWeights,
    pub regulatory: RegulatoryPolicy,
    pub bands: ScoreBands,
}

impl EngineConfig {
    /// Load the configuration, honoring optional environment overrides for
    /// the regulatory dials.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(cap) = read_override("ENGINE_LOAN_CAP")? {
            config.regulatory.loan_cap = cap;
        }
        if let Some(floor) = read_override("ENGINE_INCOME_FLOOR")? {
            config.regulatory.income_floor = floor;
        }
        if let Some(rate) = read_override("ENGINE_BASE_RATE")? {
            config.regulatory.base_rate = rate;
        }

        Ok(config)
    }
}

fn read_override(var: &str) -> Result<Option<f64>, ConfigError> {
    match env::var(var) {
        Ok(raw) => {
            let value = raw.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
                var: var.to_string(),
                value: raw.clone(),
            })?;
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    var: var.to_string(),
                    value,
                });
            }
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_regulatory_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.regulatory.loan_cap, 500_000.0);
        assert_eq!(config.regulatory.income_floor, 5_000.0);
        assert_eq!(config.regulatory.max_emi_ratio, 50.0);
        assert!(config.regulatory.min_rate < config.regulatory.max_rate);
    }

    #[test]
    fn ensemble_weights_sum_to_one() {
        let weights = EnsembleWeights::default();
        let total = weights.rule_cascade + weights.iterative_residual + weights.layered_weighted;
        assert!((total - 1.0).abs() < 1e-9);
    }

    // `load()` reads the process environment, so the override tests take a
    // shared lock to keep parallel test threads from racing on it.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn load_honors_a_valid_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        env::set_var("ENGINE_LOAN_CAP", "250000");
        let result = EngineConfig::load();
        env::remove_var("ENGINE_LOAN_CAP");

        let config = result.expect("valid override");
        assert_eq!(config.regulatory.loan_cap, 250_000.0);
        // Untouched dials keep their defaults.
        assert_eq!(config.regulatory.max_emi_ratio, 50.0);
    }

    #[test]
    fn load_rejects_unparseable_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        env::set_var("ENGINE_INCOME_FLOOR", "not-a-number");
        let result = EngineConfig::load();
        env::remove_var("ENGINE_INCOME_FLOOR");

        match result {
            Err(ConfigError::InvalidNumber { var, value }) => {
                assert_eq!(var, "ENGINE_INCOME_FLOOR");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_non_positive_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        env::set_var("ENGINE_BASE_RATE", "-5");
        let result = EngineConfig::load();
        env::remove_var("ENGINE_BASE_RATE");

        match result {
            Err(ConfigError::OutOfRange { var, value }) => {
                assert_eq!(var, "ENGINE_BASE_RATE");
                assert_eq!(value, -5.0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}
