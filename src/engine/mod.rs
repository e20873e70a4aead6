//! The assessment pipeline: feature extraction, ensemble scoring, risk
//! assessment, compliance checking, and insight generation.

mod assessor;
mod compliance;
mod ensemble;
mod features;
mod insights;

pub mod domain;
pub mod intake;

#[cfg(test)]
mod tests;

use std::thread;

use tracing::{debug, info};

use crate::config::EngineConfig;

pub use domain::{
    ApplicantId, ApplicantInput, EmploymentType, EnsembleBreakdown, FeatureSet, LendingDecision,
    RiskBand, RiskScore,
};
pub use intake::InputViolation;

/// Stateless engine applying the constant table to applicant records.
///
/// Cheap to share by reference across worker threads; holds no mutable state.
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline for one applicant.
    ///
    /// Fails only on precondition violations surfaced by the intake guard;
    /// once the input is accepted the computation is infallible and
    /// deterministic.
    pub fn assess(&self, input: &ApplicantInput) -> Result<RiskScore, InputViolation> {
        intake::validate(input)?;

        let features = features::extract(input);
        debug!(
            applicant = %input.applicant_id.0,
            payment_consistency = features.payment_consistency,
            leverage = features.leverage_ratio,
            default_risk = features.default_risk,
            "features extracted"
        );

        let breakdown = ensemble::predict(&features);
        let score = ensemble::combine(&breakdown, &self.config.weights);
        debug!(
            applicant = %input.applicant_id.0,
            rule_cascade = breakdown.rule_cascade,
            iterative_residual = breakdown.iterative_residual,
            layered_weighted = breakdown.layered_weighted,
            score,
            "ensemble combined"
        );

        let assessment = assessor::assess(
            score,
            &features,
            input.monthly_income,
            &self.config.regulatory,
            &self.config.bands,
        );
        let report = compliance::check(&assessment, input.monthly_income, &self.config.regulatory);

        info!(
            applicant = %input.applicant_id.0,
            score,
            decision = ?assessment.decision,
            compliant = report.compliant,
            "assessment complete"
        );

        Ok(RiskScore {
            applicant_id: input.applicant_id.clone(),
            credit_score: score,
            risk_band: assessment.risk_band,
            decision: assessment.decision,
            max_loan_amount: assessment.max_loan_amount,
            interest_rate: assessment.interest_rate,
            emi_to_income_ratio: assessment.emi_to_income_ratio,
            default_probability: assessment.default_probability,
            confidence: assessment.confidence,
            suggestions: insights::suggestions(&features),
            compliant: report.compliant,
            violations: report.violations,
            insights: insights::observations(score, &assessment, &features),
            risk_factors: insights::risk_factors(&features),
            prediction_accuracy: assessment.prediction_accuracy,
            ensemble: breakdown,
        })
    }

    /// Assess a batch of independent applicants, preserving input order.
    ///
    /// Applicants share nothing but the read-only constant table, so the
    /// batch fans out across scoped threads without locking.
    pub fn assess_batch(
        &self,
        inputs: &[ApplicantInput],
    ) -> Vec<Result<RiskScore, InputViolation>> {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(inputs.len().max(1));

        if workers <= 1 {
            return inputs.iter().map(|input| self.assess(input)).collect();
        }

        let chunk_size = inputs.len().div_ceil(workers);
        thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|input| self.assess(input))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(results) => results,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}
