//! Scoring and decision engine for micro-credit risk assessment.
//!
//! The crate is a pure function library: ingestion, persistence, and
//! presentation live in outer layers that exchange [`engine::ApplicantInput`]
//! and [`engine::RiskScore`] records with this core. A single assessment is a
//! synchronous, side-effect-free computation; batches fan out across scoped
//! worker threads because applicants are independent of one another.

pub mod config;
pub mod engine;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig, EnsembleWeights, RegulatoryPolicy, ScoreBands};
pub use engine::{
    ApplicantId, ApplicantInput, EmploymentType, EnsembleBreakdown, InputViolation,
    LendingDecision, RiskBand, RiskScore, ScoringEngine,
};
