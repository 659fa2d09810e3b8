//! Engine catalog, rocket equation helpers, and stage aggregation.

pub mod engines;
pub mod rocket;
pub mod stage;
pub mod stats;

pub use engines::{ENGINES, Engine, Regime, engine, engine_names};
pub use rocket::{delta_v, mass_flow, thrust_to_weight};
pub use stage::{RegimeSummary, StageConfig, StageSummary};
pub use stats::{EngineStats, Performance};

use thiserror::Error;

/// Errors raised by the propulsion formulas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropulsionError {
    #[error("mass must be positive (got {0} t)")]
    NonPositiveMass(f64),
    #[error("specific impulse must be positive (got {0} s)")]
    NonPositiveIsp(f64),
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    NegativeQuantity { field: &'static str, value: f64 },
    #[error("at least one thrust value is required")]
    NoThrust,
    #[error("at least one engine is required")]
    NoEngines,
    #[error("stack count must be at least 1")]
    NoStacks,
    #[error("unknown engine '{name}' (expected one of: {expected})")]
    UnknownEngine { name: String, expected: String },
}
