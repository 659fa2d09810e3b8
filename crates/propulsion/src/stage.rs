//! Stage sizing from payload, tanks, and parallel engine stacks.
//!
//! A stack is one engine cluster plus its tanks; a stage fires `stacks`
//! identical stacks side by side under a shared payload.

use rocketry_core::CelestialBody;
use serde::Serialize;
use tracing::debug;

use crate::PropulsionError;
use crate::engines::Regime;
use crate::rocket::{delta_v, ensure_finite, thrust_to_weight};
use crate::stats::EngineStats;

/// Inputs describing one stage. Masses are in tonnes.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub payload_t: f64,
    pub tank_dry_t: f64,
    pub tank_full_t: f64,
    /// Tanks per stack. Fractional counts model partial tanks.
    pub tank_count: f64,
    pub stacks: u32,
    /// Engine cluster mounted on each stack.
    pub engines: EngineStats,
    pub body: &'static CelestialBody,
}

/// Delta-v and TWR for one regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeSummary {
    pub delta_v_m_s: f64,
    pub twr: f64,
}

/// Derived masses and performance of a stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSummary {
    pub stack_dry_t: f64,
    pub stack_full_t: f64,
    pub dry_mass_t: f64,
    pub full_mass_t: f64,
    pub atmosphere: RegimeSummary,
    pub vacuum: RegimeSummary,
    pub body: &'static str,
}

impl StageConfig {
    fn validate(&self) -> Result<(), PropulsionError> {
        let fields = [
            ("payload", self.payload_t),
            ("tank dry mass", self.tank_dry_t),
            ("tank full mass", self.tank_full_t),
            ("tank count", self.tank_count),
        ];
        for (field, value) in fields {
            ensure_finite(field, value)?;
            if value < 0.0 {
                return Err(PropulsionError::NegativeQuantity { field, value });
            }
        }
        if self.stacks == 0 {
            return Err(PropulsionError::NoStacks);
        }
        Ok(())
    }

    /// Compute stack and stage masses, then delta-v and TWR in both regimes.
    pub fn summarize(&self) -> Result<StageSummary, PropulsionError> {
        self.validate()?;

        let stacks = f64::from(self.stacks);
        let stack_dry_t = self.engines.mass_t + self.tank_dry_t * self.tank_count;
        let stack_full_t = self.engines.mass_t + self.tank_full_t * self.tank_count;
        let dry_mass_t = self.payload_t + stack_dry_t * stacks;
        let full_mass_t = self.payload_t + stack_full_t * stacks;
        debug!(dry_mass_t, full_mass_t, stacks = self.stacks, "stage masses");

        let per_regime = |regime: Regime| -> Result<RegimeSummary, PropulsionError> {
            let perf = self.engines.performance(regime);
            Ok(RegimeSummary {
                delta_v_m_s: delta_v(dry_mass_t, full_mass_t, perf.isp_s)?,
                twr: thrust_to_weight(self.body, full_mass_t, &[perf.thrust_n * stacks])?,
            })
        };

        Ok(StageSummary {
            stack_dry_t,
            stack_full_t,
            dry_mass_t,
            full_mass_t,
            atmosphere: per_regime(Regime::Atmosphere)?,
            vacuum: per_regime(Regime::Vacuum)?,
            body: self.body.name,
        })
    }
}
