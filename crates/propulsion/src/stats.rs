//! Combined performance of engines firing in parallel.

use rocketry_core::constants::KSP_G0;
use serde::Serialize;
use tracing::debug;

use crate::PropulsionError;
use crate::engines::{Engine, Regime};
use crate::rocket::{ensure_finite, mass_flow};

/// Thrust and specific impulse pair for one regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Performance {
    pub thrust_n: f64,
    pub isp_s: f64,
}

impl Performance {
    /// Propellant consumption (kg/s) at full throttle.
    pub fn mass_flow_kg_s(&self) -> Result<f64, PropulsionError> {
        mass_flow(self.thrust_n, self.isp_s)
    }
}

/// Aggregate thrust, specific impulse, and mass of a cluster of engines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineStats {
    pub atmosphere: Performance,
    pub vacuum: Performance,
    pub mass_t: f64,
}

impl EngineStats {
    /// Combine catalog engines firing together.
    ///
    /// Thrusts add up. The effective specific impulse is total thrust over total
    /// mass flow, which weights each engine by its propellant consumption rather
    /// than averaging the isp values.
    pub fn combine(engines: &[&Engine]) -> Result<Self, PropulsionError> {
        if engines.is_empty() {
            return Err(PropulsionError::NoEngines);
        }

        let stats = EngineStats {
            atmosphere: combine_regime(engines, Regime::Atmosphere)?,
            vacuum: combine_regime(engines, Regime::Vacuum)?,
            mass_t: engines.iter().map(|e| e.mass_t).sum(),
        };
        debug!(
            engines = engines.len(),
            thrust_atm_n = stats.atmosphere.thrust_n,
            thrust_vac_n = stats.vacuum.thrust_n,
            isp_atm_s = stats.atmosphere.isp_s,
            isp_vac_s = stats.vacuum.isp_s,
            "combined engine cluster"
        );
        Ok(stats)
    }

    /// Stats for an engine described only by thrust and isp, identical in every regime.
    pub fn uniform(thrust_n: f64, isp_s: f64, mass_t: f64) -> Result<Self, PropulsionError> {
        ensure_finite("thrust", thrust_n)?;
        ensure_finite("specific impulse", isp_s)?;
        ensure_finite("engine mass", mass_t)?;
        if !(isp_s > 0.0) {
            return Err(PropulsionError::NonPositiveIsp(isp_s));
        }
        if thrust_n < 0.0 {
            return Err(PropulsionError::NegativeQuantity {
                field: "thrust",
                value: thrust_n,
            });
        }
        if mass_t < 0.0 {
            return Err(PropulsionError::NegativeQuantity {
                field: "engine mass",
                value: mass_t,
            });
        }
        let performance = Performance { thrust_n, isp_s };
        Ok(EngineStats {
            atmosphere: performance,
            vacuum: performance,
            mass_t,
        })
    }

    pub fn performance(&self, regime: Regime) -> Performance {
        match regime {
            Regime::Atmosphere => self.atmosphere,
            Regime::Vacuum => self.vacuum,
        }
    }
}

fn combine_regime(engines: &[&Engine], regime: Regime) -> Result<Performance, PropulsionError> {
    let mut thrust_n = 0.0;
    let mut flow_kg_s = 0.0;
    for engine in engines {
        let perf = engine.performance(regime);
        thrust_n += perf.thrust_n;
        flow_kg_s += perf.mass_flow_kg_s()?;
    }
    // flow carries a g0 factor; cancel it so the ratio comes out in seconds
    let isp_s = thrust_n / (flow_kg_s * KSP_G0);
    Ok(Performance { thrust_n, isp_s })
}
