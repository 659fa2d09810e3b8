//! Static catalog of liquid-fuel engines.

use serde::Serialize;

use crate::PropulsionError;
use crate::stats::Performance;

/// Operating regime an engine figure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Sea level at Kerbin.
    Atmosphere,
    Vacuum,
}

/// Rated performance of a single engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Engine {
    pub name: &'static str,
    pub title: &'static str,
    pub isp_atm_s: f64,
    pub isp_vac_s: f64,
    pub thrust_atm_n: f64,
    pub thrust_vac_n: f64,
    pub mass_t: f64,
}

impl Engine {
    /// Thrust and specific impulse for the given regime.
    pub fn performance(&self, regime: Regime) -> Performance {
        match regime {
            Regime::Atmosphere => Performance {
                thrust_n: self.thrust_atm_n,
                isp_s: self.isp_atm_s,
            },
            Regime::Vacuum => Performance {
                thrust_n: self.thrust_vac_n,
                isp_s: self.isp_vac_s,
            },
        }
    }
}

/// Catalog of known engines, keyed by part name.
pub const ENGINES: &[Engine] = &[
    Engine {
        name: "lv-t30",
        title: "LV-T30 \"Reliant\"",
        isp_atm_s: 265.0,
        isp_vac_s: 310.0,
        thrust_atm_n: 205.67e3,
        thrust_vac_n: 240.0e3,
        mass_t: 1.25,
    },
    Engine {
        name: "lv-t45",
        title: "LV-T45 \"Swivel\"",
        isp_atm_s: 250.0,
        isp_vac_s: 320.0,
        thrust_atm_n: 168.75e3,
        thrust_vac_n: 215.0e3,
        mass_t: 1.5,
    },
    Engine {
        name: "lv-909",
        title: "LV-909 \"Terrier\"",
        isp_atm_s: 85.0,
        isp_vac_s: 345.0,
        thrust_atm_n: 14.753e3,
        thrust_vac_n: 60.0e3,
        mass_t: 0.5,
    },
];

/// Look up an engine by part name (case-insensitive).
pub fn engine(name: &str) -> Result<&'static Engine, PropulsionError> {
    ENGINES
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PropulsionError::UnknownEngine {
            name: name.to_string(),
            expected: engine_names().collect::<Vec<_>>().join(", "),
        })
}

/// Names of every catalog engine, in catalog order.
pub fn engine_names() -> impl Iterator<Item = &'static str> {
    ENGINES.iter().map(|e| e.name)
}
