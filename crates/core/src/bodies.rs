//! Static catalog of celestial bodies.

use serde::Serialize;
use thiserror::Error;

/// Physical description of a body a vehicle can launch from or orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialBody {
    pub name: &'static str,
    pub surface_gravity_m_s2: f64,
    pub mu_m3_s2: f64,
    pub radius_m: f64,
}

/// Catalog of known bodies, keyed by lowercase name.
pub const BODIES: &[CelestialBody] = &[
    CelestialBody {
        name: "kerbin",
        surface_gravity_m_s2: 9.82,
        mu_m3_s2: 3.531_642_3e12,
        radius_m: 600_000.0,
    },
    CelestialBody {
        name: "mun",
        surface_gravity_m_s2: 1.66,
        mu_m3_s2: 6.513_917_8e10,
        radius_m: 200_000.0,
    },
];

/// Errors raised while resolving catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown body '{name}' (expected one of: {expected})")]
    UnknownBody { name: String, expected: String },
}

/// Look up a body by name (case-insensitive).
pub fn body(name: &str) -> Result<&'static CelestialBody, CatalogError> {
    BODIES
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CatalogError::UnknownBody {
            name: name.to_string(),
            expected: body_names().collect::<Vec<_>>().join(", "),
        })
}

/// Names of every catalog body, in catalog order.
pub fn body_names() -> impl Iterator<Item = &'static str> {
    BODIES.iter().map(|b| b.name)
}
