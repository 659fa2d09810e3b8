//! Rocketry mechanics calculator.
//!
//! Façade over the workspace crates so front-ends depend on a single library:
//! body and engine catalogs, the rocket equation, thrust-to-weight, orbital
//! speed, and stage sizing.

pub use rocketry_core::{bodies, constants, units};
pub use rocketry_export as export;
pub use rocketry_orbits as orbits;
pub use rocketry_propulsion as propulsion;

/// Any failure surfaced by the calculator library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalog lookup failed: {0}")]
    Catalog(#[from] rocketry_core::CatalogError),
    #[error("propulsion calculation failed: {0}")]
    Propulsion(#[from] rocketry_propulsion::PropulsionError),
    #[error("orbit calculation failed: {0}")]
    Orbit(#[from] rocketry_orbits::OrbitError),
}

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
