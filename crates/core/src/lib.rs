//! Core units, constants, and the celestial body catalog shared across the rocketry workspace.

pub mod bodies;

pub use bodies::{BODIES, CatalogError, CelestialBody, body, body_names};

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity used to turn specific impulse into exhaust velocity (m/s²).
    ///
    /// Kerbal rounding of the terrestrial 9.80665.
    pub const KSP_G0: f64 = 9.82;
    /// Kilograms per metric tonne.
    pub const KG_PER_TONNE: f64 = 1_000.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::KG_PER_TONNE;

    /// Convert tonnes to kilograms.
    #[inline]
    pub fn tonnes_to_kg(v: f64) -> f64 {
        v * KG_PER_TONNE
    }
}
