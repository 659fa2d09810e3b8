//! Circular orbit helpers.
use rocketry_core::CelestialBody;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("orbit radius must be positive (got {0} m)")]
    NonPositiveRadius(f64),
    #[error("orbit radius must be finite (got {0} m)")]
    NonFiniteRadius(f64),
}

/// Speed (m/s) of a circular orbit of radius `radius_m` about a body with parameter `mu_m3_s2`.
pub fn circular_speed(mu_m3_s2: f64, radius_m: f64) -> Result<f64, OrbitError> {
    if !radius_m.is_finite() {
        return Err(OrbitError::NonFiniteRadius(radius_m));
    }
    if !(radius_m > 0.0) {
        return Err(OrbitError::NonPositiveRadius(radius_m));
    }
    Ok((mu_m3_s2 / radius_m).sqrt())
}

/// Speed (m/s) of a circular orbit `altitude_m` above the surface of `body`.
pub fn orbital_speed(body: &CelestialBody, altitude_m: f64) -> Result<f64, OrbitError> {
    circular_speed(body.mu_m3_s2, body.radius_m + altitude_m)
}
