//! Rocket equation, thrust-to-weight, and propellant flow.

use rocketry_core::CelestialBody;
use rocketry_core::constants::KSP_G0;
use rocketry_core::units::tonnes_to_kg;

use crate::PropulsionError;

/// Ideal delta-v (m/s) from the Tsiolkovsky rocket equation.
///
/// Masses share a unit (tonnes in practice); only their ratio matters. A full
/// mass below the empty mass yields a negative result, which is returned as is.
pub fn delta_v(empty_t: f64, full_t: f64, isp_s: f64) -> Result<f64, PropulsionError> {
    ensure_finite("empty mass", empty_t)?;
    ensure_finite("full mass", full_t)?;
    ensure_finite("specific impulse", isp_s)?;
    if !(empty_t > 0.0) {
        return Err(PropulsionError::NonPositiveMass(empty_t));
    }
    if !(full_t > 0.0) {
        return Err(PropulsionError::NonPositiveMass(full_t));
    }
    if !(isp_s > 0.0) {
        return Err(PropulsionError::NonPositiveIsp(isp_s));
    }
    let dv = isp_s * KSP_G0 * (full_t / empty_t).ln();
    ensure_finite("delta-v", dv)?;
    Ok(dv)
}

/// Thrust-to-weight ratio of a vehicle of `mass_t` tonnes on `body`'s surface.
///
/// Thrusts are in newtons and summed before dividing.
pub fn thrust_to_weight(
    body: &CelestialBody,
    mass_t: f64,
    thrusts_n: &[f64],
) -> Result<f64, PropulsionError> {
    if thrusts_n.is_empty() {
        return Err(PropulsionError::NoThrust);
    }
    for &thrust in thrusts_n {
        ensure_finite("thrust", thrust)?;
    }
    ensure_finite("mass", mass_t)?;
    if !(mass_t > 0.0) {
        return Err(PropulsionError::NonPositiveMass(mass_t));
    }
    let thrust: f64 = thrusts_n.iter().sum();
    let twr = thrust / (tonnes_to_kg(mass_t) * body.surface_gravity_m_s2);
    ensure_finite("thrust-to-weight ratio", twr)?;
    Ok(twr)
}

/// Propellant mass flow (kg/s) for a given thrust and specific impulse.
pub fn mass_flow(thrust_n: f64, isp_s: f64) -> Result<f64, PropulsionError> {
    ensure_finite("thrust", thrust_n)?;
    ensure_finite("specific impulse", isp_s)?;
    if !(isp_s > 0.0) {
        return Err(PropulsionError::NonPositiveIsp(isp_s));
    }
    Ok(thrust_n / (isp_s * KSP_G0))
}

/// Reject NaN and infinities before they reach the arithmetic.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), PropulsionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PropulsionError::NonFinite { field, value })
    }
}
