use rocketry_calculator::bodies::{CatalogError, body, body_names};
use rocketry_calculator::orbits::{OrbitError, circular_speed, orbital_speed};

#[test]
fn kerbin_surface_orbit_speed() {
    let kerbin = body("kerbin").unwrap();
    let speed = orbital_speed(kerbin, 0.0).unwrap();
    assert!((speed - (3.531_642_3e12_f64 / 600_000.0).sqrt()).abs() < 1e-9);
    assert!((speed - 2426.12).abs() < 0.01, "speed = {speed}");
}

#[test]
fn speed_drops_with_altitude() {
    let mun = body("mun").unwrap();
    let low = orbital_speed(mun, 10_000.0).unwrap();
    let high = orbital_speed(mun, 50_000.0).unwrap();
    assert!((low - 556.94).abs() < 0.01, "low = {low}");
    assert!(high < low);
}

#[test]
fn orbit_below_centre_is_rejected() {
    let mun = body("mun").unwrap();
    assert_eq!(
        orbital_speed(mun, -200_000.0),
        Err(OrbitError::NonPositiveRadius(0.0))
    );
    assert!(circular_speed(1.0, -5.0).is_err());
}

#[test]
fn non_finite_altitude_is_rejected() {
    let kerbin = body("kerbin").unwrap();
    assert_eq!(
        orbital_speed(kerbin, f64::INFINITY),
        Err(OrbitError::NonFiniteRadius(f64::INFINITY))
    );
    assert!(matches!(
        orbital_speed(kerbin, f64::NAN),
        Err(OrbitError::NonFiniteRadius(_))
    ));
}

#[test]
fn body_catalog_lookup() {
    assert_eq!(body_names().collect::<Vec<_>>(), ["kerbin", "mun"]);
    assert_eq!(body("Kerbin").unwrap().surface_gravity_m_s2, 9.82);
    match body("duna") {
        Err(CatalogError::UnknownBody { name, expected }) => {
            assert_eq!(name, "duna");
            assert_eq!(expected, "kerbin, mun");
        }
        other => panic!("unexpected lookup result: {other:?}"),
    }
}
