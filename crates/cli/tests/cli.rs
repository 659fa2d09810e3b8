use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("rocketry");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn dv_prints_delta_v() {
    cli()
        .args(["dv", "1.5", "3", "300"])
        .assert()
        .success()
        .stdout("Δv = 2042.01 m/s\n");
}

#[test]
fn dv_with_inverted_masses_is_negative() {
    cli()
        .args(["dv", "3", "1.5", "300"])
        .assert()
        .success()
        .stdout("Δv = -2042.01 m/s\n");
}

#[test]
fn dv_with_zero_mass_fails_without_output() {
    cli()
        .args(["dv", "0", "3", "300"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("mass must be positive"));
}

#[test]
fn twr_sums_thrust_arguments() {
    cli()
        .args(["twr", "kerbin", "10", "100000", "100000"])
        .assert()
        .success()
        .stdout("TWR = 2.04\n");
}

#[test]
fn twr_rejects_unknown_body_before_computing() {
    cli()
        .args(["twr", "duna", "10", "100000"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("invalid value 'duna'"));
}

#[test]
fn orbital_speed_for_kerbin_surface() {
    cli()
        .args(["orbital-spd", "kerbin", "0"])
        .assert()
        .success()
        .stdout("Speed = 2426.12 m/s\n");
}

#[test]
fn stage_with_catalog_engine() {
    cli()
        .args(["stage", "2.02", "0.5", "4.5", "2", "lv-t30"])
        .assert()
        .success()
        .stdout(
            "Dry mass:   4.3 t\n\
             Total mass: 12.3 t\n\
             Δv (atm):   2746 m/s\n\
             Δv (vac):   3213 m/s\n\
             TWR (atm):  1.71 (kerbin)\n\
             TWR (vac):  1.99 (kerbin)\n",
        );
}

#[test]
fn stage_with_stacks_and_body() {
    cli()
        .args([
            "stage", "2.02", "0.5", "4.5", "2", "lv-t30", "--stacks", "2", "--body", "mun",
        ])
        .assert()
        .success()
        .stdout(contains("Dry mass:   6.5 t"))
        .stdout(contains("Total mass: 22.5 t"))
        .stdout(contains("Δv (vac):   3773 m/s"))
        .stdout(contains("(mun)"));
}

#[test]
fn stage_with_explicit_thrust() {
    cli()
        .args([
            "stage",
            "5",
            "0.5",
            "4",
            "4",
            "--thrust",
            "250000",
            "--isp",
            "300",
            "--engine-mass",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("Δv (atm):   2980 m/s"))
        .stdout(contains("Δv (vac):   2980 m/s"))
        .stdout(contains("TWR (vac):  1.16 (kerbin)"));
}

#[test]
fn stage_requires_engines_or_thrust() {
    cli()
        .args(["stage", "2", "0.5", "4.5", "2"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn stage_rejects_unknown_engine() {
    cli()
        .args(["stage", "2", "0.5", "4.5", "2", "lv-t30", "mainsail"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid value 'mainsail'"));
}

#[test]
fn stage_rejects_zero_stacks() {
    cli()
        .args(["stage", "2", "0.5", "4.5", "2", "lv-t30", "--stacks", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn mass_flow_for_reliant() {
    cli()
        .args(["mass-flow", "lv-t30"])
        .assert()
        .success()
        .stdout("Mass flow: 78.838 kg/s\n");
}

#[test]
fn catalogs_are_listed() {
    cli()
        .arg("bodies")
        .assert()
        .success()
        .stdout(contains("kerbin"))
        .stdout(contains("mun"));
    cli()
        .arg("engines")
        .assert()
        .success()
        .stdout(contains("lv-t45"))
        .stdout(contains("Swivel"));
}

#[test]
fn json_output_carries_stage_numbers() {
    let output = cli()
        .args(["--format", "json", "stage", "2.02", "0.5", "4.5", "2", "lv-t30"])
        .output()
        .expect("run rocketry");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["command"], "stage");
    assert_eq!(value["body"], "kerbin");
    let dry = value["dry_mass_t"].as_f64().expect("dry mass");
    assert!((dry - 4.27).abs() < 1e-9);
    let dv_vac = value["vacuum"]["delta_v_m_s"].as_f64().expect("vacuum dv");
    assert_eq!(dv_vac.floor(), 3213.0);
}

#[test]
fn non_finite_thrust_fails_without_output() {
    cli()
        .args(["stage", "2", "0.5", "4.5", "2", "--thrust", "nan", "--isp", "300"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("thrust must be finite"));
}

#[test]
fn infinite_masses_fail_without_output() {
    cli()
        .args(["dv", "inf", "inf", "300"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("must be finite"));
}

#[test]
fn stage_reports_negative_payload_from_library() {
    cli()
        .args(["stage", "-1", "0.5", "4.5", "2", "lv-t30"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("payload must not be negative"));
}

#[test]
fn tiny_negative_twr_prints_unsigned_zero() {
    cli()
        .args(["twr", "kerbin", "10", "-5"])
        .assert()
        .success()
        .stdout("TWR = 0.00\n");
}
