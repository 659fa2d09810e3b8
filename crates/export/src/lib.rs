//! Rendering helpers for calculator results.
//!
//! Every command builds a [`report::Report`] up front and writes it in one go,
//! so a failed computation never leaves partial output behind.

pub mod report {
    use std::io::{self, Write};

    use rocketry_core::CelestialBody;
    use rocketry_propulsion::{Engine, StageSummary};
    use serde::Serialize;

    /// Output encoding for a report.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum OutputFormat {
        #[default]
        Text,
        /// One JSON object per report, on a single line.
        Json,
    }

    /// Result of one calculator command.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(tag = "command", rename_all = "kebab-case")]
    pub enum Report {
        DeltaV {
            delta_v_m_s: f64,
        },
        Twr {
            body: &'static str,
            twr: f64,
        },
        OrbitalSpeed {
            body: &'static str,
            altitude_m: f64,
            speed_m_s: f64,
        },
        Stage(StageSummary),
        MassFlow {
            engine: &'static str,
            mass_flow_kg_s: f64,
        },
        Bodies {
            bodies: Vec<CelestialBody>,
        },
        Engines {
            engines: Vec<Engine>,
        },
    }

    impl Report {
        /// Write the report in the requested format.
        pub fn render(&self, format: OutputFormat, writer: &mut dyn Write) -> io::Result<()> {
            match format {
                OutputFormat::Text => self.write_text(writer),
                OutputFormat::Json => self.write_json(writer),
            }
        }

        /// Human-readable rendering.
        ///
        /// Masses are shown to one decimal, stage delta-v is truncated to whole
        /// m/s, everything else uses two decimals (three for mass flow).
        pub fn write_text(&self, writer: &mut dyn Write) -> io::Result<()> {
            match self {
                Report::DeltaV { delta_v_m_s } => {
                    writeln!(writer, "Δv = {:.2} m/s", unsigned_zero(*delta_v_m_s, 2))
                }
                Report::Twr { twr, .. } => writeln!(writer, "TWR = {:.2}", unsigned_zero(*twr, 2)),
                Report::OrbitalSpeed { speed_m_s, .. } => {
                    writeln!(writer, "Speed = {:.2} m/s", unsigned_zero(*speed_m_s, 2))
                }
                Report::Stage(stage) => {
                    writeln!(writer, "Dry mass:   {:.1} t", stage.dry_mass_t)?;
                    writeln!(writer, "Total mass: {:.1} t", stage.full_mass_t)?;
                    writeln!(
                        writer,
                        "Δv (atm):   {:.0} m/s",
                        unsigned_zero(stage.atmosphere.delta_v_m_s.floor(), 0)
                    )?;
                    writeln!(
                        writer,
                        "Δv (vac):   {:.0} m/s",
                        unsigned_zero(stage.vacuum.delta_v_m_s.floor(), 0)
                    )?;
                    writeln!(
                        writer,
                        "TWR (atm):  {:.2} ({})",
                        unsigned_zero(stage.atmosphere.twr, 2),
                        stage.body
                    )?;
                    writeln!(
                        writer,
                        "TWR (vac):  {:.2} ({})",
                        unsigned_zero(stage.vacuum.twr, 2),
                        stage.body
                    )
                }
                Report::MassFlow { mass_flow_kg_s, .. } => {
                    writeln!(writer, "Mass flow: {:.3} kg/s", unsigned_zero(*mass_flow_kg_s, 3))
                }
                Report::Bodies { bodies } => {
                    for body in bodies {
                        writeln!(
                            writer,
                            "{:<8} g0 = {:.2} m/s², mu = {:e} m³/s², radius = {} m",
                            body.name, body.surface_gravity_m_s2, body.mu_m3_s2, body.radius_m
                        )?;
                    }
                    Ok(())
                }
                Report::Engines { engines } => {
                    for engine in engines {
                        writeln!(
                            writer,
                            "{:<7} {:<18} isp {:.0}/{:.0} s, thrust {:.2}/{:.2} kN, mass {:.2} t",
                            engine.name,
                            engine.title,
                            engine.isp_atm_s,
                            engine.isp_vac_s,
                            engine.thrust_atm_n / 1_000.0,
                            engine.thrust_vac_n / 1_000.0,
                            engine.mass_t
                        )?;
                    }
                    Ok(())
                }
            }
        }

        /// Machine-readable rendering.
        pub fn write_json(&self, writer: &mut dyn Write) -> io::Result<()> {
            serde_json::to_writer(&mut *writer, self)?;
            writeln!(writer)
        }
    }

    /// Values that would print as zero are shown without a sign.
    fn unsigned_zero(value: f64, decimals: i32) -> f64 {
        let scale = 10_f64.powi(decimals);
        if (value * scale).round() == 0.0 {
            0.0
        } else {
            value
        }
    }
}
