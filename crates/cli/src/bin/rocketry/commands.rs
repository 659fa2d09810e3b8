use rocketry_calculator::Error;
use rocketry_calculator::bodies::{self, BODIES};
use rocketry_calculator::export::report::Report;
use rocketry_calculator::orbits::orbital_speed;
use rocketry_calculator::propulsion::{
    self, ENGINES, EngineStats, Regime, StageConfig, delta_v, thrust_to_weight,
};
use tracing::debug;

use super::{Command, StageArgs};

/// Evaluate a command into a report without printing anything.
pub(super) fn run(command: &Command) -> Result<Report, Error> {
    let report = match command {
        Command::Dv { empty, full, isp } => Report::DeltaV {
            delta_v_m_s: delta_v(*empty, *full, *isp)?,
        },
        Command::Twr { body, mass, thrust } => {
            let body = bodies::body(body)?;
            Report::Twr {
                body: body.name,
                twr: thrust_to_weight(body, *mass, thrust)?,
            }
        }
        Command::OrbitalSpd { body, height } => {
            let body = bodies::body(body)?;
            Report::OrbitalSpeed {
                body: body.name,
                altitude_m: *height,
                speed_m_s: orbital_speed(body, *height)?,
            }
        }
        Command::Stage(args) => Report::Stage(stage_config(args)?.summarize()?),
        Command::MassFlow { engine } => {
            let engine = propulsion::engine(engine)?;
            Report::MassFlow {
                engine: engine.name,
                mass_flow_kg_s: engine.performance(Regime::Vacuum).mass_flow_kg_s()?,
            }
        }
        Command::Bodies => Report::Bodies {
            bodies: BODIES.to_vec(),
        },
        Command::Engines => Report::Engines {
            engines: ENGINES.to_vec(),
        },
    };
    Ok(report)
}

fn stage_config(args: &StageArgs) -> Result<StageConfig, Error> {
    let body = bodies::body(&args.body)?;
    let engines = match (args.thrust, args.isp) {
        (Some(thrust), Some(isp)) => {
            EngineStats::uniform(thrust, isp, args.engine_mass.unwrap_or(0.0))?
        }
        _ => {
            let engines = args
                .engines
                .iter()
                .map(|name| propulsion::engine(name))
                .collect::<Result<Vec<_>, _>>()?;
            EngineStats::combine(&engines)?
        }
    };
    debug!(?engines, stacks = args.stacks, "resolved stage engines");

    Ok(StageConfig {
        payload_t: args.payload,
        tank_dry_t: args.tank_dry,
        tank_full_t: args.tank_full,
        tank_count: args.n_tanks,
        stacks: args.stacks,
        engines,
        body,
    })
}
