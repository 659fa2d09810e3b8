use std::io::{self, Write};

use anyhow::Context;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rocketry_calculator::bodies::body_names;
use rocketry_calculator::export::report::OutputFormat;
use rocketry_calculator::propulsion::engine_names;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[path = "rocketry/commands.rs"]
mod commands;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rocketry calculator (delta-v, TWR, orbital speed, stage sizing)"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute Δv from empty mass, full mass, and specific impulse.
    #[command(allow_negative_numbers = true)]
    Dv {
        /// Empty (dry) mass in tonnes
        empty: f64,
        /// Full (wet) mass in tonnes
        full: f64,
        /// Specific impulse in seconds
        isp: f64,
    },
    /// Compute thrust-to-weight ratio on a body's surface.
    #[command(allow_negative_numbers = true)]
    Twr {
        #[arg(value_parser = PossibleValuesParser::new(body_names()))]
        body: String,
        /// Vehicle mass in tonnes
        mass: f64,
        /// Engine thrusts in newtons (summed)
        #[arg(required = true)]
        thrust: Vec<f64>,
    },
    /// Compute speed of a circular orbit at the given height above a body.
    #[command(allow_negative_numbers = true)]
    OrbitalSpd {
        #[arg(value_parser = PossibleValuesParser::new(body_names()))]
        body: String,
        /// Altitude above the surface in metres
        height: f64,
    },
    /// Compute stage masses, Δv, and TWR for a given configuration.
    #[command(allow_negative_numbers = true)]
    Stage(StageArgs),
    /// Compute vacuum propellant mass flow of a catalog engine.
    MassFlow {
        #[arg(value_parser = PossibleValuesParser::new(engine_names()))]
        engine: String,
    },
    /// List known celestial bodies.
    Bodies,
    /// List known engines.
    Engines,
}

#[derive(Args, Debug)]
struct StageArgs {
    /// Payload mass in tonnes
    payload: f64,
    /// Dry mass of one tank in tonnes
    tank_dry: f64,
    /// Full mass of one tank in tonnes
    tank_full: f64,
    /// Tanks per stack
    n_tanks: f64,

    /// Engines mounted on each stack (repeat a name to mount several)
    #[arg(
        value_parser = PossibleValuesParser::new(engine_names()),
        required_unless_present = "thrust",
        conflicts_with = "thrust"
    )]
    engines: Vec<String>,

    /// Explicit per-stack thrust in newtons instead of catalog engines
    #[arg(long, requires = "isp")]
    thrust: Option<f64>,

    /// Specific impulse in seconds for --thrust
    #[arg(long, requires = "thrust")]
    isp: Option<f64>,

    /// Engine mass in tonnes for --thrust (defaults to 0)
    #[arg(long, requires = "thrust")]
    engine_mass: Option<f64>,

    /// Number of identical engine + tank stacks
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    stacks: u32,

    /// Body used for TWR
    #[arg(long, default_value = "kerbin", value_parser = PossibleValuesParser::new(body_names()))]
    body: String,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(command = ?cli.command, format = ?cli.format, "dispatching");

    let report = commands::run(&cli.command)?;

    let mut stdout = io::stdout().lock();
    report
        .render(cli.format.into(), &mut stdout)
        .context("failed to write report")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
