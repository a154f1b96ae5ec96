mod commands;

use clap::Parser;
use legendre_core::domain::{LegendreError, LegendreErrorCategory};

pub fn run_from_env() -> i32 {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let full_args = std::iter::once("legendre-rs".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "legendre-rs",
    about = "Fully normalized associated Legendre function evaluator"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Evaluate the full normalized ALF table at one point
    Eval(commands::EvalArgs),
    /// Evaluate the surface spherical-harmonic basis at a geographic point
    Basis(commands::BasisArgs),
    /// Map a degree/order pair to its linear storage slot
    Index(commands::IndexArgs),
    /// Map a linear storage slot back to its degree/order pair
    Invert(commands::InvertArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Eval(args) => {
            tracing::info!(nmax = args.nmax, costheta = args.costheta, "running eval");
            commands::run_eval_command(args)
        }
        CliCommand::Basis(args) => {
            tracing::info!(nmax = args.nmax, lon = args.lon, lat = args.lat, "running basis");
            commands::run_basis_command(args)
        }
        CliCommand::Index(args) => commands::run_index_command(args),
        CliCommand::Invert(args) => commands::run_invert_command(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(#[from] LegendreError),
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => LegendreErrorCategory::InputValidationError.exit_code(),
            Self::Compute(error) => error.exit_code(),
            Self::Io(_) => LegendreErrorCategory::IoSystemError.exit_code(),
        }
    }

    fn diagnostic_line(&self) -> String {
        match self {
            Self::Usage(message) => format!("ERROR: {message}"),
            Self::Compute(error) => format!("ERROR: {error}"),
            Self::Io(error) => format!("ERROR: {error:#}"),
        }
    }
}
