//! faultvec CLI - Fault slip and normal vectors.
//!
//! Evaluates the slip direction and fault normal of a single fault orientation
//! in the Aki & Richards North-East-Down frame.

use clap::{Parser, Subcommand, ValueEnum};

use tracing_subscriber::EnvFilter;

use faultvec::{AngleKind, FaultOrientation, FaultVectors, MechanismConfig, MechanismError};

/// Fault slip and normal vectors from strike, dip and rake.
#[derive(Parser)]
#[command(name = "faultvec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the slip vector u and fault normal v.
    Uv {
        /// Strike in degrees, clockwise from North.
        #[arg(short, long, allow_negative_numbers = true)]
        strike: f64,

        /// Dip in degrees below horizontal.
        #[arg(short, long, allow_negative_numbers = true)]
        dip: f64,

        /// Rake in degrees, measured in the fault plane from strike.
        #[arg(short, long, allow_negative_numbers = true)]
        rake: f64,

        /// Input validation policy.
        #[arg(short, long, default_value = "reference")]
        mode: Mode,
    },

    /// Display the frame convention and angle domains.
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Accept any angles unchanged.
    Reference,
    /// Wrap strike and rake; reject dip outside [0, 90].
    Lenient,
    /// Reject any angle outside its domain.
    Strict,
}

impl From<Mode> for MechanismConfig {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Reference => MechanismConfig::reference(),
            Mode::Lenient => MechanismConfig::lenient(),
            Mode::Strict => MechanismConfig::strict(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Uv { strike, dip, rake, mode } => run_uv(strike, dip, rake, mode),
        Commands::Info => run_info(),
    }
}

/// Uses `RUST_LOG` when it parses, `warn` otherwise.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn run_uv(strike: f64, dip: f64, rake: f64, mode: Mode) {
    let text = evaluate_uv(strike, dip, rake, mode).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", text);
}

fn evaluate_uv(strike: f64, dip: f64, rake: f64, mode: Mode) -> Result<String, MechanismError> {
    let config = MechanismConfig::from(mode);
    let fault = FaultOrientation::new(strike, dip, rake);
    tracing::debug!("evaluating {:?} with {:?}", fault, config);

    Ok(format_vectors(&fault.checked_vectors(&config)?))
}

fn format_vectors(vectors: &FaultVectors) -> String {
    let (u, v) = vectors.to_arrays();
    format!(
        "u = [{:.8}, {:.8}, {:.8}]\nv = [{:.8}, {:.8}, {:.8}]\n",
        u[0], u[1], u[2], v[0], v[1], v[2]
    )
}

fn run_info() {
    println!("faultvec - Fault Vector Conventions");
    println!("===================================");
    println!();
    println!("Frame: right-handed, x = North, y = East, z = Down (Aki & Richards, 1980)");
    println!("  u: slip direction (unit vector)");
    println!("  v: fault normal (unit vector)");
    println!();
    println!("Angle domains (degrees):");
    for kind in AngleKind::all() {
        println!("  {:<7} {}", kind.name(), kind.domain());
    }
}
