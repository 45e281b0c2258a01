use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Lukasz Mentel",
    version,
    about = "SRBO CLI - Generate space-reduced bond-order grids for sampling diatomic potential-energy curves.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the grid, print its summary and optionally write it as CSV.
    Generate(GenerateArgs),
    /// Sample the reference potential over the grid interval for plotting.
    Curve(CurveArgs),
}

/// Molecule, boundary and grid settings shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct SystemArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Molecule ---
    /// Equilibrium bond length (e.g. in bohr).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub re: Option<f64>,

    /// Dissociation energy (e.g. in hartree).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub de: Option<f64>,

    /// Force constant at equilibrium (e.g. in hartree/bohr^2).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub ke: Option<f64>,

    // --- Boundaries ---
    /// Energy at rmin as a fraction of De.
    #[arg(long, value_name = "FLOAT")]
    pub v_fact: Option<f64>,

    /// Distance of V(rmax) below De, as a fraction of De.
    #[arg(long, value_name = "FLOAT")]
    pub v_thrs: Option<f64>,

    /// Use this inner boundary instead of solving for it.
    #[arg(long, value_name = "FLOAT")]
    pub rmin: Option<f64>,

    /// Use this outer boundary instead of solving for it.
    #[arg(long, value_name = "FLOAT")]
    pub rmax: Option<f64>,

    // --- Grid ---
    /// Number of points on the repulsive branch (r < Re).
    #[arg(long, value_name = "INT")]
    pub nrep: Option<usize>,

    /// Number of points on the attractive branch (r > Re).
    #[arg(long, value_name = "INT")]
    pub natt: Option<usize>,

    /// Branch ratio used to solve for beta. Defaults to natt / nrep.
    #[arg(short = 'f', long, value_name = "FLOAT")]
    pub branch_ratio: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.nrep=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Write the grid as CSV (index, distance, bond order, reference energy).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not print the summary report.
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for the `curve` subcommand.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Path for the CSV file with the sampled curve and the grid overlay.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of evenly spaced samples between rmin and rmax.
    #[arg(short = 'n', long, value_name = "INT")]
    pub samples: Option<usize>,
}
