use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "polymc - Metropolis Monte Carlo sampling of equilibrium configurations of coarse-grained semi-flexible polymer chains.",
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
    /// Sample equilibrium chain configurations with the Metropolis kernel.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Chain Overrides ---
    /// Override the number of beads in the chain.
    #[arg(short = 'n', long, value_name = "INT")]
    pub beads: Option<usize>,

    /// Override the equilibrium bond length between consecutive beads.
    #[arg(short = 'a', long, value_name = "FLOAT")]
    pub bond_length: Option<f64>,

    /// Override the harmonic stretching stiffness, in kT per squared length.
    #[arg(long, value_name = "FLOAT")]
    pub stretch_stiffness: Option<f64>,

    /// Override the tangent-alignment bending stiffness, in kT.
    #[arg(long, value_name = "FLOAT")]
    pub bend_stiffness: Option<f64>,

    // --- Sampling Overrides ---
    /// Override the number of configurations to collect.
    #[arg(short = 's', long, value_name = "INT")]
    pub samples: Option<usize>,

    /// Override the burn-in, in sweeps discarded before the first sample.
    #[arg(long, value_name = "INT")]
    pub burn_in: Option<usize>,

    /// Override the thinning stride between stored samples, in sweeps.
    #[arg(long, value_name = "INT")]
    pub thinning: Option<usize>,

    /// Seed for the random number generator; omit for an entropy seed.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}
