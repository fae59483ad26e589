use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use polymc::core::models::chain::ChainParameters;
use polymc::engine::config::{SamplingConfig, SamplingConfigBuilder};
use polymc::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Built-in defaults, used for every value neither the config file nor the
/// command line provides.
mod defaults {
    pub const BEADS: usize = 100;
    pub const BOND_LENGTH: f64 = 1.0;
    pub const STRETCH_STIFFNESS: f64 = 100.0;
    pub const BEND_STIFFNESS: f64 = 20.0;
    pub const SAMPLES: usize = 500;
    pub const BURN_IN: usize = 10;
    pub const THINNING: usize = 5;
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub chain: Option<FileChainConfig>,
    pub sampling: Option<FileSamplingConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileChainConfig {
    pub beads: Option<usize>,
    #[serde(rename = "bond-length")]
    pub bond_length: Option<f64>,
    #[serde(rename = "stretch-stiffness")]
    pub stretch_stiffness: Option<f64>,
    #[serde(rename = "bend-stiffness")]
    pub bend_stiffness: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSamplingConfig {
    pub samples: Option<usize>,
    #[serde(rename = "burn-in")]
    pub burn_in: Option<usize>,
    pub thinning: Option<usize>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::Error::new(e),
        })?;
        debug!("Loaded configuration file from {}.", path.display());
        Ok(config)
    }
}

/// The fully resolved inputs of one run.
pub struct AppConfig {
    pub chain: ChainParameters,
    pub sampling: SamplingConfig,
    pub seed: Option<u64>,
}

/// Resolves the layered configuration: built-in defaults, overridden by the
/// TOML file, overridden by command-line flags.
pub fn build_config(args: &RunArgs) -> Result<AppConfig> {
    let mut file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let chain_file = file_config.chain.take().unwrap_or_default();
    let sampling_file = file_config.sampling.take().unwrap_or_default();

    let chain = ChainParameters {
        bead_count: args.beads.or(chain_file.beads).unwrap_or(defaults::BEADS),
        bond_length: args
            .bond_length
            .or(chain_file.bond_length)
            .unwrap_or(defaults::BOND_LENGTH),
        stretch_stiffness: args
            .stretch_stiffness
            .or(chain_file.stretch_stiffness)
            .unwrap_or(defaults::STRETCH_STIFFNESS),
        bend_stiffness: args
            .bend_stiffness
            .or(chain_file.bend_stiffness)
            .unwrap_or(defaults::BEND_STIFFNESS),
    };
    chain.validate().map_err(EngineError::from)?;

    let sampling = SamplingConfigBuilder::new()
        .sample_count(
            args.samples
                .or(sampling_file.samples)
                .unwrap_or(defaults::SAMPLES),
        )
        .burn_in(
            args.burn_in
                .or(sampling_file.burn_in)
                .unwrap_or(defaults::BURN_IN),
        )
        .thinning(
            args.thinning
                .or(sampling_file.thinning)
                .unwrap_or(defaults::THINNING),
        )
        .build()
        .map_err(EngineError::from)?;

    Ok(AppConfig {
        chain,
        sampling,
        seed: args.seed.or(sampling_file.seed),
    })
}
