use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter `{0}` must be positive")]
    NotPositive(&'static str),
}

/// Controls for one sampling run.
///
/// Burn-in and thinning are expressed in sweeps: one sweep is `bead_count`
/// proposals, so the spacing between stored samples scales with the chain
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of configurations to collect.
    pub sample_count: usize,
    /// Sweeps discarded before the first sample is stored.
    pub burn_in: usize,
    /// Sweeps between consecutive stored samples.
    pub thinning: usize,
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::NotPositive("sample-count"));
        }
        if self.thinning == 0 {
            return Err(ConfigError::NotPositive("thinning"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SamplingConfigBuilder {
    sample_count: Option<usize>,
    burn_in: Option<usize>,
    thinning: Option<usize>,
}

impl SamplingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample_count(mut self, count: usize) -> Self {
        self.sample_count = Some(count);
        self
    }
    pub fn burn_in(mut self, sweeps: usize) -> Self {
        self.burn_in = Some(sweeps);
        self
    }
    pub fn thinning(mut self, sweeps: usize) -> Self {
        self.thinning = Some(sweeps);
        self
    }

    pub fn build(self) -> Result<SamplingConfig, ConfigError> {
        let config = SamplingConfig {
            sample_count: self
                .sample_count
                .ok_or(ConfigError::MissingParameter("sample_count"))?,
            burn_in: self.burn_in.unwrap_or(0),
            thinning: self
                .thinning
                .ok_or(ConfigError::MissingParameter("thinning"))?,
        };
        config.validate()?;
        Ok(config)
    }
}
