use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::energy::EnergyCalculationError;
use crate::core::models::chain::ParametersError;
use crate::core::utils::geometry::InvalidAngularScale;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid chain parameters: {source}")]
    Parameters {
        #[from]
        source: ParametersError,
    },

    #[error("Invalid sampling configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyCalculationError,
    },

    #[error("Rotation construction failed: {source}")]
    Geometry {
        #[from]
        source: InvalidAngularScale,
    },
}
