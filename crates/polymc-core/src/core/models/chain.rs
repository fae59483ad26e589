use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of beads for the bending term and the crankshaft move to be
/// defined.
pub const MIN_BEAD_COUNT: usize = 3;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParametersError {
    #[error("Chain must contain at least {MIN_BEAD_COUNT} beads, got {0}")]
    TooFewBeads(usize),

    #[error("Parameter `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// Physical parameters of a discretized semi-flexible chain.
///
/// Energies are expressed in units of kT; lengths are in whatever unit the
/// caller chooses for `bond_length`. `bond_length` is the equilibrium spacing
/// between consecutive beads, and the two stiffnesses scale the stretching
/// and bending penalties of the elastic model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainParameters {
    /// Number of beads in the chain.
    pub bead_count: usize,
    /// Equilibrium bond length between consecutive beads.
    pub bond_length: f64,
    /// Harmonic stretching stiffness per bond.
    pub stretch_stiffness: f64,
    /// Tangent-alignment bending stiffness per bond pair.
    pub bend_stiffness: f64,
}

impl ChainParameters {
    /// Checks that the parameters describe a physically meaningful chain.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` when the bead count is at least [`MIN_BEAD_COUNT`] and
    /// every continuous parameter is strictly positive (NaN is rejected).
    pub fn validate(&self) -> Result<(), ParametersError> {
        if self.bead_count < MIN_BEAD_COUNT {
            return Err(ParametersError::TooFewBeads(self.bead_count));
        }
        for (name, value) in [
            ("bond-length", self.bond_length),
            ("stretch-stiffness", self.stretch_stiffness),
            ("bend-stiffness", self.bend_stiffness),
        ] {
            if !(value > 0.0) {
                return Err(ParametersError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_parameters() -> ChainParameters {
        ChainParameters {
            bead_count: 10,
            bond_length: 1.0,
            stretch_stiffness: 10.0,
            bend_stiffness: 5.0,
        }
    }

    #[test]
    fn validate_accepts_physical_parameters() {
        assert_eq!(valid_parameters().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_too_few_beads() {
        let mut params = valid_parameters();
        params.bead_count = 2;
        assert_eq!(params.validate(), Err(ParametersError::TooFewBeads(2)));
    }

    #[test]
    fn validate_accepts_minimum_bead_count() {
        let mut params = valid_parameters();
        params.bead_count = MIN_BEAD_COUNT;
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_non_positive_bond_length() {
        let mut params = valid_parameters();
        params.bond_length = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ParametersError::NonPositive {
                name: "bond-length",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_negative_stiffness() {
        let mut params = valid_parameters();
        params.stretch_stiffness = -1.0;
        assert!(matches!(
            params.validate(),
            Err(ParametersError::NonPositive {
                name: "stretch-stiffness",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_nan_stiffness() {
        let mut params = valid_parameters();
        params.bend_stiffness = f64::NAN;
        assert!(matches!(
            params.validate(),
            Err(ParametersError::NonPositive {
                name: "bend-stiffness",
                ..
            })
        ));
    }
}
