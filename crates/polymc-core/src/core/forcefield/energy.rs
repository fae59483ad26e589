use super::potentials;
use crate::core::models::chain::ChainParameters;
use crate::core::models::configuration::Configuration;
use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnergyCalculationError {
    #[error("Bond {index} has zero length (coincident beads), its tangent is undefined")]
    DegenerateBond { index: usize },
}

/// Total elastic energy of a configuration, in units of kT.
///
/// Sums the harmonic stretching penalty over the N-1 bonds and the
/// tangent-alignment bending penalty over the N-2 adjacent bond pairs. The
/// straight, unstretched chain is the ground state with energy exactly
/// `-bend_stiffness * (N - 2)`.
pub fn total_energy(
    configuration: &Configuration,
    params: &ChainParameters,
) -> Result<f64, EnergyCalculationError> {
    let beads = configuration.beads();
    let mut energy = 0.0;
    let mut prev_tangent: Option<Vector3<f64>> = None;

    for (index, pair) in beads.windows(2).enumerate() {
        let bond = pair[1] - pair[0];
        let length = bond.norm();
        if length <= f64::EPSILON {
            return Err(EnergyCalculationError::DegenerateBond { index });
        }

        energy += potentials::harmonic_stretch(length, params.bond_length, params.stretch_stiffness);

        let tangent = bond / length;
        if let Some(prev) = &prev_tangent {
            energy += potentials::tangent_alignment(prev, &tangent, params.bend_stiffness);
        }
        prev_tangent = Some(tangent);
    }

    Ok(energy)
}
