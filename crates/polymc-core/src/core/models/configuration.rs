use super::chain::ChainParameters;
use nalgebra::Point3;

/// A concrete spatial arrangement of a chain: one 3D position per bead.
///
/// Order is meaningful, bead `i` is bonded to bead `i + 1`. Equality is exact
/// per component, so two configurations compare equal only when they are
/// bitwise identical, which is what deterministic-replay tests rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    beads: Vec<Point3<f64>>,
}

impl Configuration {
    pub fn new(beads: Vec<Point3<f64>>) -> Self {
        Self { beads }
    }

    /// Builds the straight reference configuration for the given parameters:
    /// beads evenly spaced along the z axis, starting at the origin.
    pub fn straight(params: &ChainParameters) -> Self {
        let beads = (0..params.bead_count)
            .map(|i| Point3::new(0.0, 0.0, i as f64 * params.bond_length))
            .collect();
        Self { beads }
    }

    pub fn bead_count(&self) -> usize {
        self.beads.len()
    }

    pub fn beads(&self) -> &[Point3<f64>] {
        &self.beads
    }

    pub fn beads_mut(&mut self) -> &mut [Point3<f64>] {
        &mut self.beads
    }
}
