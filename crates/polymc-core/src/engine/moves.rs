use std::fmt;

use nalgebra::Vector3;
use rand::Rng;

use super::error::EngineError;
use crate::core::models::chain::ChainParameters;
use crate::core::models::configuration::Configuration;
use crate::core::utils::geometry;

/// How many independent suffix translations one local perturbation compounds.
const LOCAL_PERTURB_REPEATS: usize = 5;

/// Kind of move performed by the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Compound translation of random bead suffixes.
    LocalPerturb,
    /// Rigid rotation of the chain tail about a pivot bead.
    PivotRotate,
    /// Rotation of an interior segment about the axis through its endpoints.
    Crankshaft,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [
        MoveKind::LocalPerturb,
        MoveKind::PivotRotate,
        MoveKind::Crankshaft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::LocalPerturb => "local-perturb",
            MoveKind::PivotRotate => "pivot-rotate",
            MoveKind::Crankshaft => "crankshaft",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MoveKind::LocalPerturb => 0,
            MoveKind::PivotRotate => 1,
            MoveKind::Crankshaft => 2,
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Proposal step scales derived from the chain stiffnesses, sized so a
/// typical move costs on the order of one kT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProposalScales {
    /// Half-width of the displacement cube for local perturbations.
    pub displacement: f64,
    /// Angular scale of the random pivot rotation.
    pub rotation_angle: f64,
    /// Half-width of the crankshaft angle interval.
    pub crankshaft_angle: f64,
}

impl ProposalScales {
    pub fn from_parameters(params: &ChainParameters) -> Self {
        Self {
            displacement: 0.5 * (2.0 / params.stretch_stiffness).sqrt(),
            rotation_angle: 0.5 * (2.0 / params.bend_stiffness).sqrt(),
            crankshaft_angle: 0.5 * (2.0 / params.bend_stiffness).sqrt(),
        }
    }
}

/// Generates candidate configurations for the Metropolis loop.
///
/// A proposer never touches the accepted configuration: every kernel writes
/// into a caller-provided scratch buffer, so rejecting a proposal is a true
/// no-op on the chain state.
#[derive(Debug, Clone)]
pub struct MoveProposer {
    scales: ProposalScales,
}

impl MoveProposer {
    pub fn new(params: &ChainParameters) -> Self {
        Self {
            scales: ProposalScales::from_parameters(params),
        }
    }

    pub fn scales(&self) -> &ProposalScales {
        &self.scales
    }

    /// Copies `current` into `scratch` and applies one randomly chosen kernel
    /// to `scratch`, returning which kind was applied.
    pub fn propose<R: Rng>(
        &self,
        current: &Configuration,
        scratch: &mut Configuration,
        rng: &mut R,
    ) -> Result<MoveKind, EngineError> {
        scratch.clone_from(current);
        let p = rng.r#gen::<f64>();
        if p < 0.33 {
            self.local_perturb(scratch, rng);
            Ok(MoveKind::LocalPerturb)
        } else if p < 0.66 {
            self.pivot_rotate(scratch, rng)?;
            Ok(MoveKind::PivotRotate)
        } else {
            self.crankshaft(scratch, rng);
            Ok(MoveKind::Crankshaft)
        }
    }

    fn local_perturb<R: Rng>(&self, scratch: &mut Configuration, rng: &mut R) {
        let beads = scratch.beads_mut();
        let n = beads.len();
        for _ in 0..LOCAL_PERTURB_REPEATS {
            let pivot = rng.gen_range(0..n);
            let offset = 2.0
                * self.scales.displacement
                * Vector3::new(
                    rng.r#gen::<f64>() - 0.5,
                    rng.r#gen::<f64>() - 0.5,
                    rng.r#gen::<f64>() - 0.5,
                );
            // Suffixes of successive repeats may overlap, the offsets then
            // accumulate on the shared tail.
            for bead in &mut beads[pivot + 1..] {
                *bead += offset;
            }
        }
    }

    fn pivot_rotate<R: Rng>(
        &self,
        scratch: &mut Configuration,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let beads = scratch.beads_mut();
        let n = beads.len();
        let pivot_index = rng.gen_range(0..n);
        let rotation = geometry::random_rotation(self.scales.rotation_angle, rng)?;
        let pivot = beads[pivot_index];
        for bead in &mut beads[pivot_index + 1..] {
            *bead = pivot + rotation * (*bead - pivot);
        }
        Ok(())
    }

    fn crankshaft<R: Rng>(&self, scratch: &mut Configuration, rng: &mut R) {
        let beads = scratch.beads_mut();
        let n = beads.len();
        let mut i = rng.gen_range(0..n);
        let mut j = i;
        while j == i {
            j = rng.gen_range(0..n);
        }
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }

        let axis = beads[j] - beads[i];
        let angle = 2.0 * (rng.r#gen::<f64>() - 0.5) * self.scales.crankshaft_angle;
        let rotation = geometry::rotation_about_axis(&axis, angle);

        // Only the strictly interior beads move; both endpoints stay fixed,
        // which keeps the bonds leaving the segment attached.
        let pivot = beads[i];
        for bead in &mut beads[i + 1..j] {
            *bead = pivot + rotation * (*bead - pivot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOLERANCE: f64 = 1e-12;

    fn test_parameters() -> ChainParameters {
        ChainParameters {
            bead_count: 12,
            bond_length: 1.0,
            stretch_stiffness: 10.0,
            bend_stiffness: 5.0,
        }
    }

    fn bond_lengths(config: &Configuration) -> Vec<f64> {
        config
            .beads()
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .collect()
    }

    /// A non-collinear chain, so rotations about internal axes act
    /// nontrivially on the interior beads.
    fn jittered_chain(params: &ChainParameters, seed: u64) -> Configuration {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut config = Configuration::straight(params);
        for bead in config.beads_mut() {
            bead.x += 0.3 * (rng.r#gen::<f64>() - 0.5);
            bead.y += 0.3 * (rng.r#gen::<f64>() - 0.5);
        }
        config
    }

    #[test]
    fn scales_follow_inverse_square_root_of_stiffness() {
        let scales = ProposalScales::from_parameters(&test_parameters());
        assert!((scales.displacement - 0.5 * (2.0f64 / 10.0).sqrt()).abs() < TOLERANCE);
        assert!((scales.rotation_angle - 0.5 * (2.0f64 / 5.0).sqrt()).abs() < TOLERANCE);
        assert_eq!(scales.rotation_angle, scales.crankshaft_angle);
    }

    #[test]
    fn propose_leaves_the_current_configuration_untouched() {
        let params = test_parameters();
        let proposer = MoveProposer::new(&params);
        let current = Configuration::straight(&params);
        let frozen = current.clone();
        let mut scratch = Configuration::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            proposer.propose(&current, &mut scratch, &mut rng).unwrap();
            assert_eq!(current, frozen);
        }
    }

    #[test]
    fn local_perturb_never_moves_the_first_bead() {
        let params = test_parameters();
        let proposer = MoveProposer::new(&params);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let mut scratch = Configuration::straight(&params);
            let before = scratch.beads()[0];
            proposer.local_perturb(&mut scratch, &mut rng);
            assert_eq!(scratch.beads()[0], before);
        }
    }

    #[test]
    fn pivot_rotate_fixes_the_head_and_preserves_all_bond_lengths() {
        let params = test_parameters();
        let proposer = MoveProposer::new(&params);
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let mut scratch = Configuration::straight(&params);
            let before = scratch.clone();
            let lengths_before = bond_lengths(&before);

            // Mirror the kernel's first draw to learn the pivot index.
            let pivot_index = rng.clone().gen_range(0..scratch.bead_count());
            proposer.pivot_rotate(&mut scratch, &mut rng).unwrap();

            for k in 0..=pivot_index {
                assert_eq!(scratch.beads()[k], before.beads()[k]);
            }
            for (after, expected) in bond_lengths(&scratch).iter().zip(&lengths_before) {
                assert!((after - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn crankshaft_fixes_both_segment_endpoints_bitwise() {
        let params = test_parameters();
        let proposer = MoveProposer::new(&params);
        let mut rng = StdRng::seed_from_u64(23);
        for trial in 0..100 {
            let mut scratch = jittered_chain(&params, trial);
            let before = scratch.clone();
            let n = scratch.bead_count();

            // Mirror the kernel's index draws.
            let mut probe = rng.clone();
            let mut i = probe.gen_range(0..n);
            let mut j = i;
            while j == i {
                j = probe.gen_range(0..n);
            }
            if i > j {
                std::mem::swap(&mut i, &mut j);
            }

            proposer.crankshaft(&mut scratch, &mut rng);

            for k in (0..=i).chain(j..n) {
                assert_eq!(scratch.beads()[k], before.beads()[k]);
            }
        }
    }

    #[test]
    fn crankshaft_approximately_preserves_the_segment_boundary_bonds() {
        let params = test_parameters();
        let proposer = MoveProposer::new(&params);
        let mut rng = StdRng::seed_from_u64(29);
        for trial in 0..100 {
            let mut scratch = jittered_chain(&params, trial);
            let lengths_before = bond_lengths(&scratch);
            proposer.crankshaft(&mut scratch, &mut rng);
            for (after, expected) in bond_lengths(&scratch).iter().zip(&lengths_before) {
                assert!((after - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn propose_covers_every_move_kind() {
        let params = test_parameters();
        let proposer = MoveProposer::new(&params);
        let current = Configuration::straight(&params);
        let mut scratch = Configuration::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(41);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let kind = proposer.propose(&current, &mut scratch, &mut rng).unwrap();
            seen[kind.index()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
