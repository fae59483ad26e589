use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, trace};

use super::config::SamplingConfig;
use super::error::EngineError;
use super::moves::MoveProposer;
use super::progress::{Progress, ProgressReporter};
use super::state::{MoveStatistics, SampleSchedule};
use crate::core::forcefield::energy;
use crate::core::models::chain::ChainParameters;
use crate::core::models::configuration::Configuration;

const DECILES: u64 = 10;

/// Metropolis criterion. Clamped to 1, so a downhill candidate accepts with
/// certainty even when the energy drop would overflow the exponential; a
/// steep uphill candidate underflows towards 0 instead of failing.
#[inline]
fn acceptance_probability(current_energy: f64, candidate_energy: f64) -> f64 {
    (current_energy - candidate_energy).exp().min(1.0)
}

pub(crate) struct SamplingOutcome {
    pub samples: Vec<Configuration>,
    pub statistics: MoveStatistics,
    pub elapsed: Duration,
}

/// The Metropolis loop.
///
/// Inputs are assumed validated by the caller. The loop keeps two
/// configuration buffers, `current` and `scratch`: each iteration a proposal
/// is written into `scratch`, scored, and either swapped in (acceptance) or
/// simply overwritten next iteration (rejection). Per iteration, only the
/// sample-store step allocates.
pub(crate) fn sample_chain<R: Rng>(
    params: &ChainParameters,
    config: &SamplingConfig,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<SamplingOutcome, EngineError> {
    let proposer = MoveProposer::new(params);
    let mut current = Configuration::straight(params);
    let mut scratch = current.clone();
    let mut current_energy = energy::total_energy(&current, params)?;

    let mut samples: Vec<Configuration> = Vec::with_capacity(config.sample_count);
    let mut statistics = MoveStatistics::new();
    let mut schedule = SampleSchedule::new(config.burn_in, config.thinning, params.bead_count);

    let total = config.sample_count as u64;
    let decile_stride = (config.sample_count / DECILES as usize).max(1);

    let run_start = Instant::now();
    let mut decile_anchor = run_start;

    debug!(
        displacement = proposer.scales().displacement,
        rotation_angle = proposer.scales().rotation_angle,
        "Proposal scales derived from stiffness constants."
    );

    loop {
        let kind = proposer.propose(&current, &mut scratch, rng)?;
        let candidate_energy = energy::total_energy(&scratch, params)?;

        let acceptance = acceptance_probability(current_energy, candidate_energy);
        let accepted = rng.r#gen::<f64>() < acceptance;
        if accepted {
            std::mem::swap(&mut current, &mut scratch);
            current_energy = candidate_energy;
        }
        statistics.record(kind, accepted);
        trace!(move_kind = kind.as_str(), accepted, energy = current_energy);

        if schedule.warmup_just_ended() {
            decile_anchor = Instant::now();
        }

        if schedule.due() {
            samples.push(current.clone());
            schedule.mark_stored();

            let collected = samples.len() as u64;
            reporter.report(Progress::SampleStored { collected, total });

            if samples.len() % decile_stride == 0 {
                let deciles_done = DECILES * collected / total;
                let elapsed_decile = decile_anchor.elapsed();
                reporter.report(Progress::Decile {
                    percent_complete: (DECILES * deciles_done) as u32,
                    estimated_remaining: elapsed_decile * (DECILES - deciles_done) as u32,
                });
                decile_anchor = Instant::now();
            }
        }

        schedule.advance();
        if samples.len() == config.sample_count {
            break;
        }
    }

    Ok(SamplingOutcome {
        samples,
        statistics,
        elapsed: run_start.elapsed(),
    })
}
