use std::time::Duration;

use rand::Rng;
use tracing::{info, instrument};

use crate::core::models::chain::ChainParameters;
use crate::core::models::configuration::Configuration;
use crate::engine::config::SamplingConfig;
use crate::engine::error::EngineError;
use crate::engine::moves::MoveKind;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampler;
use crate::engine::state::MoveStatistics;

/// The outcome of a sampling run: the collected ensemble plus run
/// diagnostics.
#[derive(Debug, Clone)]
pub struct SamplingResult {
    /// The thinned, post-burn-in configurations, in collection order.
    pub samples: Vec<Configuration>,
    /// Per-move-kind acceptance counters, burn-in included.
    pub statistics: MoveStatistics,
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
}

/// Samples equilibrium configurations of a semi-flexible chain.
///
/// Validates the inputs, then runs the Metropolis chain until
/// `config.sample_count` configurations have been collected. The random
/// source is injected so callers control reproducibility; with a seeded
/// generator the result is fully deterministic.
#[instrument(skip_all, name = "sampling_workflow")]
pub fn run<R: Rng>(
    params: &ChainParameters,
    config: &SamplingConfig,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<SamplingResult, EngineError> {
    params.validate()?;
    config.validate()?;

    info!(
        beads = params.bead_count,
        samples = config.sample_count,
        burn_in = config.burn_in,
        thinning = config.thinning,
        "Starting equilibrium sampling."
    );
    reporter.report(Progress::RunStart {
        total_samples: config.sample_count as u64,
    });

    let outcome = sampler::sample_chain(params, config, rng, reporter)?;

    reporter.report(Progress::RunFinish {
        statistics: outcome.statistics,
        elapsed: outcome.elapsed,
    });
    for kind in MoveKind::ALL {
        info!(
            move_kind = kind.as_str(),
            accepted = outcome.statistics.accepted(kind),
            attempted = outcome.statistics.attempted(kind),
            ratio = outcome.statistics.acceptance_ratio(kind),
            "Move acceptance."
        );
    }
    info!(
        elapsed_s = outcome.elapsed.as_secs_f64(),
        "Sampling complete. Returning {} configuration(s).",
        outcome.samples.len()
    );

    Ok(SamplingResult {
        samples: outcome.samples,
        statistics: outcome.statistics,
        elapsed: outcome.elapsed,
    })
}
