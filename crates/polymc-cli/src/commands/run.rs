use crate::cli::RunArgs;
use crate::config;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use polymc::core::utils::geometry;
use polymc::engine::moves::MoveKind;
use polymc::engine::progress::ProgressReporter;
use polymc::workflows::sample::{self, SamplingResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub fn execute(args: RunArgs) -> Result<()> {
    let app_config = config::build_config(&args)?;

    let mut rng = match app_config.seed {
        Some(seed) => {
            info!(seed, "Seeding random number generator.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.callback());

    let result = sample::run(&app_config.chain, &app_config.sampling, &mut rng, &reporter)?;

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &SamplingResult) {
    println!(
        "\nCollected {} configuration(s) in {:.1}s ({} proposals).",
        result.samples.len(),
        result.elapsed.as_secs_f64(),
        result.statistics.total_attempted()
    );

    println!("\nAcceptance ratios:");
    for kind in MoveKind::ALL {
        println!(
            "  {:<14} {:>9}/{:<9} ({:.2})",
            kind.as_str(),
            result.statistics.accepted(kind),
            result.statistics.attempted(kind),
            result.statistics.acceptance_ratio(kind)
        );
    }

    let n = result.samples.len() as f64;
    let mean_e2e = result
        .samples
        .iter()
        .map(geometry::end_to_end_distance)
        .sum::<f64>()
        / n;
    let mean_rg = result
        .samples
        .iter()
        .map(geometry::radius_of_gyration)
        .sum::<f64>()
        / n;

    println!("\nEnsemble averages:");
    println!("  end-to-end distance  {:.4}", mean_e2e);
    println!("  radius of gyration   {:.4}", mean_rg);
}
