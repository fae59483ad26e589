use indicatif::{ProgressBar, ProgressStyle};
use polymc::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::RunStart { total_samples } => {
                    pb_guard.reset();
                    pb_guard.set_length(total_samples);
                    pb_guard.set_message("sampling");
                }
                Progress::SampleStored { collected, .. } => {
                    pb_guard.set_position(collected);
                }
                Progress::Decile {
                    percent_complete,
                    estimated_remaining,
                } => {
                    pb_guard.println(format!(
                        "  [{:>3}%] ~{:.1}s remaining",
                        percent_complete,
                        estimated_remaining.as_secs_f64()
                    ));
                }
                Progress::RunFinish { elapsed, .. } => {
                    pb_guard.finish_with_message(format!("done in {:.1}s", elapsed.as_secs_f64()));
                }
                Progress::Message(msg) => {
                    pb_guard.println(format!("  {}", msg));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
