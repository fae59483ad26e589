use super::state::MoveStatistics;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Progress {
    RunStart { total_samples: u64 },
    SampleStored { collected: u64, total: u64 },
    Decile { percent_complete: u32, estimated_remaining: Duration },
    RunFinish { statistics: MoveStatistics, elapsed: Duration },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
