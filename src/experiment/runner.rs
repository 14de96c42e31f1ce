//! Parallel execution of independent trials
//!
//! Trials share nothing: each one gets its own random source seeded from the
//! run seed plus the trial index, so a run is reproducible however the worker
//! threads interleave. A failing trial is logged and dropped; the rest of the
//! batch carries on.

use crate::io::configuration::{DEFAULT_SEED, DEFAULT_TRIALS, DEFAULT_WORKERS};
use crate::io::error::Result;
use crate::io::progress::TrialProgress;
use rand::{SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{info, warn};

/// Parameters handed to every trial
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialParams {
    /// Order of the squares to generate
    pub n: usize,
}

/// How many trials to run and on how many threads
#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    /// Number of independent trials
    pub trials: usize,
    /// Worker threads, 0 for one per CPU
    pub workers: usize,
    /// Base seed; trial `i` uses `seed + i`
    pub seed: u64,
    /// Whether to draw a progress bar
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            workers: DEFAULT_WORKERS,
            seed: DEFAULT_SEED,
            show_progress: false,
        }
    }
}

/// Named trial function run many times in parallel
pub struct Experiment<F> {
    name: String,
    trial: F,
}

impl<F> Experiment<F> {
    /// Wrap a trial function under a display name
    pub fn new(name: impl Into<String>, trial: F) -> Self {
        Self {
            name: name.into(),
            trial,
        }
    }

    /// Display name of the experiment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `config.trials` trials and collect the records of those that succeed
    ///
    /// # Errors
    ///
    /// Returns [`crate::LatinError::ThreadPool`] if the worker pool cannot be
    /// built. Individual trial failures are logged, not returned.
    pub fn run<T>(&self, params: &TrialParams, config: &RunConfig) -> Result<Vec<T>>
    where
        F: Fn(&TrialParams, &mut StdRng) -> Result<T> + Sync,
        T: Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()?;

        info!(
            experiment = %self.name,
            trials = config.trials,
            n = params.n,
            "running trials in parallel"
        );

        let progress = config
            .show_progress
            .then(|| TrialProgress::new(&self.name, config.trials));

        let records: Vec<T> = pool.install(|| {
            (0..config.trials)
                .into_par_iter()
                .filter_map(|index| {
                    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
                    let outcome = (self.trial)(params, &mut rng);
                    if let Some(bar) = &progress {
                        bar.inc();
                    }
                    match outcome {
                        Ok(record) => Some(record),
                        Err(error) => {
                            warn!(trial = index, %error, "trial failed");
                            None
                        }
                    }
                })
                .collect()
        });

        if let Some(bar) = &progress {
            bar.finish();
        }
        info!(
            experiment = %self.name,
            completed = records.len(),
            failed = config.trials - records.len(),
            "trials finished"
        );

        Ok(records)
    }
}
