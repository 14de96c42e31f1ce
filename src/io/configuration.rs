//! Experiment defaults and runtime limits

// Default values for configurable parameters
/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Default number of trials per experiment run
pub const DEFAULT_TRIALS: usize = 100;

/// Default order of generated squares
pub const DEFAULT_SQUARE_SIZE: usize = 5;

/// Default worker count (0 lets the pool use one thread per CPU)
pub const DEFAULT_WORKERS: usize = 0;

// Order computation walks a state space of (n!)^n chains
/// Largest square order accepted from the command line
///
/// Generation restarts grow quickly with the order, and a single order
/// computation on a large square can run for a very long time.
pub const MAX_SQUARE_SIZE: usize = 16;

/// Orders of the cyclic squares shown by the demo command
pub const DEMO_SIZES: [usize; 2] = [4, 5];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Log directive used when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
