/// Command-line parsing and command execution
pub mod cli;
/// Defaults and limits for experiments and display
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Structured logging setup
pub mod logging;
/// Progress bars for experiment runs
pub mod progress;
