//! Command-line interface for order computations and Latin square experiments

use crate::algebra::PermutationChain;
use crate::algorithm::difference;
use crate::experiment::classes::{distinct_reduced_forms, order_classes};
use crate::experiment::records::{canonical_tuple, order_value};
use crate::experiment::trials::{check_reduction_order, order_vs_reduced_form, sample_order};
use crate::experiment::{Experiment, RunConfig, TrialParams};
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_SQUARE_SIZE, DEFAULT_TRIALS, DEFAULT_WORKERS, DEMO_SIZES,
    MAX_SQUARE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::square::LatinSquare;
use clap::{ArgAction, Parser, Subcommand};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "latindiff")]
#[command(
    author,
    version,
    about = "Study Latin squares under the permutation difference operator"
)]
/// Command-line arguments for the Latin square tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Base random seed for reproducible runs
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Worker threads for experiments (0 = one per CPU)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Suppress progress output and all logs below errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Subcommands of the tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the orders under D of the cyclic 4x4 and 5x5 squares
    Demo,

    /// Compute the order under D of one chain given row by row
    Order {
        /// Rows such as `0,1,2`; give none for the empty chain
        #[arg(value_name = "ROW")]
        rows: Vec<Row>,
    },

    /// Generate random squares and print one record per trial
    Sample(TrialArgs),

    /// Group orders that reduction links together
    ReductionOrder(TrialArgs),

    /// List the distinct reduced forms reached by random squares
    ReducedForms(TrialArgs),
}

/// Parameters shared by the experiment subcommands
#[derive(clap::Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialArgs {
    /// Order of the generated squares
    #[arg(short = 'n', long, default_value_t = DEFAULT_SQUARE_SIZE)]
    pub size: usize,

    /// Number of independent trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,
}

/// One row of a chain typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(pub Vec<usize>);

impl FromStr for Row {
    type Err = String;

    /// Parse comma- or space-separated integers
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                cell.parse::<usize>()
                    .map_err(|error| format!("invalid entry '{cell}': {error}"))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Executes a parsed command and renders its output
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the command and print its output to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid or a row is malformed
    // Allow print for the command's report
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        for line in self.execute()? {
            println!("{line}");
        }
        Ok(())
    }

    /// Execute the command and return its output lines
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid or a row is malformed
    pub fn execute(&self) -> Result<Vec<String>> {
        match &self.cli.command {
            Command::Demo => Ok(Self::demo()),
            Command::Order { rows } => Self::order(rows),
            Command::Sample(args) => self.sample(*args),
            Command::ReductionOrder(args) => self.reduction_order(*args),
            Command::ReducedForms(args) => self.reduced_forms(*args),
        }
    }

    fn demo() -> Vec<String> {
        DEMO_SIZES
            .iter()
            .map(|&n| {
                let square = LatinSquare::cyclic(n);
                let order = difference::order(square.chain()).ok();
                format!(
                    "Order of {n}x{n} Latin Square under D: {}",
                    order_value(order)
                )
            })
            .collect()
    }

    fn order(rows: &[Row]) -> Result<Vec<String>> {
        let chain = PermutationChain::from_rows(rows.iter().map(|row| row.0.clone()).collect())?;
        let mut lines = Vec::new();
        match difference::order(&chain) {
            Ok(order) => lines.push(format!("order: {order}")),
            Err(error) => {
                lines.push(format!("order: {}", order_value(None)));
                lines.push(format!("note: {error}"));
            }
        }
        let latin = LatinSquare::try_from(chain).is_ok();
        lines.push(format!("latin square: {latin}"));
        Ok(lines)
    }

    fn sample(&self, args: TrialArgs) -> Result<Vec<String>> {
        let (params, config) = self.prepare(args)?;
        let records = Experiment::new("Order sample", sample_order).run(&params, &config)?;
        Ok(records.iter().map(ToString::to_string).collect())
    }

    fn reduction_order(&self, args: TrialArgs) -> Result<Vec<String>> {
        let (params, config) = self.prepare(args)?;
        let records =
            Experiment::new("Reduction order test", check_reduction_order).run(&params, &config)?;

        let mut lines = vec!["Final Order Classes:".to_string()];
        lines.extend(
            order_classes(&records)
                .iter()
                .map(|class| format!("{:?}", class.iter().collect::<Vec<_>>())),
        );
        Ok(lines)
    }

    fn reduced_forms(&self, args: TrialArgs) -> Result<Vec<String>> {
        let (params, config) = self.prepare(args)?;
        let records =
            Experiment::new("Order vs. reduced form", order_vs_reduced_form).run(&params, &config)?;

        let forms = distinct_reduced_forms(&records);
        let mut lines = vec![format!("Unique reduced forms: {}", forms.len())];
        for (square, order) in &forms {
            lines.push(format!(
                "order={} reduced={}",
                order_value(*order),
                canonical_tuple(square.chain())
            ));
        }
        Ok(lines)
    }

    fn prepare(&self, args: TrialArgs) -> Result<(TrialParams, RunConfig)> {
        if args.size == 0 || args.size > MAX_SQUARE_SIZE {
            return Err(invalid_parameter(
                "size",
                &args.size,
                &format!("square order must be between 1 and {MAX_SQUARE_SIZE}"),
            ));
        }

        let params = TrialParams { n: args.size };
        let config = RunConfig {
            trials: args.trials,
            workers: self.cli.workers,
            seed: self.cli.seed,
            show_progress: !self.cli.quiet,
        };
        Ok((params, config))
    }
}
