//! CLI entry point for exploring Latin squares under the difference operator

use clap::Parser;
use latindiff::io::cli::{Cli, CommandRunner};
use latindiff::io::logging::init_logging;

fn main() -> latindiff::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    CommandRunner::new(cli).run()
}
