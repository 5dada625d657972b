//! CLI entry point for the grid index demonstration workload

use bucketgrid::io::cli::{Cli, DemoRunner};
use clap::Parser;

fn main() -> bucketgrid::Result<()> {
    let cli = Cli::parse();
    let mut runner = DemoRunner::new(cli);
    runner.run()
}
