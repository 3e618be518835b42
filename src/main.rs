//! CLI entry point for the hexagonal ring solver

use clap::Parser;
use hexring::io::cli::{Cli, RingRunner};

fn main() -> hexring::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut runner = RingRunner::new(cli);
    runner.run()?;
    Ok(())
}
