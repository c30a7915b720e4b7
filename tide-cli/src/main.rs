//! Tide CLI - astronomical tide prediction from harmonic constants.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tide-cli",
    version,
    about = "Harmonic tide prediction and observation comparison toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tide_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("tide-cli {}", env!("CARGO_PKG_VERSION"));
    tide_cmd::run(cli.command)
}
