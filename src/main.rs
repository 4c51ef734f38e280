//! pitchside - CLI companion for the Bad at Soccer team-selection API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login(args) => cli::login::run(&opts, args).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("pitchside version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Warnings by default, debug with `--debug`; `RUST_LOG` wins over both
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
