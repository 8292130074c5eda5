mod cli_main;

use clap::Parser;
use cli_main::Cli;
use debruijn::pipeline::assemble::assemble_file;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting tracing default failed: {}", e);
    }

    if !cli.input.is_file() {
        error!("Input file {} does not exist or is not a file", cli.input.display());
        return ExitCode::FAILURE;
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Assembling with k={}, seed={}", config.kmer_size, config.seed);

    match assemble_file(&cli.input, &cli.output, cli.json_metadata.as_deref(), &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error during assembly: {}", e);
            ExitCode::FAILURE
        }
    }
}
