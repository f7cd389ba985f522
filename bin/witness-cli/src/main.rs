//! CLI to build staking witnesses from signatures collected elsewhere.

mod cli;
mod handlers;
mod request;

use anyhow::{Error, Result};
use clap::Parser;
use staking_witness_common::logging::{self, LoggerConfig};

use crate::cli::Commands;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let cli = cli::Cli::parse();

    let mut logger_config = LoggerConfig::with_base_name("witness-cli");
    if let Some(url) = logging::get_otlp_url_from_env() {
        logger_config.set_otlp_url(url);
    }
    logger_config.set_with_location(cli.log_location);
    logging::init(logger_config);

    match cli.command {
        Commands::Build(args) => handlers::handle_build(args).await,
        Commands::KeyOrder(args) => handlers::handle_key_order(args).await,
    }
}
