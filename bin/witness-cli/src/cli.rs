use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "witness-cli",
    about = "Builds script-path witnesses for taproot staking outputs",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "LOG_LINE_NUM",
        help = "include source file and line numbers in logs"
    )]
    pub(crate) log_location: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Build(BuildArgs),

    KeyOrder(KeyOrderArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Build the witness stack for a spend request", version)]
pub(crate) struct BuildArgs {
    #[arg(long, env = "STAKING_PARAMS", help = "the path to the staking params file")]
    pub(crate) params: PathBuf,

    #[arg(long, help = "the path to the JSON spend request")]
    pub(crate) request: PathBuf,

    #[arg(
        long,
        help = "write the witness to this file instead of stdout",
        value_name = "PATH"
    )]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Print the covenant keys in script order and in witness order",
    version
)]
pub(crate) struct KeyOrderArgs {
    #[arg(long, env = "STAKING_PARAMS", help = "the path to the staking params file")]
    pub(crate) params: PathBuf,
}
