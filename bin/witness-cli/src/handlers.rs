use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use staking_params::staking::StakingParams;
use staking_witness::spend_path::StakingSpendPath;
use tokio::fs;
use tracing::{info, warn};

use crate::{
    cli::{BuildArgs, KeyOrderArgs},
    request::WitnessRequest,
};

async fn load_params(path: &Path) -> Result<StakingParams> {
    let contents = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read params file {}", path.display()))?;

    StakingParams::from_toml_str(&contents).context("invalid staking params")
}

pub(crate) async fn handle_build(args: BuildArgs) -> Result<()> {
    let params = load_params(&args.params).await?;

    let contents = fs::read_to_string(&args.request)
        .await
        .with_context(|| format!("failed to read request {}", args.request.display()))?;
    let request = WitnessRequest::from_json(&contents)?;

    let (spend_info, spend_path) = request.into_spend(&params)?;

    let num_covenant_signatures = spend_path.num_covenant_signatures();
    if !matches!(spend_path, StakingSpendPath::Timelock { .. })
        && num_covenant_signatures < params.covenant.quorum as usize
    {
        warn!(
            path = spend_path.name(),
            num_covenant_signatures,
            quorum = params.covenant.quorum,
            "fewer covenant signatures than the quorum, the witness will not satisfy the script"
        );
    }

    let witness = spend_info
        .build_witness(&spend_path)
        .with_context(|| format!("failed to build {} witness", spend_path.name()))?;

    info!(
        path = spend_path.name(),
        witness_len = witness.len(),
        witness_size = witness.size(),
        "built witness"
    );

    let elements: Vec<String> = witness.iter().map(hex::encode).collect();
    let output = serde_json::to_string_pretty(&elements)?;

    match args.output {
        Some(path) => fs::write(&path, output)
            .await
            .with_context(|| format!("failed to write witness to {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct KeyOrderOutput {
    script_order: Vec<String>,
    witness_order: Vec<String>,
}

pub(crate) async fn handle_key_order(args: KeyOrderArgs) -> Result<()> {
    let params = load_params(&args.params).await?;
    let committee = params.covenant.key_order()?;

    let output = KeyOrderOutput {
        script_order: committee
            .script_order()
            .iter()
            .map(ToString::to_string)
            .collect(),
        witness_order: committee.witness_order().map(ToString::to_string).collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
