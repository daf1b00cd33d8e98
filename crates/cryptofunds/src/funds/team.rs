use crate::prelude::{println, *};
use serde::{Deserialize, Serialize};

use super::{create_client, get_json, CryptorankConfig, API_BASE};

/// Options for fetching a fund's team
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct TeamOptions {
    /// Numeric fund ID
    #[arg(value_name = "FUND_ID")]
    pub fund_id: u64,
}

pub async fn run(options: TeamOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching team for fund {}...", options.fund_id);
    }

    let config = super::load_config(&global)?;
    let report = fund_team_data(&config, options.fund_id).await?;

    println!("{}", report);
    Ok(())
}

/// Public data function - used by both CLI and MCP
pub async fn fund_team_data(config: &CryptorankConfig, fund_id: u64) -> Result<String> {
    let client = create_client(config)?;
    let url = f!("{API_BASE}/funds/{fund_id}/team");
    let context = f!("Failed to fetch team data for fund ID {fund_id}");

    let body = get_json(&client, &url, &[], &context).await?;

    Ok(cryptofunds_core::funds::team_report(&body, fund_id))
}
