use crate::prelude::{println, *};
use serde::{Deserialize, Serialize};

use super::{create_client, get_json, CryptorankConfig, API_BASE};

/// Options for fetching full fund metadata
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct DetailOptions {
    /// Numeric fund ID
    #[arg(value_name = "FUND_ID")]
    pub fund_id: u64,
}

pub async fn run(options: DetailOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching full metadata for fund {}...", options.fund_id);
    }

    let config = super::load_config(&global)?;
    let report = fund_detail_data(&config, options.fund_id).await?;

    println!("{}", report);
    Ok(())
}

/// Public data function - used by both CLI and MCP
pub async fn fund_detail_data(config: &CryptorankConfig, fund_id: u64) -> Result<String> {
    let client = create_client(config)?;
    let url = f!("{API_BASE}/funds/{fund_id}/full-metadata");
    let context = f!("Failed to fetch comprehensive data for fund ID {fund_id}");

    let body = get_json(&client, &url, &[], &context).await?;

    Ok(cryptofunds_core::funds::detail_report(&body, fund_id))
}
