use crate::prelude::{println, *};

use super::{create_client, get_json, CryptorankConfig, API_BASE};

pub async fn run(global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching the complete fund map...");
    }

    let config = super::load_config(&global)?;
    let report = all_funds_data(&config).await?;

    println!("{}", report);
    Ok(())
}

/// Public data function - used by both CLI and MCP
pub async fn all_funds_data(config: &CryptorankConfig) -> Result<String> {
    let client = create_client(config)?;
    let url = f!("{API_BASE}/funds/map");

    let body = get_json(&client, &url, &[], "Failed to fetch funds").await?;

    Ok(cryptofunds_core::funds::map_report(&body))
}
