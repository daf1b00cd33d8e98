use crate::prelude::{println, *};
use serde::{Deserialize, Serialize};

use super::{create_client, get_json, CryptorankConfig, API_BASE};

/// Options for searching funds
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # Tier-1 venture funds, most funding rounds first:
  cryptofunds funds search --tier 1 --fund-type Venture --sort-by fundingRounds --sort-direction DESC

  # Angel investors and venture funds across tiers 1 and 2:
  cryptofunds funds search --tier 1 --tier 2 --fund-type \"Angel Investor\" --fund-type Venture

  # Second page of 300:
  cryptofunds funds search --limit 300 --skip 300

NOTES:
  - Sort fields: tier, fundingRounds, leadInvestments, portfolio, retailRoi
  - The API accepts limit values of 100, 200, or 300
  - Filter and sort values are passed through to the API unvalidated;
    out-of-range values are rejected upstream")]
pub struct SearchOptions {
    /// Tier number (1-5) to filter by; repeat the flag for several tiers
    #[arg(short, long)]
    pub tier: Vec<u8>,

    /// Fund type to filter by (e.g. "Angel Investor", "Venture"); repeatable
    #[arg(short = 'T', long = "fund-type")]
    pub fund_type: Vec<String>,

    /// Field to sort by
    #[arg(long, default_value = "tier")]
    pub sort_by: String,

    /// Sort direction: ASC or DESC
    #[arg(long, default_value = "ASC")]
    pub sort_direction: String,

    /// Number of results to return (100, 200, or 300)
    #[arg(short, long, default_value = "100")]
    pub limit: u32,

    /// Number of results to skip
    #[arg(short, long, default_value = "0")]
    pub skip: u32,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Searching funds sorted by {} {}...",
            options.sort_by, options.sort_direction
        );
    }

    let config = super::load_config(&global)?;
    let report = search_funds_data(&config, &options).await?;

    println!("{}", report);
    Ok(())
}

/// Query pairs for `GET /funds`. List filters become repeated keys
/// (`tier=1&tier=2`); sort and range values are passed through to the API
/// as-is rather than validated locally.
fn build_query(options: &SearchOptions) -> Vec<(String, String)> {
    let mut query = vec![
        ("sortBy".to_string(), options.sort_by.clone()),
        ("sortDirection".to_string(), options.sort_direction.clone()),
        ("limit".to_string(), options.limit.to_string()),
        ("skip".to_string(), options.skip.to_string()),
    ];

    for tier in &options.tier {
        query.push(("tier".to_string(), tier.to_string()));
    }
    for fund_type in &options.fund_type {
        query.push(("type".to_string(), fund_type.clone()));
    }

    query
}

/// Public data function - used by both CLI and MCP
pub async fn search_funds_data(
    config: &CryptorankConfig,
    options: &SearchOptions,
) -> Result<String> {
    let client = create_client(config)?;
    let url = f!("{API_BASE}/funds");

    let body = get_json(&client, &url, &build_query(options), "Failed to fetch funds").await?;

    Ok(cryptofunds_core::funds::search_report(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SearchOptions {
        SearchOptions {
            tier: vec![],
            fund_type: vec![],
            sort_by: "tier".to_string(),
            sort_direction: "ASC".to_string(),
            limit: 100,
            skip: 0,
        }
    }

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(&options());

        assert_eq!(
            query,
            vec![
                ("sortBy".to_string(), "tier".to_string()),
                ("sortDirection".to_string(), "ASC".to_string()),
                ("limit".to_string(), "100".to_string()),
                ("skip".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_query_repeats_list_filters() {
        let mut opts = options();
        opts.tier = vec![1, 2];
        opts.fund_type = vec!["Angel Investor".to_string(), "Venture".to_string()];

        let query = build_query(&opts);

        let tiers: Vec<_> = query.iter().filter(|(k, _)| k == "tier").collect();
        let types: Vec<_> = query.iter().filter(|(k, _)| k == "type").collect();
        assert_eq!(tiers.len(), 2);
        assert_eq!(types.len(), 2);
        assert_eq!(tiers[0].1, "1");
        assert_eq!(types[0].1, "Angel Investor");
    }

    #[test]
    fn test_build_query_passes_sort_values_through() {
        let mut opts = options();
        opts.sort_by = "notAValidField".to_string();
        opts.limit = 9999;

        let query = build_query(&opts);

        // Out-of-range values are the API's concern, not ours.
        assert!(query.contains(&("sortBy".to_string(), "notAValidField".to_string())));
        assert!(query.contains(&("limit".to_string(), "9999".to_string())));
    }
}
