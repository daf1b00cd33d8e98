use crate::prelude::{eprintln, *};
use serde::Deserialize;

use super::{CallToolResult, Content, JsonRpcError};

fn invalid_arguments(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError {
        code: -32602,
        message: format!("Invalid arguments: {e}"),
        data: None,
    }
}

fn execution_error(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message: format!("Tool execution error: {e}"),
        data: None,
    }
}

/// Wrap a finished report in the MCP text result envelope.
fn text_result(text: String) -> Result<serde_json::Value, JsonRpcError> {
    let result = CallToolResult {
        content: vec![Content::Text { text }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_search_funds(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchFundsArgs {
        tier: Option<Vec<u8>>,
        #[serde(rename = "type")]
        fund_type: Option<Vec<String>>,
        #[serde(rename = "sortBy")]
        sort_by: Option<String>,
        #[serde(rename = "sortDirection")]
        sort_direction: Option<String>,
        limit: Option<u32>,
        skip: Option<u32>,
    }

    let args: SearchFundsArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({})))
            .map_err(invalid_arguments)?;

    let options = crate::funds::search::SearchOptions {
        tier: args.tier.unwrap_or_default(),
        fund_type: args.fund_type.unwrap_or_default(),
        sort_by: args.sort_by.unwrap_or_else(|| "tier".to_string()),
        sort_direction: args.sort_direction.unwrap_or_else(|| "ASC".to_string()),
        limit: args.limit.unwrap_or(100),
        skip: args.skip.unwrap_or(0),
    };

    if global.verbose {
        eprintln!(
            "Calling search_funds: tier={:?}, type={:?}, sortBy={}, sortDirection={}, limit={}, skip={}",
            options.tier,
            options.fund_type,
            options.sort_by,
            options.sort_direction,
            options.limit,
            options.skip
        );
    }

    let config = crate::funds::load_config(global).map_err(execution_error)?;
    let report = crate::funds::search_funds_data(&config, &options)
        .await
        .map_err(execution_error)?;

    text_result(report)
}

pub async fn handle_get_all_funds(
    _arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling get_all_funds");
    }

    let config = crate::funds::load_config(global).map_err(execution_error)?;
    let report = crate::funds::all_funds_data(&config)
        .await
        .map_err(execution_error)?;

    text_result(report)
}

#[derive(Deserialize)]
struct FundIdArgs {
    fund_id: u64,
}

fn parse_fund_id(arguments: Option<serde_json::Value>) -> Result<u64, JsonRpcError> {
    let args: FundIdArgs =
        serde_json::from_value(arguments.unwrap_or_else(|| serde_json::json!({})))
            .map_err(invalid_arguments)?;
    Ok(args.fund_id)
}

pub async fn handle_get_fund_basic(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let fund_id = parse_fund_id(arguments)?;

    if global.verbose {
        eprintln!("Calling get_fund_basic: fund_id={fund_id}");
    }

    let config = crate::funds::load_config(global).map_err(execution_error)?;
    let report = crate::funds::fund_basic_data(&config, fund_id)
        .await
        .map_err(execution_error)?;

    text_result(report)
}

pub async fn handle_get_fund_detail(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let fund_id = parse_fund_id(arguments)?;

    if global.verbose {
        eprintln!("Calling get_fund_detail: fund_id={fund_id}");
    }

    let config = crate::funds::load_config(global).map_err(execution_error)?;
    let report = crate::funds::fund_detail_data(&config, fund_id)
        .await
        .map_err(execution_error)?;

    text_result(report)
}

pub async fn handle_get_fund_team(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let fund_id = parse_fund_id(arguments)?;

    if global.verbose {
        eprintln!("Calling get_fund_team: fund_id={fund_id}");
    }

    let config = crate::funds::load_config(global).map_err(execution_error)?;
    let report = crate::funds::fund_team_data(&config, fund_id)
        .await
        .map_err(execution_error)?;

    text_result(report)
}
