mod funds;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "cryptofunds".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "search_funds".to_string(),
            description: "Fetch a sortable and filterable list of venture funds and investors with key metrics from the Cryptorank API. Returns an ASCII table of ID, key, name, tier, type, jurisdiction, portfolio size, funding rounds, retail ROI, and lead investments. Requires the CRYPTORANK_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "tier": {
                        "type": "array",
                        "items": { "type": "integer" },
                        "description": "Tier numbers (1-5) to filter by"
                    },
                    "type": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Fund types to filter by (e.g. \"Angel Investor\", \"Venture\")"
                    },
                    "sortBy": {
                        "type": "string",
                        "description": "Field to sort by (default: tier)",
                        "enum": ["tier", "fundingRounds", "leadInvestments", "portfolio", "retailRoi"]
                    },
                    "sortDirection": {
                        "type": "string",
                        "description": "Sort direction (default: ASC)",
                        "enum": ["ASC", "DESC"]
                    },
                    "limit": {
                        "type": "number",
                        "description": "Number of results to return: 100, 200, or 300 (default: 100)"
                    },
                    "skip": {
                        "type": "number",
                        "description": "Number of results to skip (default: 0)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "get_all_funds".to_string(),
            description: "Fetch the complete list of investors and funds from the Cryptorank API. Returns an ASCII table with ID, name, tier, and type for every fund. Requires the CRYPTORANK_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_fund_basic".to_string(),
            description: "Fetch basic metrics for a specific fund by ID from the Cryptorank API. Returns ASCII tables for the fund's main metrics, focus areas, and top investments over the last 12 months. Requires the CRYPTORANK_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "fund_id": {
                        "type": "integer",
                        "description": "Numeric fund ID"
                    }
                },
                "required": ["fund_id"]
            }),
        },
        Tool {
            name: "get_fund_detail".to_string(),
            description: "Fetch comprehensive metrics and investment data for a specific fund by ID from the Cryptorank API. Returns ASCII tables for the fund's full metadata, links, focus areas, recent top investments, funding locations, recent funding rounds, average round raise distribution, and investment stages. Requires the CRYPTORANK_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "fund_id": {
                        "type": "integer",
                        "description": "Numeric fund ID"
                    }
                },
                "required": ["fund_id"]
            }),
        },
        Tool {
            name: "get_fund_team".to_string(),
            description: "Fetch detailed team information for a specific fund by ID from the Cryptorank API. Returns ASCII tables for the team roster and each member's social links. Requires the CRYPTORANK_API_KEY environment variable.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "fund_id": {
                        "type": "integer",
                        "description": "Numeric fund ID"
                    }
                },
                "required": ["fund_id"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "search_funds" => funds::handle_search_funds(params.arguments, global).await,
        "get_all_funds" => funds::handle_get_all_funds(params.arguments, global).await,
        "get_fund_basic" => funds::handle_get_fund_basic(params.arguments, global).await,
        "get_fund_detail" => funds::handle_get_fund_detail(params.arguments, global).await,
        "get_fund_team" => funds::handle_get_fund_team(params.arguments, global).await,
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}
