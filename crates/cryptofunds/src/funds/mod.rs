use crate::prelude::{println, *};
use colored::Colorize;

pub mod basic;
pub mod detail;
pub mod list_all;
pub mod search;
pub mod team;

// Re-export public data functions for the MCP tool handlers
pub use basic::fund_basic_data;
pub use detail::fund_detail_data;
pub use list_all::all_funds_data;
pub use search::search_funds_data;
pub use team::fund_team_data;

const API_BASE: &str = "https://api.cryptorank.io/v2";

/// Every request to the API gets the same fixed timeout.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, clap::Parser)]
#[command(name = "funds")]
#[command(about = "Cryptorank fund and investor reports")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search funds with tier/type filters and sorting
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// List every fund and investor
    #[clap(name = "list")]
    List,

    /// Basic metrics for one fund
    #[clap(name = "basic")]
    Basic(basic::BasicOptions),

    /// Full metadata for one fund
    #[clap(name = "detail")]
    Detail(detail::DetailOptions),

    /// Team roster and social links for one fund
    #[clap(name = "team")]
    Team(team::TeamOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Cryptorank API Base: {}", API_BASE.cyan());
        println!();
    }

    match app.command {
        Commands::Search(options) => search::run(options, global).await,
        Commands::List => list_all::run(global).await,
        Commands::Basic(options) => basic::run(options, global).await,
        Commands::Detail(options) => detail::run(options, global).await,
        Commands::Team(options) => team::run(options, global).await,
    }
}

/// Cryptorank configuration from the environment
#[derive(Debug, Clone)]
pub struct CryptorankConfig {
    pub api_key: String,
}

impl CryptorankConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("CRYPTORANK_API_KEY").map_err(|_| {
            Error::Configuration("CRYPTORANK_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self { api_key })
    }
}

/// Resolve the credential before any network call: the CLI override wins,
/// otherwise the environment must provide it.
pub fn load_config(global: &crate::Global) -> Result<CryptorankConfig> {
    match &global.api_key {
        Some(key) => Ok(CryptorankConfig {
            api_key: key.clone(),
        }),
        None => CryptorankConfig::from_env(),
    }
}

/// HTTP client carrying the API key header and the fixed request timeout.
pub fn create_client(config: &CryptorankConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue};

    let mut api_key = HeaderValue::from_str(&config.api_key)
        .map_err(|e| eyre!("Invalid API key header value: {}", e))?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("X-Api-Key", api_key);

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// GET a JSON body, folding transport failures and non-2xx statuses into
/// one error kind carrying the operation's context message.
pub(crate) async fn get_json(
    client: &reqwest::Client,
    url: &str,
    query: &[(String, String)],
    context: &str,
) -> Result<serde_json::Value> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| Error::Network(f!("{context}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Network(f!("{context}: HTTP {}", response.status())).into());
    }

    response
        .json()
        .await
        .map_err(|e| eyre!("{context}: failed to parse response: {e}"))
}
