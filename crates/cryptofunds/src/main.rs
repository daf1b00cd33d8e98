#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod error;
mod funds;
mod mcp;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Tabular venture-fund and investor reports from the Cryptorank API, as a CLI and as an MCP server"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Cryptorank API key, overriding the CRYPTORANK_API_KEY environment variable
    #[clap(long, global = true)]
    api_key: Option<String>,

    /// Whether to display additional information.
    #[clap(
        long,
        env = "CRYPTOFUNDS_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Cryptorank fund and investor operations
    Funds(crate::funds::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Funds(sub_app) => crate::funds::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
