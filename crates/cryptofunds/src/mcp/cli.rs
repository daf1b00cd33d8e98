#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "MCP server exposing the Cryptorank fund report tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Serve the fund report tools over stdio (one JSON-RPC message per line)
    #[clap(name = "stdio")]
    Stdio,

    /// Serve the fund report tools over HTTP with SSE
    #[clap(name = "sse")]
    Sse(SseOptions),
}

#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}
