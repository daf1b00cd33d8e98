use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Serve fund report tool calls over stdin/stdout, one JSON-RPC message
/// per line. Diagnostics go to stderr so stdout stays pure protocol.
pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting cryptofunds MCP server on stdio...");
        eprintln!();
    }

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF, client is gone
        }

        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        if global.verbose {
            eprintln!("Received: {request}");
        }

        let response = super::handle_request(request, &global).await;
        let response_json = serde_json::to_string(&response)?;

        if global.verbose {
            eprintln!("Sending: {response_json}");
        }

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
