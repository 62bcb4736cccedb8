use anyhow::{Context, Result};
use footprint_view::config::RenderConfig;
use footprint_view::host::{dispatch, error_codes, HostState, Request, Response};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries JSON-RPC, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = RenderConfig::from_env().context("Failed to load render config")?;
    info!("Starting footprint view server");
    let mut state = HostState::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Error reading stdin: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => dispatch(&mut state, request),
            Err(e) => {
                error!("Failed to parse request: {}", e);
                Response::error(None, error_codes::PARSE_ERROR, format!("Parse error: {}", e))
            }
        };

        let response_json = serde_json::to_string(&response).context("Failed to serialize response")?;
        writeln!(stdout, "{}", response_json).context("Failed to write response")?;
        stdout.flush().context("Failed to flush stdout")?;
    }

    info!("Shutting down");
    Ok(())
}
