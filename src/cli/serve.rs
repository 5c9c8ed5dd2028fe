use std::path::PathBuf;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::server;

/// Execute the `serve` command: start the HTTP server.
pub async fn execute(
    host: Option<String>,
    port: Option<u16>,
    model: Option<PathBuf>,
) -> Result<()> {
    let mut config = EngineConfig::load()?;

    // Override config with CLI arguments
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(model) = model {
        config.model_path = model;
    }

    println!("A3S ML Engine starting...");
    println!("Listening on http://{}", config.bind_address());
    println!("Press Ctrl+C to stop");

    server::start(config).await
}
