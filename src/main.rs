use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_ml_engine::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, model } => {
            a3s_ml_engine::cli::serve::execute(host, port, model).await?;
        }
        Commands::Train { data, output } => {
            a3s_ml_engine::cli::train::execute(data, output)?;
        }
        Commands::Predict { texts, model } => {
            a3s_ml_engine::cli::predict::execute(&texts, model)?;
        }
        Commands::Show { model } => {
            a3s_ml_engine::cli::show::execute(model)?;
        }
        Commands::Config { save } => {
            a3s_ml_engine::cli::config::execute(save)?;
        }
        Commands::Normalize { text } => {
            a3s_ml_engine::cli::normalize::execute(&text);
        }
    }

    Ok(())
}
