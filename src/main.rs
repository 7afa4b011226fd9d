use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use waterwise_chat::{
    config::Config, repl, services::exchange::ExchangeClient, state::ChatState, telemetry, ui,
};

/// Terminal client for the water & sanitation awareness chat service.
#[derive(Parser, Debug)]
#[command(name = "waterwise-chat", version, about)]
struct Cli {
    /// Chat endpoint; defaults to http://localhost:8000/chat.
    #[arg(long)]
    endpoint: Option<String>,

    /// Line-by-line prompt instead of the full-screen view.
    #[arg(long)]
    plain: bool,

    /// Log file for the full-screen view; overrides WATERWISE_LOG_FILE.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint).context("invalid --endpoint")?;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }

    if cli.plain {
        telemetry::init_stderr()?;
    } else {
        telemetry::init_file(&config.log_file)?;
    }
    info!(endpoint = %config.endpoint, plain = cli.plain, "starting chat client");

    let client = ExchangeClient::new(config.endpoint.clone());

    if cli.plain {
        let state = ChatState::new();
        let stdin = BufReader::new(tokio::io::stdin());
        repl::run(stdin, tokio::io::stdout(), &state, &client)
            .await
            .context("line chat failed")?;
    } else {
        ui::run(ChatState::shared(), client, config.title).await?;
    }
    Ok(())
}
