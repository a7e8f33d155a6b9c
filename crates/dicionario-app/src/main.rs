use std::sync::Arc;

use clap::Parser;
use dicionario_app::protocol::ToolContent;
use dicionario_app::service::LookupService;
use dicionario_app::state::AppState;
use dicionario_app::{logging, server, tools};
use dicionario_client::RagClient;
use dicionario_config::Config;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Galician dictionary lookups as an MCP tool server over stdio
#[derive(Parser)]
#[command(name = "dicionario-mcp", version)]
struct Cli {
    /// Look up a single word, print the entry and exit
    #[arg(long, value_name = "WORD")]
    lookup: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::new();
    logging::init(&config)?;

    let client = RagClient::new(&config.dictionary)?;
    let state = Arc::new(AppState::new(config, LookupService::new(Arc::new(client))));

    if let Some(word) = cli.lookup {
        return print_lookup(&state, &word).await;
    }

    // Shutdown on Ctrl+C
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => shutdown.cancel(),
            Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
        }
    });

    run(state, cancel).await
}

async fn run(state: Arc<AppState>, cancel: CancellationToken) -> anyhow::Result<()> {
    let provider = state.lookup.provider();
    tracing::info!(
        name = %state.config.server.name,
        provider = %provider.name,
        endpoint = %provider.endpoint,
        "Serving dictionary tool on stdio"
    );

    server::serve(state, tokio::io::stdin(), tokio::io::stdout(), cancel).await
}

async fn print_lookup(state: &AppState, word: &str) -> anyhow::Result<()> {
    let word = tools::word_argument(&serde_json::json!({ "word": word }))?;
    let result = tools::lookup_word(state, &word).await;

    for content in &result.content {
        match content {
            ToolContent::Text { text } => println!("{text}"),
        }
    }

    if result.is_error {
        anyhow::bail!("lookup for {word:?} failed");
    }

    Ok(())
}
